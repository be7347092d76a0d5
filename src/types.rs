/// A position within a text buffer.
///
/// Positions are zero-indexed and column values are counted in grapheme clusters,
/// not bytes or chars. This ensures correct handling of emoji and combining characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column position in grapheme clusters.
    pub col: u32,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { line: 0, col: 0 };
}

/// A range of text defined by start and end positions.
///
/// Ranges are half-open intervals [start, end), meaning the start position
/// is included but the end position is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start position (inclusive).
    pub start: Position,
    /// The end position (exclusive).
    pub end: Position,
}

/// A host selection.
///
/// `active` is the cursor end of the selection and drives word inference
/// when the selection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The start of the selection.
    pub start: Position,
    /// The end of the selection.
    pub end: Position,
    /// The cursor position.
    pub active: Position,
}

impl Selection {
    /// A caret with no selected text.
    pub fn caret(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
            active: pos,
        }
    }

    /// A selection spanning [start, end) with the cursor at `end`.
    pub fn span(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            active: end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range {
        Range {
            start: self.start,
            end: self.end,
        }
    }
}

/// The direction a toggle group is cycled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the next word in the group, wrapping at the end.
    Forward,
    /// Move to the previous word in the group, wrapping at the start.
    Reverse,
}

/// A byte-offset span within a single line of text.
///
/// Both offsets index into the line's UTF-8 representation. Containment is
/// inclusive of both ends: a cursor sitting immediately after a word still
/// belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Span {
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// The text a toggle is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context<'a> {
    /// An explicit selection. Its text is matched verbatim and word
    /// inference is skipped.
    Selection(&'a str),
    /// No selection; the word is inferred by scanning the line for a
    /// configured word whose occurrence contains the cursor.
    Line {
        /// The full line text, without its trailing newline.
        text: &'a str,
        /// Byte offset of the cursor within `text`.
        cursor: usize,
    },
}

/// The result of a toggle resolution.
///
/// An absent `replacement` means no configured toggle matched. This is a
/// normal outcome, not an error; the host decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    /// Whether resolution was driven by an explicit selection rather than
    /// inferred from the cursor position.
    pub selected: bool,
    /// Span of the matched occurrence when the word was inferred from the
    /// line. Always `None` for explicit selections.
    pub range: Option<Span>,
    /// The replacement word, with the matched word's case applied.
    pub replacement: Option<String>,
}

impl Toggle {
    pub(crate) fn none(selected: bool) -> Self {
        Self {
            selected,
            range: None,
            replacement: None,
        }
    }
}

/// Edit commands emitted for the host to execute.
///
/// These represent the concrete edits that should be applied to the text
/// buffer. The host is responsible for implementing them on its own text
/// storage, along with undo grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the text in a range.
    Replace { range: Range, text: String },
    /// Delete the text in a range.
    Delete { range: Range },
    /// Insert text at a position.
    Insert { at: Position, text: String },
}
