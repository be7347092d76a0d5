use unicode_segmentation::UnicodeSegmentation;

use crate::config::Config;
use crate::resolver::resolve;
use crate::traits::TextOps;
use crate::types::{Command, Context, Direction, Position, Range, Selection, Span, Toggle};

/// Drives toggle resolution against a host buffer and turns results into
/// edit commands.
///
/// The engine borrows its configuration and holds no other state, so
/// concurrent use over different buffers is free and hosts can rebuild the
/// configuration whenever their settings change.
#[derive(Debug, Clone, Copy)]
pub struct Toggler<'cfg> {
    config: &'cfg Config,
}

/// The result of toggling a set of selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Edits for the host to apply, in selection order.
    pub commands: Vec<Command>,
    /// Indices of selections no toggle was found for. The host decides how
    /// to report these, typically with a pointer to its settings.
    pub unmatched: Vec<usize>,
}

impl Outcome {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

impl<'cfg> Toggler<'cfg> {
    pub fn new(config: &'cfg Config) -> Self {
        Self { config }
    }

    /// Resolves a single selection without emitting commands.
    ///
    /// A non-empty selection is matched verbatim and always overrides
    /// cursor-position inference. For a caret, the word is inferred from
    /// the line under `sel.active`.
    pub fn resolve_selection<T: TextOps>(
        &self,
        text: &T,
        sel: Selection,
        direction: Direction,
    ) -> Toggle {
        if !sel.is_empty() {
            let selected = text.selection_text(sel);
            return resolve(self.config, Context::Selection(&selected), direction);
        }

        let line = text.line_text(sel.active.line);
        let cursor = byte_offset(&line, sel.active.col);

        resolve(
            self.config,
            Context::Line {
                text: &line,
                cursor,
            },
            direction,
        )
    }

    /// Toggles every selection, returning the edits to apply and the
    /// indices of selections that matched nothing.
    ///
    /// Explicit selections are replaced in place. Inferred ranges are
    /// rewritten as a delete followed by an insert at the span start, which
    /// keeps host cursors anchored to the start of the replaced word.
    pub fn toggle<T: TextOps>(
        &self,
        text: &T,
        selections: &[Selection],
        direction: Direction,
    ) -> Outcome {
        let mut outcome = Outcome::default();

        for (i, &sel) in selections.iter().enumerate() {
            let toggle = self.resolve_selection(text, sel, direction);

            let Some(replacement) = toggle.replacement else {
                outcome.unmatched.push(i);
                continue;
            };

            match toggle.range {
                Some(span) if !toggle.selected => {
                    let line = sel.active.line;
                    let line_text = text.line_text(line);
                    let range = span_to_range(&line_text, line, span);

                    outcome.commands.push(Command::Delete { range });
                    outcome.commands.push(Command::Insert {
                        at: range.start,
                        text: replacement,
                    });
                }
                _ => outcome.commands.push(Command::Replace {
                    range: sel.range(),
                    text: replacement,
                }),
            }
        }

        outcome
    }
}

/// Converts a grapheme column into a byte offset within `line`, clamping
/// past-the-end columns to the line length.
fn byte_offset(line: &str, col: u32) -> usize {
    line.grapheme_indices(true)
        .nth(col as usize)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

/// Converts a byte offset within `line` back into a grapheme column.
fn grapheme_col(line: &str, offset: usize) -> u32 {
    line[..offset].graphemes(true).count() as u32
}

fn span_to_range(line_text: &str, line: u32, span: Span) -> Range {
    Range {
        start: Position {
            line,
            col: grapheme_col(line_text, span.start),
        },
        end: Position {
            line,
            col: grapheme_col(line_text, span.end),
        },
    }
}
