use crate::types::Selection;

/// The host buffer capabilities toggle resolution needs.
///
/// Hosts implement these two queries and apply the [`Command`]s returned
/// by the engine; the engine never touches editor-specific types.
///
/// [`Command`]: crate::types::Command
pub trait TextOps {
    /// Full text of a line, without its trailing newline.
    fn line_text(&self, line: u32) -> String;

    /// Text covered by a selection; empty for a caret.
    fn selection_text(&self, sel: Selection) -> String;
}
