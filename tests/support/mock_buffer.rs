use ropey::Rope;
use toggle_mini::traits::TextOps;
use toggle_mini::types::Selection;
use unicode_segmentation::UnicodeSegmentation;

pub struct MockBuffer {
    rope: Rope,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    fn line_str(&self, line: u32) -> String {
        if line as usize >= self.rope.len_lines() {
            return String::new();
        }
        let line_ref = self.rope.line(line as usize);
        let mut s = line_ref.to_string();
        // Remove trailing newline if present
        if s.ends_with('\n') {
            s.pop();
        }
        s
    }
}

impl TextOps for MockBuffer {
    fn line_text(&self, line: u32) -> String {
        self.line_str(line)
    }

    fn selection_text(&self, sel: Selection) -> String {
        if sel.is_empty() {
            return String::new();
        }
        // Toggles are line-local; selections in these tests stay within one line.
        let line = self.line_str(sel.start.line);
        line.graphemes(true)
            .skip(sel.start.col as usize)
            .take((sel.end.col - sel.start.col) as usize)
            .collect()
    }
}
