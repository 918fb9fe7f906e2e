use std::borrow::Cow;
use std::ops::Range;

use keyscript::LineStore;
use ropey::Rope;

/// Rope-backed line store, used as an independent model of the buffer.
#[derive(Debug, Clone)]
pub struct RopeLines {
    rope: Rope,
}

impl RopeLines {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Char index where `row` starts.
    fn row_start(&self, row: usize) -> usize {
        self.rope.line_to_char(row)
    }

    /// Char index just before `row`'s line break (or the end of the rope).
    fn row_end(&self, row: usize) -> usize {
        self.row_start(row) + self.line(row).chars().count()
    }
}

impl LineStore for RopeLines {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, row: usize) -> Cow<'_, str> {
        let mut s = self.rope.line(row).to_string();
        // Remove trailing newline if present
        if s.ends_with('\n') {
            s.pop();
        }
        Cow::Owned(s)
    }

    fn replace_line(&mut self, row: usize, text: String) {
        let start = self.row_start(row);
        let end = self.row_end(row);
        self.rope.remove(start..end);
        self.rope.insert(start, &text);
    }

    fn insert_lines(&mut self, at: usize, lines: Vec<String>) {
        let joined = lines.join("\n");
        if at < self.line_count() {
            self.rope.insert(self.row_start(at), &format!("{joined}\n"));
        } else {
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("\n{joined}"));
        }
    }

    fn remove_lines(&mut self, rows: Range<usize>) {
        assert!(rows.len() < self.line_count(), "cannot remove every line");
        if rows.end < self.line_count() {
            let start = self.row_start(rows.start);
            let end = self.row_start(rows.end);
            self.rope.remove(start..end);
        } else {
            // Dropping the tail: take the preceding line break with it
            let start = self.row_start(rows.start) - 1;
            let end = self.rope.len_chars();
            self.rope.remove(start..end);
        }
    }
}
