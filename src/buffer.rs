use std::borrow::Cow;
use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::traits::LineStore;

/// Number of grapheme clusters in `s`.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of grapheme column `col` in `s`, clamped to `s.len()`.
pub fn byte_offset(s: &str, col: usize) -> usize {
    s.grapheme_indices(true)
        .nth(col)
        .map_or(s.len(), |(idx, _)| idx)
}

/// Splits `s` at grapheme column `col` (clamped to the end of `s`).
pub fn split_at_col(s: &str, col: usize) -> (&str, &str) {
    s.split_at(byte_offset(s, col))
}

/// The default line store: one owned `String` per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer from `text`, one line per `\n`-separated segment.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n').map(str::to_owned).collect())
    }

    /// An empty vector becomes a single empty line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::default();
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineStore for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, row: usize) -> Cow<'_, str> {
        Cow::Borrowed(&self.lines[row])
    }

    fn replace_line(&mut self, row: usize, text: String) {
        self.lines[row] = text;
    }

    fn insert_lines(&mut self, at: usize, lines: Vec<String>) {
        self.lines.splice(at..at, lines);
    }

    fn remove_lines(&mut self, rows: Range<usize>) {
        assert!(
            rows.len() < self.lines.len(),
            "cannot remove every line of a buffer"
        );
        self.lines.drain(rows);
    }

    fn to_lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}
