use std::borrow::Cow;
use std::ops::Range;

use crate::buffer::grapheme_len;

/// Line-addressed text storage driven by the engine.
///
/// Rows are 0-based. Implementations must always hold at least one line
/// (possibly empty). The engine only ever passes in-bounds rows; out-of-range
/// access is a programmer error and may panic.
pub trait LineStore: Clone {
    // Basic queries
    fn line_count(&self) -> usize;
    fn line(&self, row: usize) -> Cow<'_, str>;

    /// Length of `row` in grapheme columns.
    fn line_len(&self, row: usize) -> usize {
        grapheme_len(&self.line(row))
    }

    // Structural edits
    fn replace_line(&mut self, row: usize, text: String);
    /// Inserts `lines` so that the first of them lands at row `at`.
    /// `at == line_count()` appends.
    fn insert_lines(&mut self, at: usize, lines: Vec<String>);
    /// Removes the rows in `rows`. Must leave at least one line behind.
    fn remove_lines(&mut self, rows: Range<usize>);

    fn last_row(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    // Snapshots
    fn to_lines(&self) -> Vec<String> {
        (0..self.line_count())
            .map(|row| self.line(row).into_owned())
            .collect()
    }

    /// The whole buffer joined with `\n`.
    fn text(&self) -> String {
        self.to_lines().join("\n")
    }
}
