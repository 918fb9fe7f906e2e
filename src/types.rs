use serde::{Deserialize, Serialize};

/// A position within a line buffer.
///
/// Positions are zero-indexed and column values are counted in grapheme clusters,
/// not bytes or chars. This ensures correct handling of emoji and combining characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row (line) number.
    pub row: usize,
    /// Zero-based column position in grapheme clusters.
    pub col: usize,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A range of text defined by start and end positions.
///
/// Ranges are half-open intervals [start, end), meaning the start position
/// is included but the end position is excluded. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start position (inclusive).
    pub start: Position,
    /// The end position (exclusive).
    pub end: Position,
}

impl Range {
    /// Orders two endpoints into document order.
    ///
    /// Selecting left-to-right and right-to-left yield the same range.
    pub fn between(a: Position, b: Position) -> Self {
        if a <= b {
            Range { start: a, end: b }
        } else {
            Range { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_single_row(&self) -> bool {
        self.start.row == self.end.row
    }
}

/// A selection between a fixed anchor and the live caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Where the selection began.
    pub anchor: Position,
    /// The moving end; always equal to the caret.
    pub head: Position,
}

impl Selection {
    pub fn range(&self) -> Range {
        Range::between(self.anchor, self.head)
    }
}
