//! Append-only per-step snapshots of editor state.

use serde::Serialize;

use crate::engine::EditorState;
use crate::error::{Error, Result};
use crate::traits::LineStore;
use crate::types::Position;

/// Editor state captured right after one action was applied.
///
/// Entries are independent copies; they stay valid however far the live
/// editor advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub lines: Vec<String>,
    pub caret: Position,
    /// Selection anchor, `None` when nothing was selected.
    pub anchor: Option<Position>,
    /// Selected text, empty when nothing was selected.
    pub highlighted: String,
}

impl HistoryEntry {
    pub fn capture<B: LineStore>(state: &EditorState<B>) -> Self {
        Self {
            lines: state.buffer().to_lines(),
            caret: state.caret(),
            anchor: state.anchor(),
            highlighted: state.highlighted_text(),
        }
    }

    pub fn code(&self) -> String {
        self.lines.join("\n")
    }
}

/// Snapshot log: one initial entry plus one entry per applied action.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Starts the log with the pre-action state.
    pub fn new<B: LineStore>(initial: &EditorState<B>) -> Self {
        Self {
            entries: vec![HistoryEntry::capture(initial)],
        }
    }

    pub fn record<B: LineStore>(&mut self, state: &EditorState<B>) {
        self.entries.push(HistoryEntry::capture(state));
    }

    /// Number of actions recorded so far (the initial entry is not counted).
    pub fn recorded_actions(&self) -> usize {
        self.entries.len() - 1
    }

    /// All entries, initial state first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Total entry count, always `recorded_actions() + 1`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the initial entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn initial(&self) -> &HistoryEntry {
        &self.entries[0]
    }

    pub fn latest(&self) -> &HistoryEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// The state right after action `index` was applied.
    pub fn after_action(&self, index: usize) -> Result<&HistoryEntry> {
        index
            .checked_add(1)
            .and_then(|slot| self.entries.get(slot))
            .ok_or(Error::HistoryOutOfRange {
                index,
                recorded: self.recorded_actions(),
            })
    }
}
