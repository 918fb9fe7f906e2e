use crate::action::{Action, ActionKind};
use crate::buffer::{LineBuffer, byte_offset, grapheme_len, split_at_col};
use crate::error::Result;
use crate::frame::{AnnotatedFrame, export_frames, frames_to_json};
use crate::history::{History, HistoryEntry};
use crate::traits::LineStore;
use crate::types::{Position, Range, Selection};

/// Buffer, caret and selection anchor: everything an action can change.
///
/// Transitions are applied with [`EditorState::apply`] (pure) or
/// [`EditorState::apply_in_place`]. Every transition completes; there is no
/// partially applied state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState<B: LineStore = LineBuffer> {
    buffer: B,
    caret: Position,
    anchor: Option<Position>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(LineBuffer::new())
    }
}

impl<B: LineStore> EditorState<B> {
    /// Caret at the origin, nothing selected.
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            caret: Position::ZERO,
            anchor: None,
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn caret(&self) -> Position {
        self.caret
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    pub fn selection(&self) -> Option<Selection> {
        self.anchor.map(|anchor| Selection {
            anchor,
            head: self.caret,
        })
    }

    /// The buffer joined with `\n`.
    pub fn code(&self) -> String {
        self.buffer.text()
    }

    /// Text between anchor and caret, empty when nothing is selected.
    pub fn highlighted_text(&self) -> String {
        self.selected_range()
            .map(|range| self.text_in(range))
            .unwrap_or_default()
    }

    /// Returns the state that results from applying `action`.
    pub fn apply(&self, action: &Action) -> Self {
        let mut next = self.clone();
        next.apply_in_place(action);
        next
    }

    /// Applies every action in order, starting from `self`.
    pub fn replay<'a>(&self, actions: impl IntoIterator<Item = &'a Action>) -> Self {
        let mut state = self.clone();
        for action in actions {
            state.apply_in_place(action);
        }
        state
    }

    /// Applies `action`, returning its kind, or `None` when the name is not
    /// in the catalogue (in which case nothing changes).
    pub fn apply_in_place(&mut self, action: &Action) -> Option<ActionKind> {
        let kind = action.kind()?;
        let count = action.repeat_count();

        match kind {
            ActionKind::InsertText => self.insert_text(&action.value.repeat(count)),
            ActionKind::Space => self.insert_text(&" ".repeat(count)),
            ActionKind::Tab => self.insert_text(&"\t".repeat(count)),
            ActionKind::Newline => self.newline(count),
            ActionKind::Backspace => self.backspace(count),
            ActionKind::ArrowUp => {
                self.anchor = None;
                self.caret.row = self.caret.row.saturating_sub(count);
            }
            ActionKind::ArrowDown => {
                self.anchor = None;
                self.caret.row = self
                    .caret
                    .row
                    .saturating_add(count)
                    .min(self.buffer.last_row());
            }
            ActionKind::ArrowLeft => {
                self.anchor = None;
                self.repeat_step(count, Self::step_left);
            }
            ActionKind::ArrowRight => {
                self.anchor = None;
                self.repeat_step(count, Self::step_right);
            }
            ActionKind::ShiftArrowLeft => {
                self.anchor_at_caret();
                self.repeat_step(count, Self::step_left);
            }
            ActionKind::ShiftArrowRight => {
                self.anchor_at_caret();
                self.repeat_step(count, Self::step_right);
            }
            ActionKind::CommandLeft => {
                self.anchor = None;
                self.caret.col = 0;
            }
            ActionKind::CommandRight => {
                self.anchor = None;
                self.caret.col = self.buffer.line_len(self.caret.row);
            }
            ActionKind::SpeakBefore | ActionKind::SpeakAfter | ActionKind::SpeakDuring => {}
        }

        Some(kind)
    }

    // --- selection -------------------------------------------------------

    /// Starts a selection at the caret unless one is already running.
    fn anchor_at_caret(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.caret);
        }
    }

    /// Document-ordered span of the selection, `None` if there is no anchor.
    /// The span is empty when the anchor sits on the caret.
    fn selected_range(&self) -> Option<Range> {
        self.anchor
            .map(|anchor| Range::between(anchor, self.caret))
    }

    fn text_in(&self, range: Range) -> String {
        let Range { start, end } = range;
        if range.is_empty() {
            return String::new();
        }
        if range.is_single_row() {
            let line = self.buffer.line(start.row);
            let from = byte_offset(&line, start.col);
            let to = byte_offset(&line, end.col);
            return line[from..to].to_owned();
        }

        let mut parts = Vec::with_capacity(end.row - start.row + 1);
        parts.push(split_at_col(&self.buffer.line(start.row), start.col).1.to_owned());
        for row in start.row + 1..end.row {
            parts.push(self.buffer.line(row).into_owned());
        }
        parts.push(split_at_col(&self.buffer.line(end.row), end.col).0.to_owned());
        parts.join("\n")
    }

    /// Drops the anchor and deletes the selected span, if any.
    /// Returns whether a selection was consumed, even an empty one.
    fn delete_selection(&mut self) -> bool {
        let range = self.selected_range();
        self.anchor = None;
        match range {
            Some(range) => {
                self.delete_range(range);
                true
            }
            None => false,
        }
    }

    fn delete_range(&mut self, range: Range) {
        let Range { start, end } = range;
        let start_line = self.buffer.line(start.row).into_owned();
        let end_line = if range.is_single_row() {
            start_line.clone()
        } else {
            self.buffer.line(end.row).into_owned()
        };

        let head = split_at_col(&start_line, start.col).0;
        let tail = split_at_col(&end_line, end.col).1;
        let col = grapheme_len(head);

        self.buffer.replace_line(start.row, format!("{head}{tail}"));
        if end.row > start.row {
            self.buffer.remove_lines(start.row + 1..end.row + 1);
        }
        self.caret = Position::new(start.row, col);
    }

    // --- edits -----------------------------------------------------------

    /// Inserts `text` at the caret, replacing any selection.
    ///
    /// A caret column past the end of the row (left there by arrow-up/down)
    /// is clamped to the row length first, so the caret ends at
    /// `min(col, len) + len(text)`.
    fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        if text.is_empty() {
            return;
        }

        let row = self.caret.row;
        let line = self.buffer.line(row).into_owned();
        let (before, after) = split_at_col(&line, self.caret.col);

        let pieces: Vec<&str> = text.split('\n').collect();
        let Some((last, leading)) = pieces.split_last() else {
            return;
        };

        match leading.split_first() {
            None => {
                let head = format!("{before}{last}");
                self.caret.col = grapheme_len(&head);
                self.buffer.replace_line(row, head + after);
            }
            Some((first, middle)) => {
                self.buffer.replace_line(row, format!("{before}{first}"));
                let mut below: Vec<String> = middle.iter().map(|s| (*s).to_owned()).collect();
                below.push(format!("{last}{after}"));
                let added = below.len();
                self.buffer.insert_lines(row + 1, below);
                self.caret = Position::new(row + added, grapheme_len(last));
            }
        }
    }

    fn newline(&mut self, count: usize) {
        self.delete_selection();
        for _ in 0..count {
            self.split_line();
        }
    }

    fn split_line(&mut self) {
        let row = self.caret.row;
        let line = self.buffer.line(row).into_owned();
        let (before, after) = split_at_col(&line, self.caret.col);
        let after = after.to_owned();

        self.buffer.replace_line(row, before.to_owned());
        self.buffer.insert_lines(row + 1, vec![after]);
        self.caret = Position::new(row + 1, 0);
    }

    fn backspace(&mut self, count: usize) {
        if self.delete_selection() {
            return;
        }
        self.repeat_step(count, Self::delete_before_caret);
    }

    fn delete_before_caret(&mut self) -> bool {
        let row = self.caret.row;
        let col = self.caret.col.min(self.buffer.line_len(row));

        if col > 0 {
            let mut line = self.buffer.line(row).into_owned();
            let from = byte_offset(&line, col - 1);
            let to = byte_offset(&line, col);
            line.replace_range(from..to, "");
            self.buffer.replace_line(row, line);
            self.caret.col = col - 1;
            true
        } else if row > 0 {
            let mut merged = self.buffer.line(row - 1).into_owned();
            let join_col = grapheme_len(&merged);
            merged.push_str(&self.buffer.line(row));
            self.buffer.replace_line(row - 1, merged);
            self.buffer.remove_lines(row..row + 1);
            self.caret = Position::new(row - 1, join_col);
            true
        } else {
            false
        }
    }

    // --- caret moves -----------------------------------------------------

    /// Runs `step` up to `count` times, stopping once it reports no progress.
    fn repeat_step(&mut self, count: usize, mut step: impl FnMut(&mut Self) -> bool) {
        for _ in 0..count {
            if !step(self) {
                break;
            }
        }
    }

    fn step_left(&mut self) -> bool {
        if self.caret.col > 0 {
            self.caret.col -= 1;
        } else if self.caret.row > 0 {
            self.caret.row -= 1;
            self.caret.col = self.buffer.line_len(self.caret.row);
        } else {
            return false;
        }
        true
    }

    fn step_right(&mut self) -> bool {
        if self.caret.col < self.buffer.line_len(self.caret.row) {
            self.caret.col += 1;
        } else if self.caret.row < self.buffer.last_row() {
            self.caret.row += 1;
            self.caret.col = 0;
        } else {
            return false;
        }
        true
    }
}

/// Drives an [`EditorState`] through a script and records every step.
#[derive(Debug, Clone)]
pub struct Editor<B: LineStore = LineBuffer> {
    state: EditorState<B>,
    actions: Vec<Action>,
    history: History,
    verbose: bool,
}

/// Configuration for an [`Editor`].
#[derive(Debug, Clone, Default)]
pub struct EditorBuilder {
    verbose: bool,
    initial_text: Option<String>,
    actions: Vec<Action>,
}

impl EditorBuilder {
    /// Log every applied action and the resulting code at `info` level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Starting contents for [`EditorBuilder::build`]. Ignored by
    /// [`EditorBuilder::build_with`], which takes its buffer as given.
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = Some(text.into());
        self
    }

    /// Actions applied, in order, as soon as the editor is built.
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn build(self) -> Editor {
        let buffer = self
            .initial_text
            .as_deref()
            .map_or_else(LineBuffer::new, LineBuffer::from_text);
        self.build_with(buffer)
    }

    pub fn build_with<B: LineStore>(self, buffer: B) -> Editor<B> {
        let state = EditorState::new(buffer);
        let history = History::new(&state);
        let mut editor = Editor {
            state,
            actions: Vec::with_capacity(self.actions.len()),
            history,
            verbose: self.verbose,
        };
        editor.apply_actions(self.actions);
        editor
    }
}

impl Default for Editor {
    fn default() -> Self {
        EditorBuilder::default().build()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An editor that has already applied `actions`.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        EditorBuilder::default().actions(actions).build()
    }

    pub fn builder() -> EditorBuilder {
        EditorBuilder::default()
    }
}

impl<B: LineStore> Editor<B> {
    /// Applies one action, records the resulting state and returns the code.
    pub fn apply_action(&mut self, action: Action) -> String {
        let index = self.actions.len();
        if self.state.apply_in_place(&action).is_none() {
            tracing::warn!(
                index,
                name = %action.name,
                "unrecognized action, recording it as a no-op"
            );
        }
        self.history.record(&self.state);

        let code = self.state.code();
        if self.verbose {
            tracing::info!(index, name = %action.name, value = %action.value, code = %code, "applied action");
        } else {
            tracing::debug!(index, name = %action.name, "applied action");
        }
        self.actions.push(action);
        code
    }

    /// Applies every action in order and returns the final code.
    pub fn apply_actions(&mut self, actions: impl IntoIterator<Item = Action>) -> String {
        for action in actions {
            self.apply_action(action);
        }
        self.current_code()
    }

    pub fn current_code(&self) -> String {
        self.state.code()
    }

    pub fn state(&self) -> &EditorState<B> {
        &self.state
    }

    pub fn caret(&self) -> Position {
        self.state.caret()
    }

    pub fn highlighted_code(&self) -> String {
        self.state.highlighted_text()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Every action applied so far, in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot taken right after action `index`.
    pub fn entry_at_action_index(&self, index: usize) -> Result<&HistoryEntry> {
        self.history.after_action(index)
    }

    /// Code right after action `index` was applied.
    pub fn code_at_action_index(&self, index: usize) -> Result<String> {
        self.history.after_action(index).map(HistoryEntry::code)
    }

    /// Highlighted text right after action `index` was applied.
    pub fn highlighted_code_at_action_index(&self, index: usize) -> Result<String> {
        self.history
            .after_action(index)
            .map(|entry| entry.highlighted.clone())
    }

    /// Code of every recorded snapshot, initial state first.
    pub fn code_history(&self) -> Vec<String> {
        self.history.entries().iter().map(HistoryEntry::code).collect()
    }

    pub fn annotated_frames(&self) -> Vec<AnnotatedFrame> {
        export_frames(&self.actions, &self.history)
    }

    pub fn annotated_frames_json(&self) -> Result<String> {
        frames_to_json(&self.annotated_frames())
    }
}
