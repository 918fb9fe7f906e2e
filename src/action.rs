use serde::{Deserialize, Serialize};

/// The kinds of action the engine knows how to apply.
///
/// Scripts name actions with plain strings (see [`ActionKind::from_name`]).
/// The catalogue is owned by whoever writes the scripts, so names that do not
/// map to a kind are tolerated by the engine rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Type the payload at the caret (`type-editor`).
    InsertText,
    /// Split the line at the caret (`enter`).
    Newline,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Move left while growing or shrinking the selection.
    ShiftArrowLeft,
    /// Move right while growing or shrinking the selection.
    ShiftArrowRight,
    Backspace,
    Space,
    Tab,
    /// Jump to column 0 of the current row.
    CommandLeft,
    /// Jump to the end of the current row.
    CommandRight,
    /// Narration spoken before the step is shown.
    SpeakBefore,
    /// Narration spoken after the step is shown.
    SpeakAfter,
    /// Narration spoken while the step is shown.
    SpeakDuring,
}

bitflags::bitflags! {
    /// Behavioral traits of an action kind.
    ///
    /// These can be combined to describe what an action does to the
    /// editor state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ActionTraits: u8 {
        /// `value` is a base-10 repeat count rather than a text payload.
        const REPEATABLE        = 0b0_0001;
        /// Moves the caret without dropping the selection anchor.
        const EXTENDS_SELECTION = 0b0_0010;
        /// Moves the caret and drops any selection anchor.
        const CLEARS_SELECTION  = 0b0_0100;
        /// Changes the buffer contents; consumes an active selection first.
        const EDITS             = 0b0_1000;
        /// Produces a speech caption and nothing else.
        const NARRATION         = 0b1_0000;
    }
}

impl ActionKind {
    pub const ALL: [ActionKind; 16] = [
        ActionKind::InsertText,
        ActionKind::Newline,
        ActionKind::ArrowUp,
        ActionKind::ArrowDown,
        ActionKind::ArrowLeft,
        ActionKind::ArrowRight,
        ActionKind::ShiftArrowLeft,
        ActionKind::ShiftArrowRight,
        ActionKind::Backspace,
        ActionKind::Space,
        ActionKind::Tab,
        ActionKind::CommandLeft,
        ActionKind::CommandRight,
        ActionKind::SpeakBefore,
        ActionKind::SpeakAfter,
        ActionKind::SpeakDuring,
    ];

    /// Looks up a kind by its script name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<ActionKind> {
        let kind = match name {
            "type-editor" => ActionKind::InsertText,
            "enter" => ActionKind::Newline,
            "arrow-up" => ActionKind::ArrowUp,
            "arrow-down" => ActionKind::ArrowDown,
            "arrow-left" => ActionKind::ArrowLeft,
            "arrow-right" => ActionKind::ArrowRight,
            "shift+arrow-left" => ActionKind::ShiftArrowLeft,
            "shift+arrow-right" => ActionKind::ShiftArrowRight,
            "backspace" => ActionKind::Backspace,
            "space" => ActionKind::Space,
            "tab" => ActionKind::Tab,
            "command-left" => ActionKind::CommandLeft,
            "command-right" => ActionKind::CommandRight,
            "speak-before" => ActionKind::SpeakBefore,
            "speak-after" => ActionKind::SpeakAfter,
            "speak-during" => ActionKind::SpeakDuring,
            _ => return None,
        };
        Some(kind)
    }

    /// The script name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::InsertText => "type-editor",
            ActionKind::Newline => "enter",
            ActionKind::ArrowUp => "arrow-up",
            ActionKind::ArrowDown => "arrow-down",
            ActionKind::ArrowLeft => "arrow-left",
            ActionKind::ArrowRight => "arrow-right",
            ActionKind::ShiftArrowLeft => "shift+arrow-left",
            ActionKind::ShiftArrowRight => "shift+arrow-right",
            ActionKind::Backspace => "backspace",
            ActionKind::Space => "space",
            ActionKind::Tab => "tab",
            ActionKind::CommandLeft => "command-left",
            ActionKind::CommandRight => "command-right",
            ActionKind::SpeakBefore => "speak-before",
            ActionKind::SpeakAfter => "speak-after",
            ActionKind::SpeakDuring => "speak-during",
        }
    }

    pub fn traits(self) -> ActionTraits {
        use ActionTraits as T;
        match self {
            ActionKind::InsertText => T::EDITS,
            ActionKind::Newline
            | ActionKind::Backspace
            | ActionKind::Space
            | ActionKind::Tab => T::EDITS | T::REPEATABLE,
            ActionKind::ArrowUp
            | ActionKind::ArrowDown
            | ActionKind::ArrowLeft
            | ActionKind::ArrowRight => T::CLEARS_SELECTION | T::REPEATABLE,
            ActionKind::ShiftArrowLeft | ActionKind::ShiftArrowRight => {
                T::EXTENDS_SELECTION | T::REPEATABLE
            }
            ActionKind::CommandLeft | ActionKind::CommandRight => T::CLEARS_SELECTION,
            ActionKind::SpeakBefore | ActionKind::SpeakAfter | ActionKind::SpeakDuring => {
                T::NARRATION
            }
        }
    }

    pub fn is_repeatable(self) -> bool {
        self.traits().contains(ActionTraits::REPEATABLE)
    }

    pub fn is_narration(self) -> bool {
        self.traits().contains(ActionTraits::NARRATION)
    }
}

/// One scripted instruction: a kind name and its value.
///
/// Repeatable kinds read `value` as a repeat count; every other kind reads it
/// as literal text (typed text, or the words to be spoken).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub value: String,
}

impl Action {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Builds an action for a known kind.
    pub fn of(kind: ActionKind, value: impl Into<String>) -> Self {
        Self::new(kind.name(), value)
    }

    /// Resolves the script name, `None` for names outside the catalogue.
    pub fn kind(&self) -> Option<ActionKind> {
        ActionKind::from_name(&self.name)
    }

    pub fn is_narration(&self) -> bool {
        self.kind().is_some_and(ActionKind::is_narration)
    }

    /// How many times the action's effect is applied.
    ///
    /// Non-repeatable kinds always resolve to 1. Repeatable kinds parse the
    /// trimmed value as a base-10 integer; anything that is not a
    /// non-negative integer resolves to 0 and the step becomes a no-op.
    /// Counts above [`MAX_REPEAT`] are clamped to it.
    pub fn repeat_count(&self) -> usize {
        match self.kind() {
            Some(kind) if kind.is_repeatable() => parse_repeat(&self.value),
            _ => 1,
        }
    }
}

/// Upper bound on a resolved repeat count; larger counts are clamped to it.
pub const MAX_REPEAT: usize = 10_000;

pub(crate) fn parse_repeat(value: &str) -> usize {
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => {
            let count = usize::try_from(n).unwrap_or(usize::MAX);
            if count > MAX_REPEAT {
                tracing::debug!(value, max = MAX_REPEAT, "repeat count clamped");
            }
            count.min(MAX_REPEAT)
        }
        Ok(_) => 0,
        Err(_) => {
            tracing::debug!(value, "repeat count is not an integer, resolving to 0");
            0
        }
    }
}

/// Parses a JSON array of `{"name": ..., "value": ...}` records.
pub fn parse_actions_json(json: &str) -> crate::Result<Vec<Action>> {
    Ok(serde_json::from_str(json)?)
}
