#![allow(dead_code)]

pub mod rope_lines;

use keyscript::{Action, ActionKind};

pub fn act(kind: ActionKind, value: &str) -> Action {
    Action::of(kind, value)
}

pub fn type_text(text: &str) -> Action {
    Action::of(ActionKind::InsertText, text)
}

pub fn times(kind: ActionKind, count: usize) -> Action {
    Action::of(kind, count.to_string())
}
