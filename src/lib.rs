//! Replays scripted editing actions against an in-memory line buffer and
//! records the editor state after every step, for rendering captioned,
//! highlighted tutorial frames.

pub mod action;
pub mod buffer;
pub mod engine;
pub mod error;
pub mod frame;
pub mod history;
pub mod traits;
pub mod types;

pub use crate::action::{Action, ActionKind, ActionTraits, MAX_REPEAT, parse_actions_json};
pub use crate::buffer::LineBuffer;
pub use crate::engine::{Editor, EditorBuilder, EditorState};
pub use crate::error::{Error, Result};
pub use crate::frame::{AnnotatedFrame, SpeechCaption, export_frames, frames_to_json};
pub use crate::history::{History, HistoryEntry};
pub use crate::traits::LineStore;
pub use crate::types::{Position, Range, Selection};
