//! Renderer-facing frames derived from the action log and its history.

use serde::Serialize;

use crate::action::Action;
use crate::error::Result;
use crate::history::History;
use crate::types::Position;

/// Narration attached to a single frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechCaption {
    /// The narration action's name, e.g. `speak-before`.
    pub speech_type: String,
    /// The words to be spoken.
    pub speech_value: String,
}

/// One rendered moment: an applied action and the editor state it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedFrame {
    pub action: Action,
    pub code: String,
    pub caret_position: Position,
    /// Selection anchor; serialized as `null` when nothing was selected.
    pub highlight_start_position: Option<Position>,
    pub highlighted_code: String,
    pub speech_captions: Vec<SpeechCaption>,
}

/// Builds one frame per applied action.
///
/// Frame `i` pairs `actions[i]` with the snapshot taken right after it; the
/// initial snapshot has no frame. Captions come only from the frame's own
/// action, never from earlier steps.
pub fn export_frames(actions: &[Action], history: &History) -> Vec<AnnotatedFrame> {
    actions
        .iter()
        .zip(history.entries().iter().skip(1))
        .map(|(action, entry)| AnnotatedFrame {
            action: action.clone(),
            code: entry.code(),
            caret_position: entry.caret,
            highlight_start_position: entry.anchor,
            highlighted_code: entry.highlighted.clone(),
            speech_captions: captions_for(action),
        })
        .collect()
}

fn captions_for(action: &Action) -> Vec<SpeechCaption> {
    if !action.is_narration() {
        return Vec::new();
    }
    vec![SpeechCaption {
        speech_type: action.name.clone(),
        speech_value: action.value.clone(),
    }]
}

/// Serializes frames as a JSON array for the renderer.
pub fn frames_to_json(frames: &[AnnotatedFrame]) -> Result<String> {
    Ok(serde_json::to_string_pretty(frames)?)
}
