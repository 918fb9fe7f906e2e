use thiserror::Error;

/// Errors surfaced by the editor and its exporters.
#[derive(Debug, Error)]
pub enum Error {
    #[error("action index {index} is out of range: only {recorded} actions have been recorded")]
    HistoryOutOfRange { index: usize, recorded: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
