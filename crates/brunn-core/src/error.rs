use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BrunnError {
    #[error("failed to load disease table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid disease table: {0}")]
    TableInvalid(String),

    #[error("failed to load field reports from {path}: {reason}")]
    InputLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
