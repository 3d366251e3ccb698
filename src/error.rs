use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}
