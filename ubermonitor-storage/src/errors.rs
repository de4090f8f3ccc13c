use std::io;

use thiserror::Error;

/// Errors emitted while reading, writing, or decoding stored settings.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed settings value: {0}")]
    Malformed(String),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
