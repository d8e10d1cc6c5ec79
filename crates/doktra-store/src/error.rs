use thiserror::Error;

use doktra_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {key}")]
    NotFound { key: String },

    #[error("invalid key: {key}")]
    InvalidKey { key: String },

    #[error("unknown patient: {id}")]
    UnknownPatient { id: String },

    #[error("no data directory found")]
    NoDataDir,

    #[error("validation failed: {0}")]
    Validation(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
