//! Crate-level error type and `Result` alias.
//! Separates whole-run failures (missing input, bad JSON, wrong top-level shape)
//! from per-record failures (`InvalidRecord`, `UnsafeId`) that the batch pass
//! reports and skips.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("JSON must contain an array of snippets, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Invalid snippet record: {reason}")]
    InvalidRecord { position: usize, reason: String },

    #[error("Snippet id {id:?} cannot be used in a file name")]
    UnsafeId { id: String },
}
