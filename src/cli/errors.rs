use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error: {0}")]
    Split(#[from] snipsplit::Error),

    #[error("Error: could not print usage: {0}")]
    Usage(#[source] std::io::Error),
}
