use thiserror::Error;

/// Subtext's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Subtext's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition violation in the data handed to us (e.g. a negative timestamp).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A caller-level misuse of the configuration surface (e.g. word-level options
    /// without word timestamps). Surfaced before any file is processed.
    #[error("configuration conflict: {0}")]
    ConfigurationConflict(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn configuration_conflict(message: impl Into<String>) -> Self {
        Self::ConfigurationConflict(message.into())
    }
}
