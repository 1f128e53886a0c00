//! Error types for the log crate.

use thiserror::Error;

/// Errors that can occur while appending to a log.
#[derive(Debug, Error)]
pub enum LogError {
    /// Opening or writing the log file failed.
    #[error("log write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The entry could not be serialized.
    #[error("log entry serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for log operations.
pub type LogResult<T> = Result<T, LogError>;
