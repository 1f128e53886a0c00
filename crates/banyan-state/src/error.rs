//! Error types for state persistence.

use thiserror::Error;

/// Errors that can occur while loading or persisting sweep state.
#[derive(Debug, Error)]
pub enum StateError {
    /// Reading or replacing the state file failed.
    #[error("state io failed: {0}")]
    Io(#[from] std::io::Error),

    /// The state document could not be serialized or parsed.
    #[error("state serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
