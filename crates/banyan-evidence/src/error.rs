//! Error types for evidence handling.

use std::path::PathBuf;

use banyan_audit::LogError;
use thiserror::Error;

/// Errors that can occur while building, persisting, or aggregating
/// evidence.
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// Reading or writing an evidence file failed.
    #[error("evidence io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("evidence serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A persisted evidence document is not usable.
    #[error("malformed evidence document {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// Recording the aggregation in the audit log failed.
    #[error("audit append failed: {0}")]
    Audit(#[from] LogError),
}

/// Result type for evidence operations.
pub type EvidenceResult<T> = Result<T, EvidenceError>;
