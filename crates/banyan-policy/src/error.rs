//! Error types for policy resolution.

use std::path::PathBuf;

use banyan_core::GovernorId;
use thiserror::Error;

/// Errors that can occur while resolving a policy bundle.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The governor is not present in the registry.
    #[error("unknown governor: {governor}")]
    UnknownGovernor { governor: GovernorId },

    /// A registered policy file does not exist on disk.
    #[error("policy file not found for governor {governor}: {path}")]
    MissingPolicyFile { governor: GovernorId, path: PathBuf },

    /// A policy file exists but does not hold a usable policy document.
    #[error("invalid policy document {path}: {reason}")]
    InvalidPolicy { path: PathBuf, reason: String },

    /// Reading a policy file failed.
    #[error("policy read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PolicyError {
    /// Whether this failure is a configuration problem that no amount of
    /// retrying will fix (as opposed to a possibly transient read failure).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownGovernor { .. }
                | Self::MissingPolicyFile { .. }
                | Self::InvalidPolicy { .. }
        )
    }
}

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;
