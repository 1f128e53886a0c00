//! Error types for sweep execution, with the transient/configuration
//! split the retry policy is built on.

use banyan_audit::LogError;
use banyan_core::GovernorId;
use banyan_evidence::EvidenceError;
use banyan_policy::PolicyError;
use banyan_state::StateError;
use thiserror::Error;

/// Errors that can occur while executing a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The governor's credential environment variable is unset or empty.
    #[error("credential variable {env} for governor {governor} is unset or empty")]
    MissingCredential { governor: GovernorId, env: String },

    /// Policy resolution failed.
    #[error("policy resolution failed: {0}")]
    Policy(#[from] PolicyError),

    /// Writing the evidence record failed.
    #[error("evidence persistence failed: {0}")]
    Evidence(#[from] EvidenceError),

    /// Appending to the audit or trace log failed.
    #[error("log append failed: {0}")]
    Log(#[from] LogError),

    /// Updating the state document failed.
    #[error("state update failed: {0}")]
    State(#[from] StateError),
}

impl SweepError {
    /// Whether retrying might help.
    ///
    /// Configuration problems (unknown governor, missing or invalid policy
    /// documents, missing credential) are stable across attempts and
    /// return false. Execution failures on the I/O path may clear on
    /// their own and return true.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::MissingCredential { .. } => false,
            Self::Policy(err) => !err.is_configuration(),
            Self::Evidence(_) | Self::Log(_) | Self::State(_) => true,
        }
    }
}

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;
