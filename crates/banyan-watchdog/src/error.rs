//! Error types for watchdog evaluation.

use banyan_audit::LogError;
use banyan_core::GovernorId;
use banyan_policy::PolicyError;
use banyan_state::StateError;
use thiserror::Error;

/// Failure modes surfaced by a watchdog evaluation.
#[derive(Debug, Error)]
pub enum WatchdogError {
    /// One or more governors have gone stale or never ran at all. The audit
    /// log already carries the matching `health_check` entry by the time this
    /// error is returned.
    #[error(
        "governor fleet degraded; stale: [{}], missing: [{}]",
        join_ids(.stale),
        join_ids(.missing)
    )]
    Degraded {
        /// Governors whose last sweep is older than their policy allows.
        stale: Vec<GovernorId>,
        /// Governors with no recorded sweep.
        missing: Vec<GovernorId>,
    },

    /// A policy bundle could not be resolved for a registered governor.
    #[error("policy resolution failed: {0}")]
    Policy(#[from] PolicyError),

    /// The state snapshot could not be loaded.
    #[error("state load failed: {0}")]
    State(#[from] StateError),

    /// The audit log could not be appended to.
    #[error("audit append failed: {0}")]
    Log(#[from] LogError),
}

/// Convenience alias for watchdog operations.
pub type WatchdogResult<T> = Result<T, WatchdogError>;

fn join_ids(ids: &[GovernorId]) -> String {
    ids.iter()
        .map(GovernorId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
