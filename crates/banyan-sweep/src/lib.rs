//! Sweep execution.
//!
//! [`SweepExecutor`] runs one governance sweep end to end: credential gate,
//! policy resolution, evidence record with embedded integrity hash, audit
//! and trace entries, state update. [`ResilientRunner`] drives a schedule
//! of sweeps sequentially with linear backoff, aborting the remaining
//! schedule when one governor exhausts its attempt budget.

pub mod error;
pub mod executor;
pub mod outcome;
pub mod runner;

pub use error::{SweepError, SweepResult};
pub use executor::SweepExecutor;
pub use outcome::SweepOutcome;
pub use runner::{
    default_matrix, request_for, ResilientRunner, RunnerConfig, SweepDriver, SweepRequest,
};
