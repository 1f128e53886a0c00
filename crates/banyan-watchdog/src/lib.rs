//! Staleness watchdog: verifies that every registered governor has produced
//! a sweep recently enough to satisfy its policy threshold.
//!
//! The watchdog reads the shared state snapshot once per evaluation, compares
//! each governor's `last_run_utc` against the `max_staleness_minutes` declared
//! by its policy bundle, and records the verdict in the audit log whether the
//! fleet is healthy or not. A degraded fleet is reported as an error only
//! after the audit entry has been written.

mod error;
mod watchdog;

pub use error::{WatchdogError, WatchdogResult};
pub use watchdog::{Watchdog, WatchdogStatus};
