//! Append-only audit and trace logs.
//!
//! Two independent newline-delimited JSON streams: the audit log is the
//! operator-facing record of what happened (actions, statuses, outcomes),
//! the trace log is the replay-oriented record of how it happened (named
//! events with arbitrary payloads). Every entry is enriched with its own
//! UTC timestamp and the governor it concerns, then appended as a single
//! canonical JSON line. Entries are never mutated or deleted.

pub mod audit;
pub mod entry;
pub mod error;
mod jsonl;
pub mod trace;

pub use audit::AuditLog;
pub use entry::{AuditEntry, AuditStatus};
pub use error::{LogError, LogResult};
pub use trace::TraceLog;
