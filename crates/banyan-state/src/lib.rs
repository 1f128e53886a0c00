//! Durable sweep state.
//!
//! The only cross-run memory the system has: one JSON document mapping each
//! governor to its last completed run. Writes are atomic (temp file in the
//! same directory, then rename), so a reader never observes a torn
//! document even if a writer dies mid-persist. There is deliberately no
//! cross-process locking; concurrent writers can lose updates, and the
//! rename only protects document integrity.

#![deny(unsafe_code)]

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::{StateError, StateResult};
pub use snapshot::{GovernorRun, StateSnapshot};
pub use store::StateStore;
