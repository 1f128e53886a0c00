//! Tamper-evident sweep evidence.
//!
//! An evidence record captures what one governance sweep saw: the
//! assessment, plus both policy documents verbatim. Records are
//! content-bound by a SHA-256 integrity hash computed over the canonical
//! JSON serialization of the record *before* the hash field is embedded;
//! recomputing the hash over a persisted document minus that one field must
//! reproduce the stored value exactly. Any mutation of the payload breaks
//! verification.
//!
//! The store persists one pretty-printed JSON file per sweep; the
//! aggregator fans the directory into a summary document and a markdown
//! dashboard.

#![deny(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod record;
pub mod store;

pub use aggregate::{AggregateSummary, EvidenceAggregator, EvidenceSummary};
pub use error::{EvidenceError, EvidenceResult};
pub use record::{verify_payload, EvidenceRecord, SweepAssessment, DEFAULT_SWEEP_LABEL};
pub use store::EvidenceStore;
