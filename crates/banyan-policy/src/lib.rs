//! Policy bundle resolution.
//!
//! A governor's compliance posture is defined by two JSON documents, the
//! domain policy and the copilot policy, each independently versioned. This
//! crate owns the fixed registry of known governors, loads and validates the
//! document pair, and exposes the combined [`PolicyBundle`]. Resolution is
//! stateless: bundles are re-read from disk on every call, so policy edits
//! take effect on the next sweep.

pub mod bundle;
pub mod error;
pub mod registry;
pub mod resolver;

pub use bundle::{PolicyBundle, DEFAULT_MAX_STALENESS_MINUTES};
pub use error::{PolicyError, PolicyResult};
pub use registry::known_governors;
pub use resolver::PolicyResolver;
