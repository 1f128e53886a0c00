//! Shared foundation for the banyan governance sweep workspace.
//!
//! Everything here is deliberately small and dependency-light: the governor
//! identifier newtype, the explicit directory layout that every component
//! receives instead of reaching for ambient globals, the fixed UTC timestamp
//! formats used by persisted artifacts, canonical JSON rendering, and the
//! SHA-256 integrity hash helper.

#![deny(unsafe_code)]

pub mod canonical;
pub mod governor;
pub mod hash;
pub mod layout;
pub mod timefmt;

pub use governor::GovernorId;
pub use layout::DataLayout;
