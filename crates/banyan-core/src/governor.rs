//! Strongly-typed governor identifier.
//!
//! Governors are the governed domains a sweep runs against. Identifiers are
//! case-insensitive: construction trims and lowercases, so every lookup and
//! every persisted artifact sees the same normalized form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a governed domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GovernorId(String);

impl GovernorId {
    /// Create a normalized identifier from any casing.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GovernorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GovernorId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
