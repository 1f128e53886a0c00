//! The resolved policy bundle for one governor.

use banyan_core::GovernorId;
use serde_json::Value;

/// Staleness threshold applied when a domain policy configures no watchdog.
pub const DEFAULT_MAX_STALENESS_MINUTES: i64 = 60;

/// A governor's domain and copilot policy documents, loaded together.
///
/// The documents are kept as raw JSON: the sweep records them verbatim in
/// evidence, and only a handful of well-known fields are interpreted.
/// Bundles are immutable once loaded and never cached across sweeps.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyBundle {
    pub governor: GovernorId,
    pub domain_policy: Value,
    pub copilot_policy: Value,
}

impl PolicyBundle {
    /// Combined bundle version: the two documents' own versions joined
    /// with `+` (domain first).
    pub fn version(&self) -> String {
        format!(
            "{}+{}",
            document_version(&self.domain_policy),
            document_version(&self.copilot_policy)
        )
    }

    /// `sovereign_boundaries` entries from the domain policy.
    pub fn sovereign_boundaries(&self) -> Vec<Value> {
        list_field(&self.domain_policy, "sovereign_boundaries")
    }

    /// `controls` entries from the copilot policy.
    pub fn copilot_controls(&self) -> Vec<Value> {
        list_field(&self.copilot_policy, "controls")
    }

    /// `watchdogs` entries from the domain policy.
    pub fn watchdogs(&self) -> Vec<Value> {
        list_field(&self.domain_policy, "watchdogs")
    }

    /// Opaque determinism descriptor from the domain policy, `null` when
    /// the policy does not declare one.
    pub fn determinism(&self) -> Value {
        self.domain_policy
            .get("determinism")
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Staleness threshold from the first configured watchdog, falling back
    /// to [`DEFAULT_MAX_STALENESS_MINUTES`].
    pub fn max_staleness_minutes(&self) -> i64 {
        self.watchdogs()
            .first()
            .and_then(|watchdog| watchdog.get("max_staleness_minutes"))
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_MAX_STALENESS_MINUTES)
    }
}

fn document_version(document: &Value) -> &str {
    document
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or("unversioned")
}

fn list_field(document: &Value, key: &str) -> Vec<Value> {
    document
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
