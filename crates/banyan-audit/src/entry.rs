//! Audit entry shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome status carried by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Success,
    Healthy,
    Degraded,
}

/// One operator-facing audit entry, before enrichment.
///
/// `details` are flattened into the logged object alongside `action` and
/// `status`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub action: String,
    pub status: AuditStatus,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl AuditEntry {
    pub fn new(action: impl Into<String>, status: AuditStatus) -> Self {
        Self {
            action: action.into(),
            status,
            details: Map::new(),
        }
    }

    /// Attach a free-form detail field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AuditStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&AuditStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn details_flatten_next_to_action() {
        let entry = AuditEntry::new("governor_sweep", AuditStatus::Success)
            .with_detail("integrity_hash", "abc123")
            .with_detail("entries", 4);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["action"], "governor_sweep");
        assert_eq!(value["status"], "success");
        assert_eq!(value["integrity_hash"], "abc123");
        assert_eq!(value["entries"], 4);
    }
}
