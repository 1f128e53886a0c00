//! The durable state document.

use std::collections::BTreeMap;

use banyan_core::{timefmt, GovernorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A governor's last completed run.
///
/// `last_run_utc` is optional on read: legacy or hand-edited entries may
/// lack it, and the watchdog classifies such entries as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernorRun {
    #[serde(
        default,
        with = "timefmt::utc_second::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_run_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_integrity_hash: String,
    #[serde(default)]
    pub sweep_label: String,
}

impl GovernorRun {
    pub fn new(
        last_run_utc: DateTime<Utc>,
        last_integrity_hash: impl Into<String>,
        sweep_label: impl Into<String>,
    ) -> Self {
        Self {
            last_run_utc: Some(last_run_utc),
            last_integrity_hash: last_integrity_hash.into(),
            sweep_label: sweep_label.into(),
        }
    }
}

/// The whole state document: one entry per governor that has ever
/// completed a sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub governors: BTreeMap<GovernorId, GovernorRun>,
}

impl StateSnapshot {
    /// Record a completed run, replacing that governor's previous entry
    /// and leaving every other entry untouched.
    pub fn record(&mut self, governor: GovernorId, run: GovernorRun) {
        self.governors.insert(governor, run);
    }

    pub fn run_for(&self, governor: &GovernorId) -> Option<&GovernorRun> {
        self.governors.get(governor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_only_that_governor() {
        let now = timefmt::now_utc_second();
        let mut snapshot = StateSnapshot::default();
        snapshot.record(GovernorId::new("activ8"), GovernorRun::new(now, "aaa", "ad-hoc"));
        snapshot.record(GovernorId::new("lma"), GovernorRun::new(now, "bbb", "ad-hoc"));
        snapshot.record(GovernorId::new("activ8"), GovernorRun::new(now, "ccc", "ad-hoc"));

        assert_eq!(snapshot.governors.len(), 2);
        assert_eq!(
            snapshot.run_for(&GovernorId::new("activ8")).unwrap().last_integrity_hash,
            "ccc"
        );
        assert_eq!(
            snapshot.run_for(&GovernorId::new("lma")).unwrap().last_integrity_hash,
            "bbb"
        );
    }

    #[test]
    fn serde_round_trip_keeps_wire_timestamps() {
        let now = timefmt::now_utc_second();
        let mut snapshot = StateSnapshot::default();
        snapshot.record(
            GovernorId::new("personal"),
            GovernorRun::new(now, "hash", "personal-governor-sweep"),
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(&timefmt::format_utc(&now)));
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn entry_without_last_run_deserializes() {
        let raw = r#"{"governors": {"activ8": {"last_integrity_hash": "abc", "sweep_label": "x"}}}"#;
        let snapshot: StateSnapshot = serde_json::from_str(raw).unwrap();
        let run = snapshot.run_for(&GovernorId::new("activ8")).unwrap();
        assert!(run.last_run_utc.is_none());
        assert_eq!(run.last_integrity_hash, "abc");
    }

    #[test]
    fn empty_document_deserializes() {
        let snapshot: StateSnapshot = serde_json::from_str(r#"{"governors": {}}"#).unwrap();
        assert!(snapshot.governors.is_empty());
    }
}
