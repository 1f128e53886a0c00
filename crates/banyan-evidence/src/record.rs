//! Evidence records and the integrity hash contract.

use banyan_core::{canonical, hash, timefmt, GovernorId};
use banyan_policy::PolicyBundle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EvidenceResult;

/// Label recorded when a sweep is run without an explicit one.
pub const DEFAULT_SWEEP_LABEL: &str = "ad-hoc";

/// Field under which the integrity hash is embedded in persisted evidence.
pub const INTEGRITY_HASH_FIELD: &str = "integrity_hash";

/// What one sweep concluded about a governor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAssessment {
    pub governor: GovernorId,
    /// Second precision, `Z`-suffixed; this exact rendering is what the
    /// integrity hash covers.
    #[serde(with = "timefmt::utc_second")]
    pub timestamp_utc: DateTime<Utc>,
    pub policy_bundle_version: String,
    pub sovereign_boundaries: Vec<Value>,
    pub copilot_controls: Vec<Value>,
    pub watchdogs: Vec<Value>,
    /// Opaque determinism descriptor, copied verbatim from the domain
    /// policy.
    pub determinism: Value,
    pub sweep_label: String,
}

/// One complete evidence record: the assessment plus both policy documents
/// verbatim, bound together by the integrity hash.
///
/// Records are created once, persisted once, and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub assessment: SweepAssessment,
    pub domain_policy: Value,
    pub copilot_policy: Value,
    /// SHA-256 over the canonical serialization of everything above,
    /// 64 lowercase hex characters.
    pub integrity_hash: String,
}

impl EvidenceRecord {
    /// Build a record from a resolved bundle, computing and embedding the
    /// integrity hash.
    pub fn build(
        bundle: &PolicyBundle,
        timestamp: DateTime<Utc>,
        sweep_label: Option<&str>,
    ) -> EvidenceResult<Self> {
        let assessment = SweepAssessment {
            governor: bundle.governor.clone(),
            timestamp_utc: timestamp,
            policy_bundle_version: bundle.version(),
            sovereign_boundaries: bundle.sovereign_boundaries(),
            copilot_controls: bundle.copilot_controls(),
            watchdogs: bundle.watchdogs(),
            determinism: bundle.determinism(),
            sweep_label: sweep_label.unwrap_or(DEFAULT_SWEEP_LABEL).to_string(),
        };

        let mut record = Self {
            assessment,
            domain_policy: bundle.domain_policy.clone(),
            copilot_policy: bundle.copilot_policy.clone(),
            integrity_hash: String::new(),
        };
        record.integrity_hash = hash_of_stripped(&serde_json::to_value(&record)?)?;
        Ok(record)
    }

    /// Recompute the hash over this record's data and compare it to the
    /// embedded one.
    pub fn verify(&self) -> EvidenceResult<bool> {
        verify_payload(&serde_json::to_value(self)?)
    }
}

/// Hash input for a document: its canonical serialization with the
/// integrity hash field removed.
fn hash_of_stripped(document: &Value) -> EvidenceResult<String> {
    let mut stripped = document.clone();
    if let Value::Object(map) = &mut stripped {
        map.remove(INTEGRITY_HASH_FIELD);
    }
    let rendered = canonical::canonical_string(&stripped)?;
    Ok(hash::sha256_hex(rendered.as_bytes()))
}

/// Verify a persisted evidence document: recompute the hash over the
/// payload minus the hash field and compare. A document without a stored
/// hash fails verification.
pub fn verify_payload(document: &Value) -> EvidenceResult<bool> {
    let stored = match document.get(INTEGRITY_HASH_FIELD).and_then(Value::as_str) {
        Some(stored) => stored,
        None => return Ok(false),
    };
    Ok(hash_of_stripped(document)? == stored)
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    pub(crate) fn make_bundle(governor: &str) -> PolicyBundle {
        PolicyBundle {
            governor: GovernorId::new(governor),
            domain_policy: json!({
                "version": "2.0",
                "sovereign_boundaries": [{"boundary": "data-residency"}],
                "watchdogs": [{"max_staleness_minutes": 60}],
                "determinism": {"mode": "strict"},
            }),
            copilot_policy: json!({
                "version": "1.1",
                "controls": [{"control": "prompt-review"}],
            }),
        }
    }

    pub(crate) fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 14, 30, 5).unwrap()
    }

    #[test]
    fn build_embeds_verifiable_hash() {
        let record =
            EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        assert_eq!(record.integrity_hash.len(), 64);
        assert!(record.verify().unwrap());
    }

    #[test]
    fn assessment_captures_bundle_fields() {
        let record = EvidenceRecord::build(
            &make_bundle("activ8"),
            fixed_timestamp(),
            Some("resilient-failover"),
        )
        .unwrap();
        assert_eq!(record.assessment.policy_bundle_version, "2.0+1.1");
        assert_eq!(record.assessment.sweep_label, "resilient-failover");
        assert_eq!(record.assessment.sovereign_boundaries.len(), 1);
        assert_eq!(record.assessment.determinism, json!({"mode": "strict"}));
    }

    #[test]
    fn label_defaults_to_ad_hoc() {
        let record =
            EvidenceRecord::build(&make_bundle("lma"), fixed_timestamp(), None).unwrap();
        assert_eq!(record.assessment.sweep_label, DEFAULT_SWEEP_LABEL);
    }

    #[test]
    fn stored_hash_matches_recomputation_minus_hash_field() {
        let record =
            EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        let mut document = serde_json::to_value(&record).unwrap();
        document
            .as_object_mut()
            .unwrap()
            .remove(INTEGRITY_HASH_FIELD);
        let recomputed =
            hash::sha256_hex(canonical::canonical_string(&document).unwrap().as_bytes());
        assert_eq!(recomputed, record.integrity_hash);
    }

    #[test]
    fn tampered_assessment_fails_verification() {
        let mut record =
            EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        record.assessment.sweep_label = "forged".to_string();
        assert!(!record.verify().unwrap());
    }

    #[test]
    fn tampered_policy_document_fails_verification() {
        let record =
            EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        let mut document = serde_json::to_value(&record).unwrap();
        document["domain_policy"]["version"] = json!("9.9");
        assert!(!verify_payload(&document).unwrap());
    }

    #[test]
    fn document_without_hash_fails_verification() {
        let record =
            EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        let mut document = serde_json::to_value(&record).unwrap();
        document
            .as_object_mut()
            .unwrap()
            .remove(INTEGRITY_HASH_FIELD);
        assert!(!verify_payload(&document).unwrap());
    }

    #[test]
    fn identical_inputs_hash_identically() {
        let a = EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        let b = EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        assert_eq!(a.integrity_hash, b.integrity_hash);
    }

    #[test]
    fn different_timestamps_hash_differently() {
        let a = EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 3, 1, 14, 30, 6).unwrap();
        let b = EvidenceRecord::build(&make_bundle("activ8"), later, None).unwrap();
        assert_ne!(a.integrity_hash, b.integrity_hash);
    }

    #[test]
    fn serde_round_trip_preserves_verification() {
        let record =
            EvidenceRecord::build(&make_bundle("personal"), fixed_timestamp(), None).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let restored: EvidenceRecord = serde_json::from_str(&json).unwrap();
        assert!(restored.verify().unwrap());
        assert_eq!(restored, record);
    }
}
