//! One governance sweep, end to end.

use banyan_audit::{AuditEntry, AuditLog, AuditStatus, TraceLog};
use banyan_core::{timefmt, DataLayout, GovernorId};
use banyan_evidence::{EvidenceRecord, EvidenceStore};
use banyan_policy::PolicyResolver;
use banyan_state::{GovernorRun, StateStore};
use serde_json::json;
use tracing::info;

use crate::error::{SweepError, SweepResult};
use crate::outcome::SweepOutcome;

/// Executes a single sweep against one governor.
///
/// Step order is fixed: credential gate, policy resolution, evidence,
/// audit entry, trace event, state update. Failures before the evidence
/// write leave no artifacts at all; failures after it leave the evidence
/// in place with later steps incomplete.
pub struct SweepExecutor {
    resolver: PolicyResolver,
    evidence: EvidenceStore,
    audit: AuditLog,
    trace: TraceLog,
    state: StateStore,
}

impl SweepExecutor {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            resolver: PolicyResolver::new(layout),
            evidence: EvidenceStore::new(layout),
            audit: AuditLog::new(layout),
            trace: TraceLog::new(layout),
            state: StateStore::new(layout),
        }
    }

    /// Run one sweep. `sweep_label` defaults to `ad-hoc` when absent.
    pub fn execute(
        &self,
        governor: &GovernorId,
        token_env: &str,
        sweep_label: Option<&str>,
    ) -> SweepResult<SweepOutcome> {
        match std::env::var(token_env) {
            Ok(value) if !value.trim().is_empty() => {}
            _ => {
                return Err(SweepError::MissingCredential {
                    governor: governor.clone(),
                    env: token_env.to_string(),
                })
            }
        }

        let bundle = self.resolver.resolve(governor)?;
        let timestamp = timefmt::now_utc_second();
        let record = EvidenceRecord::build(&bundle, timestamp, sweep_label)?;
        let evidence_path = self.evidence.write(&record)?;

        let entry = AuditEntry::new("governor_sweep", AuditStatus::Success)
            .with_detail("evidence_path", evidence_path.display().to_string())
            .with_detail("integrity_hash", record.integrity_hash.clone());
        self.audit.append(governor, &entry)?;

        self.trace.record(
            governor,
            "policy_bundle_loaded",
            json!({"bundle_version": record.assessment.policy_bundle_version}),
        )?;

        self.state.record_sweep(
            governor,
            GovernorRun::new(
                timestamp,
                record.integrity_hash.clone(),
                record.assessment.sweep_label.clone(),
            ),
        )?;

        info!(
            governor = %governor,
            integrity_hash = %record.integrity_hash,
            "governor sweep complete"
        );

        Ok(SweepOutcome {
            governor: governor.clone(),
            sweep_label: record.assessment.sweep_label,
            timestamp_utc: timestamp,
            evidence_path,
            integrity_hash: record.integrity_hash,
        })
    }
}
