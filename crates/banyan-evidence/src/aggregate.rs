//! Evidence aggregation: the summary document and the dashboard.

use std::path::{Path, PathBuf};

use banyan_audit::{AuditEntry, AuditLog, AuditStatus};
use banyan_core::{canonical, DataLayout, GovernorId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{EvidenceError, EvidenceResult};
use crate::store::EvidenceStore;

/// One row of the aggregate: the durable identity of a single evidence
/// record. Fields are kept as the exact strings stored in the document so
/// reruns are byte-stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub governor: String,
    pub timestamp_utc: String,
    pub integrity_hash: String,
    pub bundle_version: String,
}

/// The whole aggregation result, in lexicographic evidence-file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub entries: Vec<EvidenceSummary>,
}

/// Fans the evidence directory into the summary JSON and the markdown
/// dashboard, overwriting both, and records the pass in the audit log.
pub struct EvidenceAggregator {
    store: EvidenceStore,
    summary_path: PathBuf,
    dashboard_path: PathBuf,
    audit: AuditLog,
}

impl EvidenceAggregator {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            store: EvidenceStore::new(layout),
            summary_path: layout.summary_file(),
            dashboard_path: layout.dashboard_file(),
            audit: AuditLog::new(layout),
        }
    }

    /// Scan every evidence file, then write both outputs.
    ///
    /// All-or-nothing: a malformed evidence document aborts the pass
    /// before either output is touched. Re-running over unchanged inputs
    /// reproduces byte-identical outputs.
    pub fn aggregate(&self) -> EvidenceResult<AggregateSummary> {
        let mut entries = Vec::new();
        for path in self.store.list()? {
            let document = self.store.read(&path)?;
            entries.push(summarize(&path, &document)?);
        }
        let summary = AggregateSummary { entries };

        write_document(&self.summary_path, &serde_json::to_value(&summary)?)?;
        write_text(&self.dashboard_path, &render_dashboard(&summary))?;

        let entry = AuditEntry::new("aggregate_evidence", AuditStatus::Success)
            .with_detail("entries", summary.entries.len())
            .with_detail("dashboard", self.dashboard_path.display().to_string());
        self.audit.append(&GovernorId::new("aggregator"), &entry)?;

        info!(entries = summary.entries.len(), "evidence aggregated");
        Ok(summary)
    }
}

fn summarize(path: &Path, document: &Value) -> EvidenceResult<EvidenceSummary> {
    let assessment = document
        .get("assessment")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed(path, "missing assessment object"))?;

    Ok(EvidenceSummary {
        governor: string_field(path, assessment, "governor")?,
        timestamp_utc: string_field(path, assessment, "timestamp_utc")?,
        bundle_version: string_field(path, assessment, "policy_bundle_version")?,
        integrity_hash: document
            .get("integrity_hash")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| malformed(path, "missing integrity_hash"))?,
    })
}

fn string_field(path: &Path, object: &Map<String, Value>, key: &str) -> EvidenceResult<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed(path, &format!("missing assessment field {key}")))
}

fn malformed(path: &Path, reason: &str) -> EvidenceError {
    EvidenceError::Malformed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn render_dashboard(summary: &AggregateSummary) -> String {
    let mut out = String::from("# Governance Evidence Dashboard\n\n");
    out.push_str("| Governor | Timestamp (UTC) | Bundle Version | Integrity Hash |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for entry in &summary.entries {
        out.push_str(&format!(
            "| {} | {} | {} | `{}` |\n",
            entry.governor, entry.timestamp_utc, entry.bundle_version, entry.integrity_hash
        ));
    }
    out
}

fn write_document(path: &Path, value: &Value) -> EvidenceResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, canonical::pretty_string(value)?)?;
    Ok(())
}

fn write_text(path: &Path, text: &str) -> EvidenceResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    Ok(())
}
