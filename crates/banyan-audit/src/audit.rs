//! The operator-facing audit log.

use std::path::{Path, PathBuf};

use banyan_core::{DataLayout, GovernorId};
use serde_json::Value;
use tracing::debug;

use crate::entry::AuditEntry;
use crate::error::LogResult;
use crate::jsonl;

/// Append-only audit log.
///
/// One canonical JSON object per line; write-only in normal operation.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            path: layout.audit_log_file(),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Enrich the entry with timestamp and governor, append it as one line,
    /// and return the enriched object as written.
    pub fn append(&self, governor: &GovernorId, entry: &AuditEntry) -> LogResult<Value> {
        let fields = serde_json::to_value(entry)?;
        let enriched = jsonl::enrich(governor, fields);
        jsonl::append_line(&self.path, &enriched)?;
        debug!(governor = %governor, action = %entry.action, "audit entry appended");
        Ok(enriched)
    }
}
