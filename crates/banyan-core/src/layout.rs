//! Explicit directory layout for all persisted artifacts.
//!
//! Every component takes a `&DataLayout` instead of consulting module-level
//! globals; directory creation is an explicit call, never an import-time side
//! effect. Fixed file names (state, logs, aggregate outputs) hang off the
//! layout so there is exactly one place that knows where things live.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the durable sweep state document.
pub const STATE_FILE_NAME: &str = "sweep_state.json";
/// File name of the operator-facing audit log.
pub const AUDIT_LOG_NAME: &str = "audit.log";
/// File name of the replay-oriented trace log.
pub const TRACE_LOG_NAME: &str = "trace.log";
/// File name of the aggregate evidence summary (lives in the evidence dir).
pub const SUMMARY_FILE_NAME: &str = "evidence_summary.json";
/// File name of the rendered markdown dashboard.
pub const DASHBOARD_FILE_NAME: &str = "evidence_dashboard.md";

/// Directory layout shared by every sweep component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayout {
    /// Where governor policy documents are read from.
    pub policy_dir: PathBuf,
    /// Where evidence records (and the aggregate summary) are written.
    pub evidence_dir: PathBuf,
    /// Where the durable state document lives.
    pub state_dir: PathBuf,
    /// Where the audit and trace logs live.
    pub log_dir: PathBuf,
    /// Where the rendered dashboard is written.
    pub dashboard_dir: PathBuf,
}

impl DataLayout {
    /// Standard layout beneath a single root: policies at the root itself,
    /// evidence/state/logs/dashboard in subdirectories.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            policy_dir: root.to_path_buf(),
            evidence_dir: root.join("evidence"),
            state_dir: root.join("state"),
            log_dir: root.join("logs"),
            dashboard_dir: root.join("dashboard"),
        }
    }

    /// Create every writable directory in the layout.
    pub fn ensure_directories(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.evidence_dir)?;
        std::fs::create_dir_all(&self.state_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        std::fs::create_dir_all(&self.dashboard_dir)?;
        Ok(())
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join(STATE_FILE_NAME)
    }

    pub fn audit_log_file(&self) -> PathBuf {
        self.log_dir.join(AUDIT_LOG_NAME)
    }

    pub fn trace_log_file(&self) -> PathBuf {
        self.log_dir.join(TRACE_LOG_NAME)
    }

    pub fn summary_file(&self) -> PathBuf {
        self.evidence_dir.join(SUMMARY_FILE_NAME)
    }

    pub fn dashboard_file(&self) -> PathBuf {
        self.dashboard_dir.join(DASHBOARD_FILE_NAME)
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::rooted_at(".")
    }
}
