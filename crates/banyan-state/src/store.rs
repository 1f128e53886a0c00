//! Atomic persistence for the state document.

use std::io::Write;
use std::path::{Path, PathBuf};

use banyan_core::{canonical, DataLayout, GovernorId};
use tracing::debug;

use crate::error::StateResult;
use crate::snapshot::{GovernorRun, StateSnapshot};

/// Loads and persists the state document.
///
/// Persistence is atomic: the document is written to a temp file in the
/// same directory, flushed, then renamed over the canonical path. The
/// rename is the only step that makes a new version visible.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            path: layout.state_file(),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current snapshot. A missing state file is an empty
    /// snapshot, never an error.
    pub fn load(&self) -> StateResult<StateSnapshot> {
        if !self.path.exists() {
            return Ok(StateSnapshot::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Atomically replace the state document with this snapshot.
    pub fn persist(&self, snapshot: &StateSnapshot) -> StateResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let value = serde_json::to_value(snapshot)?;
        let rendered = canonical::pretty_string(&value)?;

        let tmp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&tmp_path)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        drop(file);
        std::fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), governors = snapshot.governors.len(), "state persisted");
        Ok(())
    }

    /// Read-merge-write one governor's completed run.
    pub fn record_sweep(&self, governor: &GovernorId, run: GovernorRun) -> StateResult<()> {
        let mut snapshot = self.load()?;
        snapshot.record(governor.clone(), run);
        self.persist(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use banyan_core::timefmt;

    use super::*;

    fn run_with_hash(hash: &str) -> GovernorRun {
        GovernorRun::new(timefmt::now_utc_second(), hash, "ad-hoc")
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at_path(dir.path().join("sweep_state.json"));
        let snapshot = store.load().unwrap();
        assert!(snapshot.governors.is_empty());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at_path(dir.path().join("sweep_state.json"));

        let mut snapshot = StateSnapshot::default();
        snapshot.record(GovernorId::new("activ8"), run_with_hash("aaa"));
        snapshot.record(GovernorId::new("lma"), run_with_hash("bbb"));
        store.persist(&snapshot).unwrap();

        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn record_sweep_preserves_other_governors() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at_path(dir.path().join("sweep_state.json"));

        store
            .record_sweep(&GovernorId::new("activ8"), run_with_hash("aaa"))
            .unwrap();
        store
            .record_sweep(&GovernorId::new("lma"), run_with_hash("bbb"))
            .unwrap();

        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.governors.len(), 2);
        assert_eq!(
            snapshot.run_for(&GovernorId::new("activ8")).unwrap().last_integrity_hash,
            "aaa"
        );
    }

    #[test]
    fn interrupted_write_leaves_prior_state_intact() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at_path(dir.path().join("sweep_state.json"));

        let mut snapshot = StateSnapshot::default();
        snapshot.record(GovernorId::new("personal"), run_with_hash("prior"));
        store.persist(&snapshot).unwrap();

        // A writer that died after the temp write but before the rename
        // leaves a stray temp file; the canonical document is untouched.
        std::fs::write(dir.path().join("sweep_state.tmp"), "{not even json").unwrap();
        assert_eq!(store.load().unwrap(), snapshot);

        // The next persist overwrites the stray temp file and completes.
        snapshot.record(GovernorId::new("personal"), run_with_hash("next"));
        store.persist(&snapshot).unwrap();
        assert_eq!(
            store
                .load()
                .unwrap()
                .run_for(&GovernorId::new("personal"))
                .unwrap()
                .last_integrity_hash,
            "next"
        );
    }

    #[test]
    fn persisted_document_is_pretty_sorted_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at_path(dir.path().join("sweep_state.json"));

        let mut snapshot = StateSnapshot::default();
        snapshot.record(GovernorId::new("lma"), run_with_hash("bbb"));
        snapshot.record(GovernorId::new("activ8"), run_with_hash("aaa"));
        store.persist(&snapshot).unwrap();

        let rendered = std::fs::read_to_string(store.path()).unwrap();
        assert!(rendered.ends_with('\n'));
        assert!(rendered.contains("  \"governors\""));
        assert!(rendered.find("activ8").unwrap() < rendered.find("lma").unwrap());
    }

    #[test]
    fn persist_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at_path(dir.path().join("state/sweep_state.json"));
        store.persist(&StateSnapshot::default()).unwrap();
        assert!(store.path().exists());
    }
}
