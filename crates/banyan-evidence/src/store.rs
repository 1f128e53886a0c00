//! On-disk evidence storage.

use std::path::{Path, PathBuf};

use banyan_core::{canonical, layout::SUMMARY_FILE_NAME, timefmt, DataLayout};
use serde_json::Value;
use tracing::debug;

use crate::error::{EvidenceError, EvidenceResult};
use crate::record::EvidenceRecord;

/// Writes and scans the evidence directory.
///
/// File names are `{governor}_{YYYYMMDDTHHMMSSZ}.json`: the colon-free
/// timestamp keeps paths portable, and repeated sweeps never collide as
/// long as the same governor does not complete twice within one second.
pub struct EvidenceStore {
    evidence_dir: PathBuf,
}

impl EvidenceStore {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            evidence_dir: layout.evidence_dir.clone(),
        }
    }

    pub fn at_dir(evidence_dir: impl Into<PathBuf>) -> Self {
        Self {
            evidence_dir: evidence_dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.evidence_dir
    }

    /// Persist one record, pretty-printed with sorted keys and a trailing
    /// newline. Returns the path written.
    pub fn write(&self, record: &EvidenceRecord) -> EvidenceResult<PathBuf> {
        std::fs::create_dir_all(&self.evidence_dir)?;
        let file_name = format!(
            "{}_{}.json",
            record.assessment.governor,
            timefmt::file_stamp(&record.assessment.timestamp_utc)
        );
        let path = self.evidence_dir.join(file_name);

        let value = serde_json::to_value(record)?;
        std::fs::write(&path, canonical::pretty_string(&value)?)?;
        debug!(path = %path.display(), "evidence record written");
        Ok(path)
    }

    /// All evidence files in lexicographic name order, skipping the
    /// aggregate summary output.
    pub fn list(&self) -> EvidenceResult<Vec<PathBuf>> {
        if !self.evidence_dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.evidence_dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !path.is_file() || !name.ends_with(".json") || name == SUMMARY_FILE_NAME {
                continue;
            }
            paths.push(path);
        }
        paths.sort();
        Ok(paths)
    }

    /// Read one persisted evidence document back as raw JSON.
    pub fn read(&self, path: &Path) -> EvidenceResult<Value> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|err| EvidenceError::Malformed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::record::tests::{fixed_timestamp, make_bundle};
    use crate::record::verify_payload;

    use super::*;

    #[test]
    fn written_file_name_is_colon_free() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::at_dir(dir.path());

        let record =
            EvidenceRecord::build(&make_bundle("activ8"), fixed_timestamp(), None).unwrap();
        let path = store.write(&record).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, "activ8_20260301T143005Z.json");
        assert!(!name.contains(':'));
    }

    #[test]
    fn persisted_document_verifies() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::at_dir(dir.path());

        let record =
            EvidenceRecord::build(&make_bundle("lma"), fixed_timestamp(), None).unwrap();
        let path = store.write(&record).unwrap();

        let document = store.read(&path).unwrap();
        assert!(verify_payload(&document).unwrap());
        assert_eq!(document["integrity_hash"], record.integrity_hash.as_str());
    }

    #[test]
    fn persisted_form_is_pretty_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::at_dir(dir.path());

        let record =
            EvidenceRecord::build(&make_bundle("lma"), fixed_timestamp(), None).unwrap();
        let path = store.write(&record).unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        assert!(rendered.ends_with('\n'));
        assert!(rendered.contains("  \"assessment\""));
    }

    #[test]
    fn list_is_lexicographic_and_skips_summary() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::at_dir(dir.path());

        for governor in ["personal", "activ8", "lma"] {
            let record =
                EvidenceRecord::build(&make_bundle(governor), fixed_timestamp(), None).unwrap();
            store.write(&record).unwrap();
        }
        std::fs::write(dir.path().join(SUMMARY_FILE_NAME), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "activ8_20260301T143005Z.json",
                "lma_20260301T143005Z.json",
                "personal_20260301T143005Z.json",
            ]
        );
    }

    #[test]
    fn list_of_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::at_dir(dir.path().join("never_created"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn read_rejects_unparseable_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::at_dir(dir.path());
        let path = dir.path().join("broken_20260301T000000Z.json");
        std::fs::write(&path, "{truncated").unwrap();

        let err = store.read(&path).unwrap_err();
        assert!(matches!(err, EvidenceError::Malformed { .. }));
    }
}
