//! Shared plumbing for line-oriented JSON logs.

use std::io::Write;
use std::path::Path;

use banyan_core::{canonical, timefmt, GovernorId};
use serde_json::{Map, Value};

use crate::error::LogResult;

/// Wrap raw entry fields with the enrichment every log line carries:
/// `timestamp_utc` and `governor`. Entry fields land after the enrichment,
/// so an entry may override either key on purpose.
pub(crate) fn enrich(governor: &GovernorId, fields: Value) -> Value {
    let mut object = Map::new();
    object.insert(
        "timestamp_utc".to_string(),
        Value::String(timefmt::format_utc(&timefmt::now_utc_second())),
    );
    object.insert(
        "governor".to_string(),
        Value::String(governor.as_str().to_string()),
    );
    if let Value::Object(fields) = fields {
        for (key, value) in fields {
            object.insert(key, value);
        }
    }
    Value::Object(object)
}

/// Append one canonical JSON line, creating parent directories on demand.
pub(crate) fn append_line(path: &Path, entry: &Value) -> LogResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut line = canonical::canonical_string(entry)?;
    line.push('\n');

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}
