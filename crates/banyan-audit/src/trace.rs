//! The replay-oriented trace log.

use std::path::{Path, PathBuf};

use banyan_core::{DataLayout, GovernorId};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::LogResult;
use crate::jsonl;

/// Append-only trace log: named events with arbitrary payloads, detailed
/// enough to replay what a sweep saw.
pub struct TraceLog {
    path: PathBuf,
}

impl TraceLog {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            path: layout.trace_log_file(),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line and return the enriched object as written.
    pub fn record(
        &self,
        governor: &GovernorId,
        event: impl Into<String>,
        payload: Value,
    ) -> LogResult<Value> {
        let event = event.into();
        let mut fields = Map::new();
        fields.insert("event".to_string(), Value::String(event.clone()));
        fields.insert("payload".to_string(), payload);

        let enriched = jsonl::enrich(governor, Value::Object(fields));
        jsonl::append_line(&self.path, &enriched)?;
        debug!(governor = %governor, event = %event, "trace event recorded");
        Ok(enriched)
    }
}
