//! The result of one completed sweep.

use std::path::PathBuf;

use banyan_core::{timefmt, GovernorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a completed sweep produced. Serializable: the CLI prints it as
/// indented JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub governor: GovernorId,
    pub sweep_label: String,
    #[serde(with = "timefmt::utc_second")]
    pub timestamp_utc: DateTime<Utc>,
    pub evidence_path: PathBuf,
    pub integrity_hash: String,
}
