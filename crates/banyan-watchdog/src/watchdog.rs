//! Fleet-wide staleness evaluation.

use banyan_audit::{AuditEntry, AuditLog, AuditStatus};
use banyan_core::{DataLayout, GovernorId};
use banyan_policy::{known_governors, PolicyResolver};
use banyan_state::StateStore;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{WatchdogError, WatchdogResult};

/// Identity recorded on watchdog audit entries.
const AUDIT_IDENTITY: &str = "watchdog";

/// Verdict of a single evaluation: governors whose last sweep is older than
/// their policy allows, and governors with no recorded sweep at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchdogStatus {
    pub stale: Vec<GovernorId>,
    pub missing: Vec<GovernorId>,
}

impl WatchdogStatus {
    pub fn is_healthy(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty()
    }
}

/// Evaluates every registered governor against its staleness budget.
pub struct Watchdog {
    resolver: PolicyResolver,
    state: StateStore,
    audit: AuditLog,
}

impl Watchdog {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            resolver: PolicyResolver::new(layout),
            state: StateStore::new(layout),
            audit: AuditLog::new(layout),
        }
    }

    /// Evaluate the fleet against the current wall clock.
    pub fn evaluate(&self) -> WatchdogResult<WatchdogStatus> {
        self.evaluate_at(Utc::now())
    }

    /// Evaluate the fleet against an explicit `now`.
    ///
    /// The state snapshot is read once, so every governor is judged against
    /// the same document. A governor is stale when `now - last_run_utc`
    /// strictly exceeds its policy's `max_staleness_minutes`, and missing
    /// when it has no state entry or no recorded timestamp. The
    /// `health_check` audit entry is appended before a degraded verdict is
    /// turned into an error, so the log always carries the verdict.
    pub fn evaluate_at(&self, now: DateTime<Utc>) -> WatchdogResult<WatchdogStatus> {
        let snapshot = self.state.load()?;
        let mut status = WatchdogStatus::default();

        for governor in known_governors() {
            let bundle = self.resolver.resolve(&governor)?;
            let budget = Duration::minutes(bundle.max_staleness_minutes());

            match snapshot.run_for(&governor).and_then(|run| run.last_run_utc) {
                None => status.missing.push(governor),
                Some(last_run) if now.signed_duration_since(last_run) > budget => {
                    status.stale.push(governor);
                }
                Some(_) => {}
            }
        }

        let verdict = if status.is_healthy() {
            AuditStatus::Healthy
        } else {
            AuditStatus::Degraded
        };
        let entry = AuditEntry::new("health_check", verdict)
            .with_detail("stale", governor_list(&status.stale))
            .with_detail("missing", governor_list(&status.missing));
        self.audit.append(&GovernorId::new(AUDIT_IDENTITY), &entry)?;

        if status.is_healthy() {
            info!("all governors within their staleness budgets");
            Ok(status)
        } else {
            warn!(
                stale = status.stale.len(),
                missing = status.missing.len(),
                "governor fleet degraded"
            );
            Err(WatchdogError::Degraded {
                stale: status.stale,
                missing: status.missing,
            })
        }
    }
}

fn governor_list(ids: &[GovernorId]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| Value::String(id.as_str().to_string()))
            .collect(),
    )
}
