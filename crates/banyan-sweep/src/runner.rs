//! Sequential sweep scheduling with linear backoff.

use std::thread;
use std::time::Duration;

use banyan_core::{DataLayout, GovernorId};
use tracing::{error, info, warn};

use crate::error::SweepResult;
use crate::executor::SweepExecutor;
use crate::outcome::SweepOutcome;

/// One scheduled sweep: the governor, its credential variable, and the
/// label recorded in evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRequest {
    pub governor: GovernorId,
    pub token_env: String,
    pub sweep_label: String,
}

/// Standing schedule: every registered governor with its credential
/// variable, swept under the failover label.
const MATRIX: &[(&str, &str, &str)] = &[
    ("activ8", "PAT_ACTIV8_AI", "resilient-failover"),
    ("lma", "PAT_LMA", "resilient-failover"),
    ("personal", "PAT_PERSONAL", "resilient-failover"),
];

/// The full standing schedule, in sweep order.
pub fn default_matrix() -> Vec<SweepRequest> {
    MATRIX
        .iter()
        .map(|(governor, token_env, sweep_label)| SweepRequest {
            governor: GovernorId::new(governor),
            token_env: token_env.to_string(),
            sweep_label: sweep_label.to_string(),
        })
        .collect()
}

/// The standing schedule entry for one governor, if it has one.
pub fn request_for(governor: &GovernorId) -> Option<SweepRequest> {
    default_matrix()
        .into_iter()
        .find(|request| &request.governor == governor)
}

/// Attempt budget and backoff shape for [`ResilientRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Attempts per governor before giving up.
    pub max_attempts: u32,
    /// Base backoff; the sleep after failed attempt N is `base_delay * N`.
    pub base_delay: Duration,
    /// Fail fast on configuration errors instead of retrying everything.
    /// Off by default: the standing behavior retries broadly.
    pub retry_transient_only: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(5),
            retry_transient_only: false,
        }
    }
}

impl RunnerConfig {
    /// Backoff slept after failed attempt `attempt` (1-based): linear in
    /// the attempt number, so the defaults back off 5s then 10s.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

/// Seam between the runner and sweep execution, so schedules can be
/// driven against an in-memory double in tests.
pub trait SweepDriver {
    fn sweep(&self, request: &SweepRequest) -> SweepResult<SweepOutcome>;
}

impl SweepDriver for SweepExecutor {
    fn sweep(&self, request: &SweepRequest) -> SweepResult<SweepOutcome> {
        self.execute(
            &request.governor,
            &request.token_env,
            Some(&request.sweep_label),
        )
    }
}

/// Runs a schedule of sweeps sequentially, retrying each governor with
/// linear backoff.
///
/// A governor that exhausts its attempt budget aborts the remaining
/// schedule: the final error propagates and later governors are never
/// attempted. Retries block the calling thread for the full backoff.
pub struct ResilientRunner<D> {
    driver: D,
    config: RunnerConfig,
}

impl ResilientRunner<SweepExecutor> {
    /// Production runner over a real executor with default budgets.
    pub fn new(layout: &DataLayout) -> Self {
        Self::with_driver(SweepExecutor::new(layout), RunnerConfig::default())
    }
}

impl<D: SweepDriver> ResilientRunner<D> {
    pub fn with_driver(driver: D, config: RunnerConfig) -> Self {
        Self { driver, config }
    }

    /// Run the whole schedule, collecting outcomes in request order.
    pub fn run(&self, schedule: &[SweepRequest]) -> SweepResult<Vec<SweepOutcome>> {
        let mut outcomes = Vec::with_capacity(schedule.len());
        for request in schedule {
            outcomes.push(self.run_one(request)?);
        }
        Ok(outcomes)
    }

    fn run_one(&self, request: &SweepRequest) -> SweepResult<SweepOutcome> {
        let mut attempt = 1;
        loop {
            match self.driver.sweep(request) {
                Ok(outcome) => {
                    if attempt > 1 {
                        info!(
                            governor = %request.governor,
                            attempt,
                            "sweep recovered after retry"
                        );
                    }
                    return Ok(outcome);
                }
                Err(err)
                    if attempt < self.config.max_attempts
                        && (!self.config.retry_transient_only || err.is_transient()) =>
                {
                    let delay = self.config.delay_for(attempt);
                    warn!(
                        governor = %request.governor,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "sweep attempt failed, backing off"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        governor = %request.governor,
                        attempt,
                        error = %err,
                        "sweep failed, aborting remaining schedule"
                    );
                    return Err(err);
                }
            }
        }
    }
}
