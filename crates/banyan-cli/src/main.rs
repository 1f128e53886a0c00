//! Banyan operator CLI.
//!
//! Terminal interface over the sweep machinery:
//! - Run a single governance sweep or the full resilient schedule
//! - Check governor staleness against policy budgets
//! - Aggregate evidence into the fleet summary and dashboard
//! - Verify the integrity hash of every stored evidence record

use std::path::PathBuf;
use std::process;

use banyan_core::{DataLayout, GovernorId};
use banyan_evidence::{verify_payload, EvidenceAggregator, EvidenceError, EvidenceStore};
use banyan_sweep::{default_matrix, request_for, ResilientRunner, SweepExecutor};
use banyan_watchdog::Watchdog;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Banyan CLI application
#[derive(Parser)]
#[command(name = "banyan")]
#[command(about = "Banyan - automated governance sweeps with tamper-evident evidence", long_about = None)]
#[command(version)]
struct Cli {
    /// Root directory holding policies, evidence, state, and logs
    #[arg(long, env = "BANYAN_ROOT", default_value = ".")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Run one governance sweep for a single governor
    Sweep {
        /// Governor to sweep
        governor: String,

        /// Sweep label recorded in the evidence record
        #[arg(long)]
        label: Option<String>,

        /// Environment variable holding the governor's credential
        #[arg(long)]
        token_env: Option<String>,
    },

    /// Run the full sweep schedule with retry and backoff
    Run,

    /// Check every governor against its staleness budget
    Watchdog,

    /// Aggregate evidence records into the summary and dashboard
    Aggregate,

    /// Verify the integrity hash of every stored evidence record
    Verify,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(err) = dispatch(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    let layout = DataLayout::rooted_at(&cli.root);
    layout.ensure_directories()?;

    match &cli.command {
        Commands::Sweep {
            governor,
            label,
            token_env,
        } => sweep(&layout, governor, label.clone(), token_env.clone()),
        Commands::Run => run_schedule(&layout),
        Commands::Watchdog => watchdog(&layout),
        Commands::Aggregate => aggregate(&layout),
        Commands::Verify => verify(&layout),
    }
}

fn sweep(
    layout: &DataLayout,
    governor: &str,
    label: Option<String>,
    token_env: Option<String>,
) -> anyhow::Result<()> {
    let governor = GovernorId::new(governor);
    let label = label.unwrap_or_else(|| format!("{governor}-governor-sweep"));
    let token_env = token_env
        .or_else(|| request_for(&governor).map(|request| request.token_env))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "governor '{governor}' has no registered credential variable; pass --token-env"
            )
        })?;

    let outcome = SweepExecutor::new(layout).execute(&governor, &token_env, Some(&label))?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn run_schedule(layout: &DataLayout) -> anyhow::Result<()> {
    let outcomes = ResilientRunner::new(layout).run(&default_matrix())?;
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

fn watchdog(layout: &DataLayout) -> anyhow::Result<()> {
    let status = Watchdog::new(layout).evaluate()?;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

fn aggregate(layout: &DataLayout) -> anyhow::Result<()> {
    let summary = EvidenceAggregator::new(layout).aggregate()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Recompute every stored record's integrity hash and report per file.
/// A record that fails to parse counts as a failure rather than aborting
/// the scan, so one bad file cannot hide the status of the rest.
fn verify(layout: &DataLayout) -> anyhow::Result<()> {
    let store = EvidenceStore::new(layout);
    let mut verified = 0usize;
    let mut failed = 0usize;

    for path in store.list()? {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match store.read(&path) {
            Ok(document) => {
                if verify_payload(&document)? {
                    verified += 1;
                    println!("ok      {name}");
                } else {
                    failed += 1;
                    println!("FAILED  {name}");
                }
            }
            Err(EvidenceError::Malformed { reason, .. }) => {
                failed += 1;
                println!("FAILED  {name} ({reason})");
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("{verified} verified, {failed} failed");
    if failed > 0 {
        anyhow::bail!("{failed} evidence record(s) failed integrity verification");
    }
    Ok(())
}
