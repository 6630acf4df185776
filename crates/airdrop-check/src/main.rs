#![forbid(unsafe_code)]

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use claim_api::{ApiConfig, ClaimClient};
use tracing::info;

use airdrop_check::input::load_wallet_inputs;
use airdrop_check::pipeline::check_wallet;
use airdrop_check::report::{write_report, RunSummary};
use airdrop_check::runner::{run_windows, BatchOptions};

/// Fixed input filename, read from the working directory.
const INPUT_FILE: &str = "wallets.txt";

/// Directory the run summary is written into.
const OUTPUT_DIR: &str = "results";

/// Whole-run escape hatch so sustained throttling can't hang forever.
const RUN_DEADLINE: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let inputs = load_wallet_inputs(Path::new(INPUT_FILE))?;
    if inputs.is_empty() {
        info!("no wallet entries in {INPUT_FILE}, nothing to do");
        return Ok(());
    }
    info!("checking {} wallets from {INPUT_FILE}", inputs.len());

    let client = ClaimClient::new(ApiConfig::default())?;
    let options = BatchOptions::default();

    let results = tokio::time::timeout(
        RUN_DEADLINE,
        run_windows(inputs, &options, |line, raw| check_wallet(&client, line, raw)),
    )
    .await
    .context("run deadline exceeded")?;

    let summary = RunSummary::from_results(results);
    let path = write_report(&summary, Path::new(OUTPUT_DIR))
        .context("persisting run summary")?;

    info!(
        "done: {} total, {} successful, {} failed, {} eligible",
        summary.total, summary.successful, summary.failed, summary.eligible
    );
    info!("full report written to {}", path.display());

    Ok(())
}
