//! Run output: per-wallet results and the persisted summary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

/// Terminal outcome for one input line. A tagged union rather than a
/// struct of optionals, so success fields cannot exist on a failure.
/// `line` is the 1-based position among non-blank input lines.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum WalletCheckResult {
    #[serde(rename_all = "camelCase")]
    Success {
        line: usize,
        address: String,
        eligible: bool,
        token_count: u64,
        categories: Vec<serde_json::Value>,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        line: usize,
        address: String,
        message: String,
    },
}

impl WalletCheckResult {
    pub fn line(&self) -> usize {
        match self {
            WalletCheckResult::Success { line, .. }
            | WalletCheckResult::Error { line, .. } => *line,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            WalletCheckResult::Success { address, .. }
            | WalletCheckResult::Error { address, .. } => address,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WalletCheckResult::Success { .. })
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, WalletCheckResult::Success { eligible: true, .. })
    }
}

/// The persisted record of a whole run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub timestamp: String,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub eligible: usize,
    pub results: Vec<WalletCheckResult>,
}

impl RunSummary {
    /// Aggregate counts from the ordered result list. By construction
    /// successful + failed == total and eligible <= successful.
    pub fn from_results(results: Vec<WalletCheckResult>) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.is_success()).count();
        let eligible = results.iter().filter(|r| r.is_eligible()).count();

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            total,
            successful,
            failed: total - successful,
            eligible,
            results,
        }
    }
}

/// Write the summary as pretty-printed JSON into `dir`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_report(summary: &RunSummary, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;

    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("airdrop-check-{stamp}.json"));

    let json = serde_json::to_string_pretty(summary).context("serializing run summary")?;
    fs::write(&path, json)
        .with_context(|| format!("cannot write report to {}", path.display()))?;

    Ok(path)
}
