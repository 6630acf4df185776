//! The per-wallet pipeline: parse → (Solana: authenticate) → eligibility.
//!
//! Every failure is caught here and mapped to an `Error` result — nothing
//! escapes to abort the batch. Progress is logged as each wallet
//! completes.

use std::time::Duration;

use claim_api::{ClaimClient, EligibilityResult};
use tracing::{info, warn};

use crate::report::WalletCheckResult;

/// Upper bound on a single wallet's parse/auth/query sequence.
pub const WALLET_TIMEOUT: Duration = Duration::from_secs(60);

struct PipelineError {
    /// Resolved address, when parsing got that far. Parse failures have
    /// none — the raw input must not leak into the report.
    address: Option<String>,
    message: String,
}

/// Check one wallet and convert the outcome into its terminal result.
pub async fn check_wallet(client: &ClaimClient, line: usize, raw: String) -> WalletCheckResult {
    let outcome = tokio::time::timeout(WALLET_TIMEOUT, run_pipeline(client, &raw)).await;

    let result = match outcome {
        Ok(Ok(eligibility)) => WalletCheckResult::Success {
            line,
            address: eligibility.address,
            eligible: eligibility.eligible,
            token_count: eligibility.token_count,
            categories: eligibility.categories,
        },
        Ok(Err(e)) => WalletCheckResult::Error {
            line,
            address: e.address.unwrap_or_else(|| format!("<line {line}>")),
            message: e.message,
        },
        Err(_) => WalletCheckResult::Error {
            line,
            address: format!("<line {line}>"),
            message: format!("timed out after {}s", WALLET_TIMEOUT.as_secs()),
        },
    };

    match &result {
        WalletCheckResult::Success {
            address,
            eligible,
            token_count,
            categories,
            ..
        } => info!(
            "[{}] eligible: {} ({} tokens, {} categories)",
            address,
            eligible,
            token_count,
            categories.len()
        ),
        WalletCheckResult::Error { address, message, .. } => {
            warn!("[{}] check failed: {}", address, message)
        }
    }

    result
}

async fn run_pipeline(
    client: &ClaimClient,
    raw: &str,
) -> Result<EligibilityResult, PipelineError> {
    let identity = wallet_keys::parse_key(raw).map_err(|e| PipelineError {
        address: None,
        message: e.to_string(),
    })?;

    // Ownership proof applies only to Solana wallets that carry a key;
    // bare addresses and Ethereum wallets go straight to the lookup.
    if identity.chain().requires_auth() && identity.can_sign() {
        client.authenticate(&identity).await.map_err(|e| PipelineError {
            address: Some(identity.address().to_string()),
            message: format!("authentication failed: {e}"),
        })?;
    }

    client
        .check_eligibility(identity.address())
        .await
        .map_err(|e| PipelineError {
            address: Some(identity.address().to_string()),
            message: format!("eligibility query failed: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim_api::ApiConfig;

    // Network-dependent paths are covered via the runner's stub checks;
    // here we exercise the failure mapping that needs no connectivity.

    #[tokio::test]
    async fn parse_failure_maps_to_error_without_leaking_input() {
        let client = ClaimClient::new(ApiConfig::default()).unwrap();
        let secret_looking = "not-a-key-but-secret!!!";

        let result = check_wallet(&client, 3, secret_looking.to_string()).await;

        match result {
            WalletCheckResult::Error { line, address, message } => {
                assert_eq!(line, 3);
                assert_eq!(address, "<line 3>");
                assert!(!message.contains(secret_looking));
                assert!(message.contains("Base58"));
            }
            WalletCheckResult::Success { .. } => panic!("expected an error result"),
        }
    }
}
