//! Airdrop eligibility lookup.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::backoff::Backoff;
use crate::client::ClaimClient;
use crate::error::ApiError;

/// `POST /eligibility` response. Category descriptors are passed through
/// as opaque JSON — their shape belongs to the remote service and only
/// needs to survive into the report unchanged.
#[derive(Debug, Deserialize)]
pub struct EligibilityResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub categories: Vec<serde_json::Value>,
}

/// Outcome of an eligibility check for one address.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResult {
    pub address: String,
    pub eligible: bool,
    pub token_count: u64,
    pub categories: Vec<serde_json::Value>,
}

impl ClaimClient {
    /// Query the total eligible token amount and category list for an
    /// address. The endpoint takes a single-element JSON array.
    pub async fn check_eligibility(
        &self,
        address: &str,
    ) -> Result<EligibilityResult, ApiError> {
        let url = self.config.eligibility_url();
        let mut backoff = Backoff::new();

        loop {
            let response = self.http.post(&url).json(&[address]).send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                backoff.wait().await?;
                continue;
            }
            if !response.status().is_success() {
                return Err(Self::transport_error(response).await);
            }

            let body = response.text().await?;
            let parsed: EligibilityResponse = serde_json::from_str(&body)
                .map_err(|e| ApiError::EligibilityQueryFailed(format!("{e}; body: {body}")))?;

            return Ok(EligibilityResult {
                address: address.to_string(),
                eligible: parsed.total > 0,
                token_count: parsed.total,
                categories: parsed.categories,
            });
        }
    }
}
