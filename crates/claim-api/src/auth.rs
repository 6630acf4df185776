//! Challenge/response wallet authentication.
//!
//! Solana wallets prove ownership in two steps: fetch a fresh challenge
//! message, then submit an Ed25519 signature over it together with the
//! wallet address. Challenges are single-use and no session token is
//! retained — every check re-authenticates.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use wallet_keys::{sign_challenge, WalletIdentity};

use crate::backoff::Backoff;
use crate::client::ClaimClient;
use crate::error::ApiError;

/// `GET /auth/message` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthChallenge {
    pub message: String,
    #[serde(rename = "signingDate")]
    pub signing_date: String,
}

/// `POST /auth/token` request body.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub signature: &'a str,
    #[serde(rename = "signingDate")]
    pub signing_date: &'a str,
    #[serde(rename = "type")]
    pub wallet_type: &'a str,
    pub wallet: &'a str,
}

/// `POST /auth/token` response. The service may attach other fields;
/// only the validity flag matters, and its absence means failure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "isValid", default)]
    pub is_valid: Option<bool>,
}

impl TokenResponse {
    pub fn is_valid(&self) -> bool {
        self.is_valid == Some(true)
    }
}

impl ClaimClient {
    /// Fetch a fresh signing challenge.
    pub async fn fetch_challenge(&self) -> Result<AuthChallenge, ApiError> {
        let url = self.config.auth_message_url();
        let mut backoff = Backoff::new();

        loop {
            let response = self.http.get(&url).send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                backoff.wait().await?;
                continue;
            }
            if !response.status().is_success() {
                return Err(Self::transport_error(response).await);
            }

            return Ok(response.json().await?);
        }
    }

    /// Submit the signed challenge for validation.
    pub async fn submit_token(
        &self,
        signature: &str,
        signing_date: &str,
        identity: &WalletIdentity,
    ) -> Result<(), ApiError> {
        let url = self.config.auth_token_url();
        let body = TokenRequest {
            signature,
            signing_date,
            wallet_type: identity.chain().auth_tag(),
            wallet: identity.address(),
        };
        let mut backoff = Backoff::new();

        loop {
            let response = self.http.post(&url).json(&body).send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                backoff.wait().await?;
                continue;
            }
            if !response.status().is_success() {
                return Err(Self::transport_error(response).await);
            }

            let parsed: TokenResponse = response.json().await?;
            return if parsed.is_valid() {
                Ok(())
            } else {
                Err(ApiError::AuthFailed)
            };
        }
    }

    /// Run the full ownership proof for a wallet: fetch challenge, sign
    /// it, submit the token. Requires an identity with signing capability.
    pub async fn authenticate(&self, identity: &WalletIdentity) -> Result<(), ApiError> {
        let keypair = identity.signing_key().ok_or(ApiError::MissingSigningKey)?;

        let challenge = self.fetch_challenge().await?;
        tracing::debug!("signing challenge dated {}", challenge.signing_date);

        let signature = sign_challenge(keypair, &challenge.message);
        self.submit_token(&signature, &challenge.signing_date, identity)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_request_wire_shape() {
        let body = TokenRequest {
            signature: "0xabcd",
            signing_date: "2026-08-25T00:00:00Z",
            wallet_type: "solana",
            wallet: "4Nd1mYvLjyGJkX8A3F1NWSkpxGTNqsLRDTVwDHpHYJEv",
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["signature"], "0xabcd");
        assert_eq!(value["signingDate"], "2026-08-25T00:00:00Z");
        assert_eq!(value["type"], "solana");
        assert_eq!(value["wallet"], "4Nd1mYvLjyGJkX8A3F1NWSkpxGTNqsLRDTVwDHpHYJEv");
        // Exactly the four fields the endpoint expects.
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn challenge_parses_camel_case_fields() {
        let json = r#"{"message": "Sign me", "signingDate": "2026-08-25"}"#;
        let challenge: AuthChallenge = serde_json::from_str(json).unwrap();
        assert_eq!(challenge.message, "Sign me");
        assert_eq!(challenge.signing_date, "2026-08-25");
    }

    #[test]
    fn missing_validity_flag_is_a_failure() {
        let parsed: TokenResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.is_valid());

        let parsed: TokenResponse =
            serde_json::from_str(r#"{"isValid": false}"#).unwrap();
        assert!(!parsed.is_valid());

        let parsed: TokenResponse =
            serde_json::from_str(r#"{"isValid": true, "token": "x"}"#).unwrap();
        assert!(parsed.is_valid());
    }

    #[tokio::test]
    async fn authenticate_without_key_fails_fast() {
        // A bare Ethereum address has no signing capability; the call must
        // fail before any network traffic happens.
        let identity =
            wallet_keys::parse_key("0xAbCdEf0123456789abcdef0123456789ABCDEF01").unwrap();
        let client = ClaimClient::new(crate::ApiConfig::default()).unwrap();

        let err = client.authenticate(&identity).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingSigningKey));
    }
}
