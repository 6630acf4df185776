//! HTTP client for the airdrop claim service.
//!
//! Two concerns: proving wallet ownership (challenge fetch + signed token
//! submission, Solana wallets only) and the eligibility lookup itself.
//! The wire contract is the remote service's, reproduced verbatim —
//! including the browser-mimicking request headers its filtering expects.
//!
//! Rate-limit responses (HTTP 429) are retried with bounded exponential
//! backoff; every other non-success status is surfaced as a transport
//! error carrying the status and body.

pub mod auth;
pub mod backoff;
pub mod client;
pub mod config;
pub mod eligibility;
pub mod error;

// Re-export key public types for ergonomic imports.
pub use auth::{AuthChallenge, TokenRequest, TokenResponse};
pub use backoff::Backoff;
pub use client::ClaimClient;
pub use config::ApiConfig;
pub use eligibility::{EligibilityResponse, EligibilityResult};
pub use error::ApiError;
