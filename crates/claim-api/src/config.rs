//! Static configuration for the claim service API.
//!
//! The remote service filters requests that don't look like they came
//! from its web frontend, so the header set below is reproduced verbatim
//! as fixed constants — it is part of the wire contract, not something
//! to derive or randomize.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ApiError;

/// Base URL of the claim service API.
pub const CLAIM_API_BASE_URL: &str = "https://api.claim-portal.xyz";

/// Frontend origin the service expects to see on requests.
pub const CLAIM_PORTAL_ORIGIN: &str = "https://claim-portal.xyz";

/// Browser-mimicking headers required by the service's request filtering.
/// Names must stay lowercase (`HeaderName::from_static` contract).
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json, text/plain, */*"),
    ("accept-language", "en-US,en;q=0.9"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    ),
    (
        "sec-ch-ua",
        "\"Not/A)Brand\";v=\"8\", \"Chromium\";v=\"126\", \"Google Chrome\";v=\"126\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    ("referer", "https://claim-portal.xyz/"),
    ("origin", "https://claim-portal.xyz"),
];

/// Immutable API configuration, built once and passed into the client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: CLAIM_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at a non-default base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn auth_message_url(&self) -> String {
        format!("{}/auth/message", self.base_url)
    }

    pub fn auth_token_url(&self) -> String {
        format!("{}/auth/token", self.base_url)
    }

    pub fn eligibility_url(&self) -> String {
        format!("{}/eligibility", self.base_url)
    }

    /// Build an HTTP client carrying the fixed header set on every request.
    pub fn client(&self) -> Result<reqwest::Client, ApiError> {
        let mut headers = HeaderMap::new();
        for (name, value) in DEFAULT_HEADERS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }

        Ok(reqwest::Client::builder()
            .default_headers(headers)
            .build()?)
    }
}
