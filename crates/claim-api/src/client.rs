use reqwest::Response;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Client for the claim service. Cheap to clone; holds only the reqwest
/// client (which is internally reference-counted) and the immutable
/// configuration.
#[derive(Debug, Clone)]
pub struct ClaimClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ApiConfig,
}

impl ClaimClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = config.client()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Map a non-success response into a transport error, preserving the
    /// raw body for diagnostics.
    pub(crate) async fn transport_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::Transport { status, body }
    }
}
