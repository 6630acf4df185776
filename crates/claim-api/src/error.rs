use thiserror::Error;

/// Claim service client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("rate limited: retry budget exhausted")]
    RateLimited,

    #[error("authentication rejected by the claim service")]
    AuthFailed,

    #[error("eligibility response could not be decoded: {0}")]
    EligibilityQueryFailed(String),

    #[error("wallet has no signing key; ownership cannot be proven")]
    MissingSigningKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_transport_error() {
        let err = ApiError::Transport {
            status: 503,
            body: "service unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 503: service unavailable"
        );
    }

    #[test]
    fn display_rate_limited() {
        assert!(ApiError::RateLimited.to_string().contains("rate limited"));
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(ApiError::AuthFailed);
        assert!(err.to_string().contains("rejected"));
    }
}
