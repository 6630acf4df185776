use serde::{Deserialize, Serialize};

/// Supported blockchain networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Solana,
    Ethereum,
}

impl Chain {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
        }
    }

    /// Chain tag the claim service expects in the auth token request.
    pub fn auth_tag(&self) -> &'static str {
        match self {
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
        }
    }

    /// Whether ownership of this chain's wallets is proven through the
    /// challenge/signature flow. Ethereum wallets go straight to the
    /// eligibility lookup.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Chain::Solana)
    }
}
