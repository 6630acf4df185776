use std::fmt;

use crate::address::solana_address;
use crate::chain::Chain;

/// An Ed25519 keypair for a Solana wallet.
///
/// Opaque wrapper so secret bytes never leak through `Debug` or serialized
/// output. The inner `ed25519_dalek::SigningKey` zeroizes itself on drop.
pub struct SolanaKeypair(ed25519_dalek::SigningKey);

impl SolanaKeypair {
    /// Build from the 64-byte Solana secret-key layout (32-byte seed
    /// followed by the 32-byte public key). Fails if the public half does
    /// not match the key derived from the seed.
    pub fn from_keypair_bytes(
        bytes: &[u8; 64],
    ) -> Result<Self, ed25519_dalek::SignatureError> {
        ed25519_dalek::SigningKey::from_keypair_bytes(bytes).map(Self)
    }

    /// Build from a bare 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self(ed25519_dalek::SigningKey::from_bytes(seed))
    }

    /// The 32-byte Ed25519 public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.0.verifying_key().to_bytes()
    }

    pub(crate) fn inner(&self) -> &ed25519_dalek::SigningKey {
        &self.0
    }
}

impl fmt::Debug for SolanaKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret material.
        f.debug_tuple("SolanaKeypair").field(&"<redacted>").finish()
    }
}

/// A parsed wallet: chain, address, and (Solana only) signing capability.
pub struct WalletIdentity {
    chain: Chain,
    address: String,
    signing_key: Option<SolanaKeypair>,
}

impl WalletIdentity {
    /// A Solana wallet with full signing capability. The address is the
    /// Base58 encoding of the keypair's public key.
    pub(crate) fn solana(keypair: SolanaKeypair) -> Self {
        let address = solana_address(&keypair.public_key());
        Self {
            chain: Chain::Solana,
            address,
            signing_key: Some(keypair),
        }
    }

    /// An Ethereum wallet known only by address — eligibility lookups
    /// work, ownership proof does not.
    pub(crate) fn ethereum(address: String) -> Self {
        Self {
            chain: Chain::Ethereum,
            address,
            signing_key: None,
        }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn signing_key(&self) -> Option<&SolanaKeypair> {
        self.signing_key.as_ref()
    }

    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }
}

impl fmt::Debug for WalletIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletIdentity")
            .field("chain", &self.chain)
            .field("address", &self.address)
            .field("signing_key", if self.can_sign() { &"present" } else { &"absent" })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keypair() -> SolanaKeypair {
        SolanaKeypair::from_seed(&[7u8; 32])
    }

    #[test]
    fn solana_identity_derives_address_from_pubkey() {
        let keypair = test_keypair();
        let pubkey = keypair.public_key();
        let identity = WalletIdentity::solana(keypair);
        assert_eq!(identity.chain(), Chain::Solana);
        assert_eq!(identity.address(), solana_address(&pubkey));
        assert!(identity.can_sign());
    }

    #[test]
    fn ethereum_identity_has_no_signing_key() {
        let identity =
            WalletIdentity::ethereum("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".into());
        assert_eq!(identity.chain(), Chain::Ethereum);
        assert!(!identity.can_sign());
        assert!(identity.signing_key().is_none());
    }

    #[test]
    fn keypair_debug_redacts_secret() {
        let debug = format!("{:?}", test_keypair());
        assert!(debug.contains("redacted"));
        // The seed is all 0x07; its hex must not show up anywhere.
        assert!(!debug.contains("0707"));
    }

    #[test]
    fn identity_debug_shows_presence_not_material() {
        let identity = WalletIdentity::solana(test_keypair());
        let debug = format!("{identity:?}");
        assert!(debug.contains("present"));
        assert!(!debug.contains("0707"));
    }

    #[test]
    fn from_keypair_bytes_rejects_mismatched_pubkey() {
        let keypair = test_keypair();
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&[7u8; 32]);
        bytes[32..].copy_from_slice(&keypair.public_key());
        assert!(SolanaKeypair::from_keypair_bytes(&bytes).is_ok());

        // Corrupt the public half.
        bytes[40] ^= 0xff;
        assert!(SolanaKeypair::from_keypair_bytes(&bytes).is_err());
    }
}
