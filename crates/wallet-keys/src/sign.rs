//! Challenge signing for the Solana ownership proof.

use ed25519_dalek::Signer;

use crate::identity::SolanaKeypair;

/// Produce a detached Ed25519 signature over the challenge message.
///
/// The message is signed as its UTF-8 bytes; the output is lowercase hex
/// with a `0x` prefix, which is the exact text form the claim service
/// verifies. Ed25519 is deterministic, so identical inputs always yield
/// the identical string.
pub fn sign_challenge(keypair: &SolanaKeypair, message: &str) -> String {
    let signature = keypair.inner().sign(message.as_bytes());
    format!("0x{}", hex::encode(signature.to_bytes()))
}
