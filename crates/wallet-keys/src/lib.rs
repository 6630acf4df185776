//! Wallet key handling for the airdrop eligibility checker.
//!
//! Input lines can arrive in five encodings: a bare Ethereum address, a
//! JSON byte array, 64-char hex (Ethereum private key), 128-char hex
//! (Solana secret key), or Base58 (Solana secret key). This crate sniffs
//! the encoding, derives the wallet address, and keeps Ed25519 signing
//! capability around for the Solana ownership-proof step.
//!
//! No chain SDKs here — address derivation is done directly with
//! `ed25519-dalek`, `k256`, `sha3` and `bs58`.

pub mod address;
pub mod chain;
pub mod error;
pub mod format;
pub mod identity;
pub mod parse;
pub mod sign;

// Re-export key public types for ergonomic imports.
pub use address::{checksum_address, eth_address_from_uncompressed, solana_address};
pub use chain::Chain;
pub use error::KeyError;
pub use format::{detect_format, KeyFormat};
pub use identity::{SolanaKeypair, WalletIdentity};
pub use parse::parse_key;
pub use sign::sign_challenge;
