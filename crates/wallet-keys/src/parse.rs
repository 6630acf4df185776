//! Multi-format private-key parsing.
//!
//! One input line in, one [`WalletIdentity`] out. Format detection order
//! lives in [`crate::format`]; this module owns the per-format decoders
//! and the error mapping that names the attempted format.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroize;

use crate::address::{checksum_address, eth_address_from_uncompressed};
use crate::error::KeyError;
use crate::format::{detect_format, KeyFormat};
use crate::identity::{SolanaKeypair, WalletIdentity};

/// Parse a raw input line into a wallet identity.
///
/// The line may be a bare Ethereum address, a JSON byte array, 64- or
/// 128-char hex, or Base58 — see [`detect_format`] for the priority
/// order. Decode failures carry the attempted format in the error.
pub fn parse_key(raw: &str) -> Result<WalletIdentity, KeyError> {
    let trimmed = raw.trim();
    let format = detect_format(trimmed).ok_or(KeyError::UnrecognizedFormat)?;

    match format {
        KeyFormat::BareAddress => parse_bare_address(trimmed),
        KeyFormat::JsonArray => parse_json_array(trimmed),
        KeyFormat::Hex64 => parse_eth_private_key(trimmed),
        KeyFormat::Hex128 => parse_sol_hex(trimmed),
        KeyFormat::Base58 => parse_sol_base58(trimmed),
    }
}

/// A `0x` + 40-hex string is taken as-is: an Ethereum address with no
/// signing capability. The stored form is EIP-55 checksummed regardless
/// of the input casing.
fn parse_bare_address(s: &str) -> Result<WalletIdentity, KeyError> {
    let hex_part = s[2..].to_lowercase();
    Ok(WalletIdentity::ethereum(checksum_address(&hex_part)))
}

fn parse_json_array(s: &str) -> Result<WalletIdentity, KeyError> {
    let bytes: Vec<u8> =
        serde_json::from_str(s).map_err(|e| KeyError::InvalidEncoding {
            format: KeyFormat::JsonArray,
            reason: e.to_string(),
        })?;
    solana_identity_from_bytes(bytes, KeyFormat::JsonArray)
}

/// 64 hex chars are an Ethereum private key. The key is used once to
/// derive the address and then dropped — the Ethereum path never signs.
fn parse_eth_private_key(s: &str) -> Result<WalletIdentity, KeyError> {
    let hex_part = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let mut key_bytes = [0u8; 32];
    hex::decode_to_slice(hex_part, &mut key_bytes).map_err(|e| {
        KeyError::InvalidEncoding {
            format: KeyFormat::Hex64,
            reason: e.to_string(),
        }
    })?;

    // Rejects zero and out-of-range scalars.
    let secret = k256::SecretKey::from_bytes((&key_bytes).into()).map_err(|e| {
        KeyError::InvalidKeyMaterial {
            format: KeyFormat::Hex64,
            reason: e.to_string(),
        }
    })?;
    key_bytes.zeroize();

    let uncompressed = secret.public_key().to_encoded_point(false);
    let mut body = [0u8; 64];
    body.copy_from_slice(&uncompressed.as_bytes()[1..]);

    Ok(WalletIdentity::ethereum(eth_address_from_uncompressed(&body)))
}

fn parse_sol_hex(s: &str) -> Result<WalletIdentity, KeyError> {
    let bytes = hex::decode(s).map_err(|e| KeyError::InvalidEncoding {
        format: KeyFormat::Hex128,
        reason: e.to_string(),
    })?;
    solana_identity_from_bytes(bytes, KeyFormat::Hex128)
}

fn parse_sol_base58(s: &str) -> Result<WalletIdentity, KeyError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| KeyError::InvalidEncoding {
            format: KeyFormat::Base58,
            reason: e.to_string(),
        })?;
    solana_identity_from_bytes(bytes, KeyFormat::Base58)
}

/// Shared tail of the three Solana paths: 64 decoded bytes must form a
/// consistent Ed25519 keypair (seed + matching public key).
fn solana_identity_from_bytes(
    mut bytes: Vec<u8>,
    format: KeyFormat,
) -> Result<WalletIdentity, KeyError> {
    if bytes.len() != 64 {
        let len = bytes.len();
        bytes.zeroize();
        return Err(KeyError::InvalidKeyMaterial {
            format,
            reason: format!("expected 64 key bytes, got {len}"),
        });
    }

    let mut keypair_bytes = [0u8; 64];
    keypair_bytes.copy_from_slice(&bytes);
    bytes.zeroize();

    let result = SolanaKeypair::from_keypair_bytes(&keypair_bytes).map_err(|e| {
        KeyError::InvalidKeyMaterial {
            format,
            reason: e.to_string(),
        }
    });
    keypair_bytes.zeroize();

    Ok(WalletIdentity::solana(result?))
}
