//! Address derivation for Solana and Ethereum.
//!
//! Solana addresses are the Base58 encoding of the raw 32-byte Ed25519
//! public key — no hashing step. Ethereum addresses are the last 20 bytes
//! of the Keccak-256 hash of the uncompressed secp256k1 public key,
//! rendered with EIP-55 mixed-case checksumming.

use sha3::{Digest, Keccak256};

/// Convert a 32-byte Ed25519 public key to a Solana address string.
pub fn solana_address(ed25519_pubkey: &[u8; 32]) -> String {
    bs58::encode(ed25519_pubkey).into_string()
}

/// Derive an EIP-55 checksummed Ethereum address from the 64-byte body of
/// an uncompressed secp256k1 public key (the bytes after the `0x04` tag).
pub fn eth_address_from_uncompressed(pubkey_body: &[u8; 64]) -> String {
    let hash = Keccak256::digest(pubkey_body);

    // Last 20 bytes of the hash are the raw address.
    let addr_hex = hex::encode(&hash[12..]);
    checksum_address(&addr_hex)
}

/// Applies EIP-55 mixed-case checksum encoding to a raw address.
///
/// `hex_part` must be exactly 40 lowercase hex characters (no `0x`
/// prefix); the return value carries the prefix.
pub fn checksum_address(hex_part: &str) -> String {
    debug_assert_eq!(hex_part.len(), 40);

    // EIP-55: hash the lowercase hex address (without 0x).
    let hash = Keccak256::digest(hex_part.as_bytes());
    let hash_hex = hex::encode(hash);

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in hex_part.chars().enumerate() {
        if c.is_ascii_digit() {
            checksummed.push(c);
        } else {
            // If the corresponding nibble in the hash is >= 8, uppercase it.
            let hash_nibble = u8::from_str_radix(&hash_hex[i..i + 1], 16).unwrap_or(0);
            if hash_nibble >= 8 {
                checksummed.push(c.to_ascii_uppercase());
            } else {
                checksummed.push(c);
            }
        }
    }

    checksummed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_program_address() {
        // The Solana System Program key is 32 zero bytes.
        let zeros = [0u8; 32];
        assert_eq!(solana_address(&zeros), "11111111111111111111111111111111");
    }

    #[test]
    fn solana_address_deterministic() {
        let pubkey = [0x42u8; 32];
        assert_eq!(solana_address(&pubkey), solana_address(&pubkey));
    }

    #[test]
    fn eip55_checksum_known_addresses() {
        // Test vectors from EIP-55.
        let cases = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in &cases {
            let lower = expected[2..].to_lowercase();
            assert_eq!(&checksum_address(&lower), expected);
        }
    }

    #[test]
    fn eth_address_known_vector() {
        // Private key 0x...01 has a well-known address.
        use k256::elliptic_curve::sec1::ToEncodedPoint;
        use k256::SecretKey;

        let mut privkey = [0u8; 32];
        privkey[31] = 1;

        let secret = SecretKey::from_bytes((&privkey).into()).expect("valid private key");
        let uncompressed = secret.public_key().to_encoded_point(false);

        let mut body = [0u8; 64];
        body.copy_from_slice(&uncompressed.as_bytes()[1..]);

        assert_eq!(
            eth_address_from_uncompressed(&body),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }
}
