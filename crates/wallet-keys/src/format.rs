//! Key-format detection.
//!
//! The parser has to cope with five overlapping input encodings, and the
//! order they are tried in matters (a 64-char hex string is also valid
//! Base58, for example). The order lives in one table rather than a chain
//! of nested branches so it stays visible and testable.

use std::fmt;

/// The recognized input encodings, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// `0x` + 40 hex chars: an Ethereum address with no private key.
    BareAddress,
    /// `[1, 2, ...]`: a JSON array of Solana secret-key bytes.
    JsonArray,
    /// 64 hex chars (optional `0x` prefix): an Ethereum private key.
    Hex64,
    /// 128 hex chars: a hex-encoded 64-byte Solana secret key.
    Hex128,
    /// Anything else: attempted as a Base58 Solana secret key.
    Base58,
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyFormat::BareAddress => "bare address",
            KeyFormat::JsonArray => "JSON byte array",
            KeyFormat::Hex64 => "64-char hex",
            KeyFormat::Hex128 => "128-char hex",
            KeyFormat::Base58 => "Base58",
        };
        f.write_str(name)
    }
}

type Matcher = fn(&str) -> bool;

/// Format predicates tried in order; the first match wins. `Base58` is the
/// deliberate catch-all — its decode step rejects anything that is not a
/// valid secret key.
const DETECTION_ORDER: &[(KeyFormat, Matcher)] = &[
    (KeyFormat::BareAddress, is_bare_address),
    (KeyFormat::JsonArray, is_json_array),
    (KeyFormat::Hex64, is_hex64),
    (KeyFormat::Hex128, is_hex128),
    (KeyFormat::Base58, |_| true),
];

/// Determine which encoding a (trimmed) input line is in.
///
/// Returns `None` only for empty input; everything else falls through to
/// `Base58`, whose decoder reports the failure if the guess was wrong.
pub fn detect_format(raw: &str) -> Option<KeyFormat> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DETECTION_ORDER
        .iter()
        .find(|(_, matches)| matches(trimmed))
        .map(|(format, _)| *format)
}

fn is_bare_address(s: &str) -> bool {
    (s.starts_with("0x") || s.starts_with("0X"))
        && s.len() == 42
        && s[2..].chars().all(|c| c.is_ascii_hexdigit())
}

fn is_json_array(s: &str) -> bool {
    s.starts_with('[') && s.ends_with(']')
}

fn is_hex64(s: &str) -> bool {
    let hex_part = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex_part.len() == 64 && hex_part.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_hex128(s: &str) -> bool {
    s.len() == 128 && s.chars().all(|c| c.is_ascii_hexdigit())
}
