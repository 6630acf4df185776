use thiserror::Error;

use crate::format::KeyFormat;

/// Key parsing errors. Every decode failure names the format that was
/// attempted so callers can report which parse path rejected the input.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("unrecognized key format")]
    UnrecognizedFormat,

    #[error("invalid {format} encoding: {reason}")]
    InvalidEncoding { format: KeyFormat, reason: String },

    #[error("invalid {format} key material: {reason}")]
    InvalidKeyMaterial { format: KeyFormat, reason: String },
}

impl KeyError {
    /// The format whose decoder produced this error, if any.
    pub fn format(&self) -> Option<KeyFormat> {
        match self {
            KeyError::UnrecognizedFormat => None,
            KeyError::InvalidEncoding { format, .. }
            | KeyError::InvalidKeyMaterial { format, .. } => Some(*format),
        }
    }
}
