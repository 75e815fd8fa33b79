//! Error types for nostr-sign core.

use thiserror::Error;

use crate::types::EventId;

/// Malformed event attributes, detected before any cryptographic work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("event attributes must be an object")]
    NotAnObject,

    #[error("missing required attribute: {0}")]
    MissingField(&'static str),

    #[error("created_at must be an integer Unix timestamp, got {0}")]
    InvalidCreatedAt(String),

    #[error("kind must be a non-negative integer, got {0}")]
    InvalidKind(String),

    #[error("tags must be an array of arrays of strings: {0}")]
    InvalidTags(String),

    #[error("content must be a string, got {0}")]
    InvalidContent(String),
}

/// Why a signed event does not check out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("event id mismatch: claimed {claimed}, computed {computed}")]
    IdMismatch { claimed: EventId, computed: EventId },

    #[error("signature verification failed")]
    SignatureFailed,

    #[error("cannot encode preimage: {0}")]
    Preimage(String),
}

/// A hex-encoded key, digest, or signature that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{field}: invalid hex: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    #[error("{field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl FormatError {
    pub(crate) fn hex(field: &'static str, err: hex::FromHexError) -> Self {
        FormatError::InvalidHex {
            field,
            reason: err.to_string(),
        }
    }
}

/// Failures while producing a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    /// Zero, or not below the secp256k1 group order.
    #[error("secret key is not a valid secp256k1 scalar")]
    InvalidSecretKey,
}

/// Core errors that can occur while building, signing, or decoding events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}
