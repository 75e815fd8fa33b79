//! Error types for identities.

use nostr_sign_core::{CoreError, FormatError, SigningError, ValidationError, VerificationError};
use thiserror::Error;

/// Errors that can occur while creating events.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the core primitives (bad attributes, bad key, codec).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A freshly signed event did not verify against its own key.
    #[error("self-check failed: {0}")]
    SelfCheckFailed(VerificationError),
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Core(CoreError::Validation(e))
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Core(CoreError::Format(e))
    }
}

impl From<SigningError> for Error {
    fn from(e: SigningError) -> Self {
        Error::Core(CoreError::Signing(e))
    }
}

/// Result type for identity operations.
pub type Result<T> = std::result::Result<T, Error>;
