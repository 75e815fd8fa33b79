//! Event validation: id and signature checks with a reason on failure.

use crate::error::VerificationError;
use crate::event::Event;

/// Validate a complete event.
///
/// This performs:
/// - Id check (recomputed from the canonical preimage)
/// - Signature verification over the id bytes
///
/// Unlike [`Event::verify`], the error says which check failed.
pub fn validate_event(event: &Event) -> Result<(), VerificationError> {
    // 1. Id must match the fields
    let computed = event
        .compute_id()
        .map_err(|e| VerificationError::Preimage(e.to_string()))?;
    if computed != *event.id() {
        return Err(VerificationError::IdMismatch {
            claimed: *event.id(),
            computed,
        });
    }

    // 2. Signature must match the id
    if !event.pubkey().verify(event.id().as_bytes(), event.sig()) {
        return Err(VerificationError::SignatureFailed);
    }

    Ok(())
}
