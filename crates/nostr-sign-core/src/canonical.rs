//! Canonical JSON encoding of event fragments.
//!
//! The hash preimage of an event is the compact JSON array
//!
//! ```text
//! [0,"<pubkey hex>",<created_at>,<kind>,<tags>,"<content>"]
//! ```
//!
//! Encoding rules (those of a compact `serde_json` dump):
//! - No whitespace anywhere
//! - Integers in decimal, `-` only for negatives, no leading zeros or exponents
//! - Strings escape `"` and `\`, use `\b \f \n \r \t` for those control
//!   characters and `\u00xx` (lowercase hex) for every other code point below
//!   U+0020; everything else, including `/`, DEL and non-ASCII, is raw UTF-8
//! - No Unicode normalization
//!
//! **CRITICAL**: This encoding is FROZEN. Changes break every existing event id.

use crate::crypto::PublicKey;
use crate::error::CoreError;
use crate::fragment::EventFragment;

/// Leading element of the preimage array. Reserved format marker.
pub const FORMAT_MARKER: u8 = 0;

/// Encode a fragment to its canonical bytes (the hash preimage).
pub fn canonical_bytes(fragment: &EventFragment) -> Result<Vec<u8>, CoreError> {
    canonical_json(fragment).map(String::into_bytes)
}

/// Encode a fragment to its canonical JSON text.
pub fn canonical_json(fragment: &EventFragment) -> Result<String, CoreError> {
    encode_parts(
        fragment.pubkey(),
        fragment.created_at(),
        fragment.kind(),
        fragment.tags(),
        fragment.content(),
    )
}

/// Encode the preimage from its parts.
pub fn encode_parts(
    pubkey: &PublicKey,
    created_at: i64,
    kind: u64,
    tags: &[Vec<String>],
    content: &str,
) -> Result<String, CoreError> {
    serde_json::to_string(&(
        FORMAT_MARKER,
        pubkey.to_hex(),
        created_at,
        kind,
        tags,
        content,
    ))
    .map_err(|e| CoreError::EncodingError(e.to_string()))
}
