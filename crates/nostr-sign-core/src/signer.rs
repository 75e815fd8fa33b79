//! Signing and verification over raw digests.
//!
//! These are the byte-level entry points: inputs are length-checked slices,
//! so callers holding hex or untrusted buffers get a [`FormatError`] instead
//! of a panic. Signing takes the 32 raw digest bytes, never the hex text.

use crate::crypto::{Keypair, PublicKey, Signature};
use crate::error::{CoreError, FormatError};
use crate::types::{decode_hex_array, to_array};

/// Sign a 32-byte digest with a 32-byte secret key.
///
/// Fails with [`FormatError`] on wrong lengths and
/// [`SigningError`](crate::error::SigningError) if the key is zero or not
/// below the curve order.
pub fn sign(digest: &[u8], secret_key: &[u8]) -> Result<Signature, CoreError> {
    let digest: [u8; 32] = to_array("digest", digest)?;
    let secret: [u8; 32] = to_array("secret key", secret_key)?;
    let keypair = Keypair::from_secret_bytes(&secret)?;
    Ok(keypair.sign(&digest))
}

/// Verify a 64-byte signature over a 32-byte digest under a 32-byte x-only key.
///
/// An invalid signature is `Ok(false)`, not an error.
pub fn verify(digest: &[u8], public_key: &[u8], signature: &[u8]) -> Result<bool, FormatError> {
    let digest: [u8; 32] = to_array("digest", digest)?;
    let public_key = PublicKey::from_bytes(to_array("public key", public_key)?);
    let signature = Signature::from_bytes(to_array("signature", signature)?);
    Ok(public_key.verify(&digest, &signature))
}

/// [`sign`] over hex inputs, returning the 128-character hex signature.
pub fn sign_hex(digest: &str, secret_key: &str) -> Result<String, CoreError> {
    let digest: [u8; 32] = decode_hex_array("digest", digest)?;
    let secret: [u8; 32] = decode_hex_array("secret key", secret_key)?;
    sign(&digest, &secret).map(|sig| sig.to_hex())
}

/// [`verify`] over hex inputs.
pub fn verify_hex(digest: &str, public_key: &str, signature: &str) -> Result<bool, FormatError> {
    let digest: [u8; 32] = decode_hex_array("digest", digest)?;
    let public_key: [u8; 32] = decode_hex_array("public key", public_key)?;
    let signature: [u8; 64] = decode_hex_array("signature", signature)?;
    verify(&digest, &public_key, &signature)
}
