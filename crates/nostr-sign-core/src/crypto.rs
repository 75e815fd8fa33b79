//! Cryptographic primitives: BIP-340 Schnorr over secp256k1 and SHA-256.
//!
//! Public keys are 32-byte x-only coordinates. Signing uses the BIP-340
//! nonce derivation without auxiliary randomness, so the same key and
//! digest always produce the same signature.

use secp256k1::{schnorr, Message, XOnlyPublicKey, SECP256K1};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::{CoreError, FormatError, SigningError};
use crate::keygen::{KeyGenerator, RandomKeyGenerator};
use crate::types::{decode_hex_array, impl_hex_serde, EventId};

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Hash(pub [u8; 32]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA256({}...)", &self.to_hex()[..8])
    }
}

impl From<Sha256Hash> for EventId {
    fn from(hash: Sha256Hash) -> Self {
        EventId(hash.0)
    }
}

/// SHA-256 of `data` as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    Sha256Hash::hash(data).to_hex()
}

/// A 32-byte x-only secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        decode_hex_array("pubkey", s).map(Self)
    }

    /// Verify a Schnorr signature over a 32-byte digest.
    ///
    /// Returns false for a bad signature and for a key that is not a
    /// valid x coordinate on the curve.
    pub fn verify(&self, digest: &[u8; 32], signature: &Signature) -> bool {
        let Ok(xonly) = XOnlyPublicKey::from_slice(&self.0) else {
            return false;
        };
        let Ok(sig) = schnorr::Signature::from_slice(&signature.0) else {
            return false;
        };
        let message = Message::from_digest(*digest);
        SECP256K1.verify_schnorr(&sig, &message, &xonly).is_ok()
    }
}

impl_hex_serde!(PublicKey);

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 64-byte BIP-340 Schnorr signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to lowercase hex string (128 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        decode_hex_array("sig", s).map(Self)
    }
}

impl_hex_serde!(Signature);

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig({}...)", &self.to_hex()[..8])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte secp256k1 secret key, guaranteed to be a valid scalar.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecretKey(secp256k1::SecretKey);

impl SecretKey {
    pub(crate) const fn from_inner(inner: secp256k1::SecretKey) -> Self {
        Self(inner)
    }

    /// Create from raw bytes. Fails for zero or values not below the group order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SigningError> {
        secp256k1::SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| SigningError::InvalidSecretKey)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = decode_hex_array("secret key", s)?;
        Ok(Self::from_bytes(&bytes)?)
    }

    /// Get the raw secret bytes.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.0.secret_bytes()
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.secret_bytes())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// A keypair for signing events.
///
/// This wraps secp256k1's Keypair; the x-only public key is derived once.
#[derive(Clone)]
pub struct Keypair {
    inner: secp256k1::Keypair,
    public_key: PublicKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        RandomKeyGenerator.generate_keypair()
    }

    /// Build the keypair belonging to a secret key.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        let inner = secp256k1::Keypair::from_secret_key(SECP256K1, &secret_key.0);
        let (xonly, _parity) = inner.x_only_public_key();
        Self {
            inner,
            public_key: PublicKey(xonly.serialize()),
        }
    }

    /// Create from 32 raw secret bytes.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Result<Self, SigningError> {
        SecretKey::from_bytes(bytes).map(|sk| Self::from_secret_key(&sk))
    }

    /// Create from a hex-encoded secret key.
    pub fn from_secret_hex(s: &str) -> Result<Self, CoreError> {
        SecretKey::from_hex(s).map(|sk| Self::from_secret_key(&sk))
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// Get the secret key.
    pub fn secret_key(&self) -> SecretKey {
        SecretKey(self.inner.secret_key())
    }

    /// Sign a 32-byte digest.
    pub fn sign(&self, digest: &[u8; 32]) -> Signature {
        let message = Message::from_digest(*digest);
        let sig = SECP256K1.sign_schnorr_no_aux_rand(&message, &self.inner);
        Signature(sig.serialize())
    }

    /// Sign an event id (the raw digest bytes, not its hex text).
    pub fn sign_digest(&self, id: &EventId) -> Signature {
        self.sign(id.as_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.public_key)
    }
}
