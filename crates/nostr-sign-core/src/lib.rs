//! # nostr-sign core
//!
//! Pure primitives for building and signing nostr events: canonical
//! serialization, SHA-256 ids, and BIP-340 Schnorr signatures over secp256k1.
//!
//! This crate contains no I/O, no storage, no networking. Every operation is
//! synchronous and depends only on its inputs.
//!
//! ## Key Types
//!
//! - [`EventFragment`] - Unsigned event fields, the hash preimage source
//! - [`Event`] - A signed event with its id and signature
//! - [`EventId`] - Content-addressed identifier (SHA-256 hash)
//! - [`Keypair`] - Secret key plus its x-only [`PublicKey`]
//! - [`EventKind`] - Registry of known kinds
//!
//! ## Canonicalization
//!
//! The id of an event is the SHA-256 of the compact JSON array
//! `[0,pubkey,created_at,kind,tags,content]`. See [`canonical`] module.

pub mod attributes;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod event;
pub mod fragment;
pub mod keygen;
pub mod kind;
pub mod signer;
pub mod types;
pub mod validation;

pub use attributes::EventAttributes;
pub use canonical::{canonical_bytes, canonical_json, FORMAT_MARKER};
pub use crypto::{sha256_hex, Keypair, PublicKey, SecretKey, Sha256Hash, Signature};
pub use error::{CoreError, FormatError, SigningError, ValidationError, VerificationError};
pub use event::Event;
pub use fragment::EventFragment;
pub use keygen::{KeyGenerator, RandomKeyGenerator};
pub use kind::EventKind;
pub use types::{EventId, Timestamp};
pub use validation::validate_event;
