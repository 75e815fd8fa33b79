//! # nostr-sign
//!
//! Build and sign nostr events.
//!
//! ## Overview
//!
//! An [`Identity`] holds a secp256k1 keypair and turns [`EventAttributes`]
//! into signed [`Event`]s:
//!
//! - The id is the SHA-256 of the canonical serialization
//!   `[0,pubkey,created_at,kind,tags,content]`
//! - The signature is a BIP-340 Schnorr signature over the id bytes
//! - Signing is deterministic: same key and fields give the same event
//!
//! ## Usage
//!
//! ```rust
//! use nostr_sign::{EventAttributes, Identity};
//!
//! let alice = Identity::generate();
//! let event = alice
//!     .create_event(EventAttributes::text_note("hello").created_at(1700000000))
//!     .unwrap();
//!
//! assert_eq!(*event.pubkey(), alice.public_key());
//! assert!(event.verify());
//! ```
//!
//! ## Re-exports
//!
//! - `nostr_sign::core` - Core primitives (Event, EventFragment, Keypair, etc.)

pub mod error;
pub mod identity;

pub use nostr_sign_core as core;

pub use error::{Error, Result};
pub use identity::{Identity, IdentityConfig};

// Re-export commonly used core types
pub use nostr_sign_core::{
    validate_event, Event, EventAttributes, EventFragment, EventId, EventKind, KeyGenerator,
    Keypair, PublicKey, RandomKeyGenerator, SecretKey, Signature, VerificationError,
};
