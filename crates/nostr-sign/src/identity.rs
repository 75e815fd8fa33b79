//! Identity: a keypair that authors events.
//!
//! An identity owns one secp256k1 keypair for its whole lifetime and never
//! mutates it, so it can be shared across threads and sign concurrently.

use nostr_sign_core::{
    validate_event, Event, EventAttributes, KeyGenerator, Keypair, PublicKey, RandomKeyGenerator,
};
use serde_json::Value;

use crate::error::{Error, Result};

/// Configuration for an identity.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Verify each event right after signing it.
    pub verify_after_sign: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            verify_after_sign: true,
        }
    }
}

/// An event author.
#[derive(Debug, Clone)]
pub struct Identity {
    keypair: Keypair,
    config: IdentityConfig,
}

impl Identity {
    /// Wrap an existing keypair.
    pub fn new(keypair: Keypair) -> Self {
        Self::with_config(keypair, IdentityConfig::default())
    }

    /// Wrap an existing keypair with explicit configuration.
    pub fn with_config(keypair: Keypair, config: IdentityConfig) -> Self {
        tracing::debug!(pubkey = %keypair.public_key(), "identity ready");
        Self { keypair, config }
    }

    /// Create an identity with a fresh random keypair.
    pub fn generate() -> Self {
        Self::with_generator(&RandomKeyGenerator)
    }

    /// Create an identity from a key generator.
    ///
    /// The generator is consulted exactly once.
    pub fn with_generator<G: KeyGenerator + ?Sized>(generator: &G) -> Self {
        Self::new(generator.generate_keypair())
    }

    /// The identity's public key.
    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Create a signed event from attributes.
    ///
    /// The author is always this identity. With no `created_at`, the event
    /// is stamped with the current time.
    pub fn create_event(&self, attributes: EventAttributes) -> Result<Event> {
        let fragment = attributes.into_fragment(self.keypair.public_key());
        let event = fragment.sign(&self.keypair)?;

        if self.config.verify_after_sign {
            if let Err(e) = validate_event(&event) {
                tracing::warn!(id = %event.id(), "signed event failed self-check: {}", e);
                return Err(Error::SelfCheckFailed(e));
            }
        }

        tracing::debug!(
            id = %event.id(),
            kind = event.kind(),
            pubkey = %event.pubkey(),
            "signed event"
        );
        Ok(event)
    }

    /// Create a signed event from untyped JSON attributes.
    ///
    /// Shape errors are reported before anything is signed.
    pub fn create_event_from_json(&self, attributes: &Value) -> Result<Event> {
        let attributes = EventAttributes::from_json(attributes)?;
        self.create_event(attributes)
    }
}

impl From<Keypair> for Identity {
    fn from(keypair: Keypair) -> Self {
        Self::new(keypair)
    }
}
