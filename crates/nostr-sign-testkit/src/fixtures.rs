//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use nostr_sign::{EventAttributes, Identity, Keypair};
use nostr_sign_core::{Event, EventKind, PublicKey};
use serde_json::json;

/// A test fixture holding one identity.
pub struct TestFixture {
    pub identity: Identity,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            identity: Identity::generate(),
        }
    }

    /// Create with a deterministic keypair from a secret key.
    ///
    /// Panics if `seed` is zero or not below the curve order.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        let keypair = Keypair::from_secret_bytes(&seed).expect("seed is a valid secret key");
        Self {
            identity: Identity::new(keypair),
        }
    }

    /// Get the identity's public key.
    pub fn public_key(&self) -> PublicKey {
        self.identity.public_key()
    }

    /// Create an event of any kind.
    pub fn make_event(&self, attributes: EventAttributes) -> Event {
        self.identity
            .create_event(attributes)
            .expect("fixture event signs")
    }

    /// Create a text note stamped with the current time.
    pub fn make_text_note(&self, content: &str) -> Event {
        self.make_event(EventAttributes::text_note(content))
    }

    /// Create a metadata event with a JSON profile.
    pub fn make_metadata(&self, name: &str, about: &str) -> Event {
        let profile = json!({ "name": name, "about": about }).to_string();
        self.make_event(EventAttributes::new(
            EventKind::SetMetadata.as_u64(),
            profile,
        ))
    }

    /// Create a relay recommendation.
    pub fn make_recommend_server(&self, url: &str) -> Event {
        self.make_event(EventAttributes::new(
            EventKind::RecommendServer.as_u64(),
            url,
        ))
    }

    /// Create a contact list following `contacts`.
    pub fn make_contact_list(&self, contacts: &[PublicKey]) -> Event {
        let tags = contacts
            .iter()
            .map(|pk| vec!["p".to_string(), pk.to_hex()])
            .collect();
        self.make_event(EventAttributes::new(EventKind::ContactList.as_u64(), "").tags(tags))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[24..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}
