//! EventFragment: the unsigned precursor of an event.
//!
//! A fragment holds exactly the fields that go into the hash preimage. It is
//! immutable; signing consumes it and yields an [`Event`].

use crate::canonical::{canonical_bytes, canonical_json};
use crate::crypto::{Keypair, PublicKey, Sha256Hash};
use crate::error::CoreError;
use crate::event::Event;
use crate::types::EventId;

/// Unsigned event content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventFragment {
    pubkey: PublicKey,
    created_at: i64,
    kind: u64,
    tags: Vec<Vec<String>>,
    content: String,
}

impl EventFragment {
    pub fn new(
        pubkey: PublicKey,
        created_at: i64,
        kind: u64,
        tags: Vec<Vec<String>>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            pubkey,
            created_at,
            kind,
            tags,
            content: content.into(),
        }
    }

    /// Public key of the author.
    pub fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    /// Unix timestamp in seconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn kind(&self) -> u64 {
        self.kind
    }

    pub fn tags(&self) -> &[Vec<String>] {
        &self.tags
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The canonical preimage as text.
    pub fn canonical_json(&self) -> Result<String, CoreError> {
        canonical_json(self)
    }

    /// The canonical preimage bytes.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CoreError> {
        canonical_bytes(self)
    }

    /// SHA-256 of the canonical preimage.
    pub fn compute_id(&self) -> Result<EventId, CoreError> {
        Ok(Sha256Hash::hash(&self.canonical_bytes()?).into())
    }

    /// Hash and sign the fragment, producing the finished event.
    ///
    /// The fragment's pubkey is replaced by the keypair's, so the signer is
    /// always the attested author.
    pub fn sign(mut self, keypair: &Keypair) -> Result<Event, CoreError> {
        self.pubkey = keypair.public_key();
        let id = self.compute_id()?;
        let sig = keypair.sign_digest(&id);
        Ok(Event::from_signed_parts(id, self, sig))
    }

    pub(crate) fn into_parts(self) -> (PublicKey, i64, u64, Vec<Vec<String>>, String) {
        (self.pubkey, self.created_at, self.kind, self.tags, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_one() -> Keypair {
        let mut seed = [0u8; 32];
        seed[31] = 1;
        Keypair::from_secret_bytes(&seed).unwrap()
    }

    #[test]
    fn test_canonical_hello() {
        let kp = key_one();
        let fragment = EventFragment::new(kp.public_key(), 1700000000, 1, vec![], "hello");
        assert_eq!(
            fragment.canonical_json().unwrap(),
            "[0,\"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\",1700000000,1,[],\"hello\"]"
        );
        assert_eq!(
            fragment.compute_id().unwrap().to_hex(),
            "bde202ea7642ff9910600c7edc948a1f4220f0cbf5e4fb2b7efafa681bbb5285"
        );
    }

    #[test]
    fn test_id_changes_with_every_field() {
        let kp = key_one();
        let base = EventFragment::new(
            kp.public_key(),
            1000,
            1,
            vec![vec!["a".into()], vec!["b".into()]],
            "x",
        );
        let id = base.compute_id().unwrap();

        let variants = [
            EventFragment::new(PublicKey::from_bytes([1; 32]), 1000, 1, base.tags.clone(), "x"),
            EventFragment::new(kp.public_key(), 1001, 1, base.tags.clone(), "x"),
            EventFragment::new(kp.public_key(), 1000, 2, base.tags.clone(), "x"),
            EventFragment::new(
                kp.public_key(),
                1000,
                1,
                vec![vec!["b".into()], vec!["a".into()]],
                "x",
            ),
            EventFragment::new(kp.public_key(), 1000, 1, base.tags.clone(), "x "),
        ];
        for variant in variants {
            assert_ne!(variant.compute_id().unwrap(), id, "{:?}", variant);
        }
    }

    #[test]
    fn test_sign_overrides_pubkey() {
        let kp = key_one();
        let fragment = EventFragment::new(PublicKey::from_bytes([7; 32]), 1, 1, vec![], "");
        let event = fragment.sign(&kp).unwrap();
        assert_eq!(event.pubkey(), &kp.public_key());
        assert!(event.verify());
    }

    #[test]
    fn test_sign_is_deterministic() {
        let kp = key_one();
        let fragment = EventFragment::new(kp.public_key(), 1700000000, 1, vec![], "hello");
        let e1 = fragment.clone().sign(&kp).unwrap();
        let e2 = fragment.sign(&kp).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(
            e1.sig().to_hex(),
            "96ee7a4ebef51f83993655f363518c1676d9b0acee1473002955f0aaaeea8235\
             01b0142575ed2c37a54c91a3f6d293b2ba279447948c83f71d4385d372be8d52"
        );
    }

    #[test]
    fn test_kind_beyond_u16_signs() {
        let kp = key_one();
        for kind in [65536, u32::MAX as u64 + 1] {
            let event = EventFragment::new(kp.public_key(), 1, kind, vec![], "")
                .sign(&kp)
                .unwrap();
            assert_eq!(event.kind(), kind);
            assert!(event.verify());
        }
    }
}
