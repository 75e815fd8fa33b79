//! Event: a signed, content-addressed message.
//!
//! An event is immutable. It is produced either by signing an
//! [`EventFragment`] or by decoding the wire representation, which is the
//! JSON object `{id, pubkey, created_at, kind, tags, content, sig}`.
//! Decoded events are not trusted until [`Event::verify`] says so.

use serde::{Deserialize, Serialize};

use crate::crypto::{PublicKey, Signature};
use crate::error::CoreError;
use crate::fragment::EventFragment;
use crate::kind::EventKind;
use crate::types::EventId;

/// A signed event. Field order matches the wire object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    pubkey: PublicKey,
    created_at: i64,
    kind: u64,
    tags: Vec<Vec<String>>,
    content: String,
    sig: Signature,
}

impl Event {
    pub(crate) fn from_signed_parts(id: EventId, fragment: EventFragment, sig: Signature) -> Self {
        let (pubkey, created_at, kind, tags, content) = fragment.into_parts();
        Self {
            id,
            pubkey,
            created_at,
            kind,
            tags,
            content,
            sig,
        }
    }

    /// The claimed event id.
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// The author's public key.
    pub fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn kind(&self) -> u64 {
        self.kind
    }

    /// The registry entry for this event's kind, if it is a known one.
    pub fn known_kind(&self) -> Option<EventKind> {
        EventKind::from_u64(self.kind)
    }

    /// Protocol name of the kind, e.g. `"text_note"`, if it is a known one.
    pub fn kind_name(&self) -> Option<&'static str> {
        self.known_kind().map(EventKind::name)
    }

    pub fn tags(&self) -> &[Vec<String>] {
        &self.tags
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sig(&self) -> &Signature {
        &self.sig
    }

    /// The unsigned fragment this event was built from.
    pub fn fragment(&self) -> EventFragment {
        EventFragment::new(
            self.pubkey,
            self.created_at,
            self.kind,
            self.tags.clone(),
            self.content.clone(),
        )
    }

    /// Recompute the id from the event's fields.
    pub fn compute_id(&self) -> Result<EventId, CoreError> {
        self.fragment().compute_id()
    }

    /// Check that the id matches the fields and the signature matches the id.
    pub fn verify(&self) -> bool {
        matches!(self.compute_id(), Ok(id) if id == self.id)
            && self.pubkey.verify(self.id.as_bytes(), &self.sig)
    }

    /// Encode to the wire JSON object.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::EncodingError(e.to_string()))
    }

    /// Decode from the wire JSON object.
    ///
    /// Only the shape is checked; call [`Event::verify`] before trusting it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::DecodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;

    fn sample() -> Event {
        let kp = Keypair::from_secret_bytes(&[0x42; 32]).unwrap();
        EventFragment::new(
            kp.public_key(),
            1700000001,
            1,
            vec![
                vec!["t".into(), "nostr".into()],
                vec!["e".into(), "aa".repeat(32)],
            ],
            "quote \" back\\slash é 😀 nul\u{0} tab\t",
        )
        .sign(&kp)
        .unwrap()
    }

    #[test]
    fn test_wire_field_order() {
        let json = sample().to_json().unwrap();
        let positions: Vec<usize> = [
            "\"id\"",
            "\"pubkey\"",
            "\"created_at\"",
            "\"kind\"",
            "\"tags\"",
            "\"content\"",
            "\"sig\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
    }

    #[test]
    fn test_wire_roundtrip() {
        let event = sample();
        let decoded = Event::from_json(&event.to_json().unwrap()).unwrap();
        assert_eq!(decoded, event);
        assert!(decoded.verify());
    }

    #[test]
    fn test_known_vector() {
        let event = sample();
        assert_eq!(
            event.id().to_hex(),
            "dc9cac2feb420c305d5f08843f9d9438a67545078a5a2389f261f06b6044f092"
        );
        assert_eq!(
            event.sig().to_hex(),
            "b92ccf8d71e74367025206dcc5fa0fb41159009c93f8ae3f34310f30d70acbd2\
             32c2d1d09861fcf817bda538bbb44171e2e45fbfc7d018af606d8d4f9975c0e7"
        );
    }

    #[test]
    fn test_tampered_content_fails() {
        let event = sample();
        let mut value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        value["content"] = "tampered".into();
        let tampered = Event::from_json(&value.to_string()).unwrap();
        assert!(!tampered.verify());
    }

    #[test]
    fn test_decode_rejects_short_sig() {
        let event = sample();
        let mut value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        value["sig"] = "abcd".into();
        let err = Event::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::DecodingError(_)));
    }

    #[test]
    fn test_decode_rejects_non_string_tags() {
        let event = sample();
        let mut value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        value["tags"] = serde_json::json!([[1, 2]]);
        assert!(Event::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_known_kind() {
        assert_eq!(sample().known_kind(), Some(EventKind::TextNote));
        assert_eq!(sample().kind_name(), Some("text_note"));
    }

    #[test]
    fn test_decode_large_kind() {
        let kp = Keypair::from_secret_bytes(&[0x42; 32]).unwrap();
        let event = EventFragment::new(kp.public_key(), 1, 70000, vec![], "x")
            .sign(&kp)
            .unwrap();
        let json = event.to_json().unwrap();
        assert!(json.contains("\"kind\":70000"));

        let decoded = Event::from_json(&json).unwrap();
        assert_eq!(decoded.kind(), 70000);
        assert_eq!(decoded.kind_name(), None);
        assert!(decoded.verify());
    }

    #[test]
    fn test_decode_rejects_negative_kind() {
        let event = sample();
        let mut value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        value["kind"] = serde_json::json!(-1);
        assert!(Event::from_json(&value.to_string()).is_err());
    }
}
