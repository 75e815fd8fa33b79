//! EventAttributes: what a caller supplies to create an event.
//!
//! `kind` and `content` are required. `created_at` defaults to the current
//! time when the event is created, `tags` to an empty list. The author's
//! pubkey is never an attribute: it always comes from the signing identity.

use serde_json::Value;

use crate::crypto::PublicKey;
use crate::error::ValidationError;
use crate::fragment::EventFragment;
use crate::kind::EventKind;
use crate::types::Timestamp;

/// Caller-supplied event fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAttributes {
    pub kind: u64,
    pub content: String,
    pub created_at: Option<i64>,
    pub tags: Vec<Vec<String>>,
}

impl EventAttributes {
    /// Start with the required fields.
    pub fn new(kind: u64, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            created_at: None,
            tags: Vec::new(),
        }
    }

    /// A kind-1 text note.
    pub fn text_note(content: impl Into<String>) -> Self {
        Self::new(EventKind::TextNote.as_u64(), content)
    }

    /// Set the timestamp (Unix seconds).
    pub fn created_at(mut self, ts: i64) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Replace all tags.
    pub fn tags(mut self, tags: Vec<Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    /// Append one tag.
    pub fn tag<I, S>(mut self, tag: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.push(tag.into_iter().map(Into::into).collect());
        self
    }

    /// Build the unsigned fragment for `pubkey`, stamping the current time
    /// if no timestamp was set.
    pub fn into_fragment(self, pubkey: PublicKey) -> EventFragment {
        let created_at = self.created_at.unwrap_or_else(Timestamp::now);
        EventFragment::new(pubkey, created_at, self.kind, self.tags, self.content)
    }

    /// Validate untyped attributes, e.g. decoded from a JSON request.
    ///
    /// A `pubkey` member is ignored. Unknown members are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let map = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let kind = match map.get("kind") {
            None => return Err(ValidationError::MissingField("kind")),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| ValidationError::InvalidKind(v.to_string()))?,
        };

        let content = match map.get("content") {
            None => return Err(ValidationError::MissingField("content")),
            Some(Value::String(s)) => s.clone(),
            Some(v) => return Err(ValidationError::InvalidContent(v.to_string())),
        };

        let created_at = match map.get("created_at") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_i64()
                    .ok_or_else(|| ValidationError::InvalidCreatedAt(v.to_string()))?,
            ),
        };

        let tags = match map.get("tags") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => parse_tags(v)?,
        };

        Ok(Self {
            kind,
            content,
            created_at,
            tags,
        })
    }
}

fn parse_tags(value: &Value) -> Result<Vec<Vec<String>>, ValidationError> {
    let outer = value
        .as_array()
        .ok_or_else(|| ValidationError::InvalidTags(format!("expected array, got {}", value)))?;

    outer
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let items = tag.as_array().ok_or_else(|| {
                ValidationError::InvalidTags(format!("tag {} is not an array: {}", i, tag))
            })?;
            items
                .iter()
                .enumerate()
                .map(|(j, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(ValidationError::InvalidTags(format!(
                        "tag {} item {} is not a string: {}",
                        i, j, other
                    ))),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let attrs = EventAttributes::text_note("hi")
            .created_at(42)
            .tag(["p", "abc"])
            .tag(Vec::<String>::new());
        assert_eq!(attrs.kind, 1);
        assert_eq!(attrs.created_at, Some(42));
        assert_eq!(attrs.tags, vec![vec!["p".to_string(), "abc".to_string()], vec![]]);
    }

    #[test]
    fn test_from_json_full() {
        let attrs = EventAttributes::from_json(&json!({
            "kind": 3,
            "created_at": 1672531200,
            "tags": [["p", "abc", "wss://relay"], []],
            "content": "",
            "pubkey": "ignored"
        }))
        .unwrap();
        assert_eq!(attrs.kind, 3);
        assert_eq!(attrs.created_at, Some(1672531200));
        assert_eq!(attrs.tags.len(), 2);
        assert!(attrs.tags[1].is_empty());
        assert_eq!(attrs.content, "");
    }

    #[test]
    fn test_from_json_defaults() {
        let attrs = EventAttributes::from_json(&json!({"kind": 1, "content": "x"})).unwrap();
        assert_eq!(attrs.created_at, None);
        assert!(attrs.tags.is_empty());
    }

    #[test]
    fn test_rejects_non_object() {
        assert_eq!(
            EventAttributes::from_json(&json!([1, 2])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert_eq!(
            EventAttributes::from_json(&json!({"content": "x"})),
            Err(ValidationError::MissingField("kind"))
        );
        assert_eq!(
            EventAttributes::from_json(&json!({"kind": 1})),
            Err(ValidationError::MissingField("content"))
        );
    }

    #[test]
    fn test_rejects_bad_created_at() {
        for bad in [json!(1.5), json!("1700000000"), json!(u64::MAX), json!(true)] {
            let result = EventAttributes::from_json(&json!({
                "kind": 1, "content": "x", "created_at": bad
            }));
            assert!(
                matches!(result, Err(ValidationError::InvalidCreatedAt(_))),
                "{:?}",
                result
            );
        }
    }

    #[test]
    fn test_rejects_bad_kind() {
        for bad in [json!(-1), json!(1.0), json!(1.5), json!("1"), json!(null)] {
            let result = EventAttributes::from_json(&json!({"kind": bad, "content": "x"}));
            assert!(
                matches!(result, Err(ValidationError::InvalidKind(_))),
                "{:?}",
                result
            );
        }
    }

    #[test]
    fn test_accepts_unknown_kind() {
        for kind in [30023, 65536, 70000, u32::MAX as u64 + 1, u64::MAX] {
            let attrs =
                EventAttributes::from_json(&json!({"kind": kind, "content": "x"})).unwrap();
            assert_eq!(attrs.kind, kind);
        }
    }

    #[test]
    fn test_rejects_bad_tags() {
        for bad in [json!("p"), json!(["p"]), json!([["p", 1]]), json!([[null]])] {
            let result = EventAttributes::from_json(&json!({
                "kind": 1, "content": "x", "tags": bad
            }));
            assert!(
                matches!(result, Err(ValidationError::InvalidTags(_))),
                "{:?}",
                result
            );
        }
    }

    #[test]
    fn test_rejects_bad_content() {
        assert!(matches!(
            EventAttributes::from_json(&json!({"kind": 1, "content": 5})),
            Err(ValidationError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_into_fragment_stamps_time() {
        let fragment = EventAttributes::text_note("x").into_fragment(PublicKey::from_bytes([1; 32]));
        assert!(fragment.created_at() > 0);

        let fixed = EventAttributes::text_note("x")
            .created_at(7)
            .into_fragment(PublicKey::from_bytes([1; 32]));
        assert_eq!(fixed.created_at(), 7);
    }
}
