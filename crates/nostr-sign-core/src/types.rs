//! Strong type definitions for nostr-sign.
//!
//! All identifiers are newtypes to prevent misuse at compile time. On the
//! wire they are lowercase hex strings.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::FormatError;

/// Decode a hex string into exactly `N` bytes.
pub(crate) fn decode_hex_array<const N: usize>(
    field: &'static str,
    s: &str,
) -> Result<[u8; N], FormatError> {
    let bytes = hex::decode(s).map_err(|e| FormatError::hex(field, e))?;
    to_array(field, &bytes)
}

/// Copy a slice into an array of exactly `N` bytes.
pub(crate) fn to_array<const N: usize>(
    field: &'static str,
    bytes: &[u8],
) -> Result<[u8; N], FormatError> {
    bytes.try_into().map_err(|_| FormatError::InvalidLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

/// Implements serde for a byte newtype as a lowercase hex string.
macro_rules! impl_hex_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty>::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use impl_hex_serde;

/// A 32-byte event identifier: SHA-256 of the fragment's canonical serialization.
///
/// This is the content-address of an event. Two fragments with the same
/// content have the same EventId.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub [u8; 32]);

impl EventId {
    /// Create a new EventId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        decode_hex_array("id", s).map(Self)
    }
}

impl_hex_serde!(EventId);

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for EventId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for EventId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for EventId {
    type Error = FormatError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        to_array("id", slice).map(Self)
    }
}

/// Unix timestamps in seconds.
pub struct Timestamp;

impl Timestamp {
    /// Current Unix time in seconds.
    ///
    /// A clock set before the epoch yields 0.
    pub fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_hex_roundtrip() {
        let id = EventId::from_bytes([0x42; 32]);
        let hex = id.to_hex();
        let recovered = EventId::from_hex(&hex).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_event_id_display() {
        let id = EventId::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", id), "abababababababab");
        assert!(format!("{:?}", id).starts_with("EventId("));
    }

    #[test]
    fn test_event_id_rejects_wrong_length() {
        let err = EventId::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidLength {
                field: "id",
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn test_event_id_rejects_non_hex() {
        let s = "zz".repeat(32);
        assert!(matches!(
            EventId::from_hex(&s),
            Err(FormatError::InvalidHex { field: "id", .. })
        ));
    }

    #[test]
    fn test_event_id_serde_is_hex_string() {
        let id = EventId::from_bytes([0x01; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_timestamp_now_is_after_2023() {
        assert!(Timestamp::now() > 1_672_531_200);
    }
}
