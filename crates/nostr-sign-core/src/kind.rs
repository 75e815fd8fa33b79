//! Event kinds that clients emit.
//!
//! Events carry their kind as a plain `u64`. This registry documents the
//! kinds whose semantics are known; any other value is opaque data and is
//! never rejected.

use std::fmt;

/// The known event kinds, determining how `content` and `tags` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventKind {
    /// `content` is a stringified JSON object `{name, about, picture}`
    /// describing the author. A relay may drop older metadata events once it
    /// gets a newer one for the same pubkey.
    SetMetadata = 0,
    /// `content` is the plaintext of a note.
    TextNote = 1,
    /// `content` is the URL of a relay (e.g. `wss://somerelay.com`) the author
    /// recommends to followers.
    RecommendServer = 2,
    /// A list of `p` tags, one per followed profile.
    ContactList = 3,
}

impl EventKind {
    /// All known kinds, in numeric order.
    pub const ALL: [EventKind; 4] = [
        EventKind::SetMetadata,
        EventKind::TextNote,
        EventKind::RecommendServer,
        EventKind::ContactList,
    ];

    /// The integer carried on events.
    pub const fn as_u64(self) -> u64 {
        self as u64
    }

    /// Look up a known kind. Unknown values return `None`.
    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::SetMetadata),
            1 => Some(Self::TextNote),
            2 => Some(Self::RecommendServer),
            3 => Some(Self::ContactList),
            _ => None,
        }
    }

    /// Snake-case protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SetMetadata => "set_metadata",
            Self::TextNote => "text_note",
            Self::RecommendServer => "recommend_server",
            Self::ContactList => "contact_list",
        }
    }
}

impl From<EventKind> for u64 {
    fn from(kind: EventKind) -> Self {
        kind.as_u64()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_roundtrip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_u64(kind.as_u64()), Some(kind));
        }
    }

    #[test]
    fn test_event_kind_values() {
        assert_eq!(u64::from(EventKind::SetMetadata), 0);
        assert_eq!(u64::from(EventKind::TextNote), 1);
        assert_eq!(u64::from(EventKind::RecommendServer), 2);
        assert_eq!(u64::from(EventKind::ContactList), 3);
    }

    #[test]
    fn test_unknown_kind_is_not_an_error() {
        assert_eq!(EventKind::from_u64(4), None);
        assert_eq!(EventKind::from_u64(30023), None);
        assert_eq!(EventKind::from_u64(65536), None);
        assert_eq!(EventKind::from_u64(u64::MAX), None);
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::ContactList.to_string(), "contact_list");
        assert_eq!(EventKind::SetMetadata.name(), "set_metadata");
    }
}
