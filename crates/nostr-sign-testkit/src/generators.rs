//! Proptest generators for property-based testing.

use proptest::prelude::*;

use nostr_sign_core::{Event, EventAttributes, EventFragment, EventKind, Keypair, PublicKey};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_filter_map("valid secret key", |bytes| {
        Keypair::from_secret_bytes(&bytes).ok()
    })
}

/// Generate a random public key.
pub fn public_key() -> impl Strategy<Value = PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a timestamp, including negative ones.
pub fn timestamp() -> impl Strategy<Value = i64> {
    prop_oneof![0i64..=4_000_000_000i64, any::<i64>()]
}

/// Generate a kind: usually a known one, sometimes anything.
pub fn kind() -> impl Strategy<Value = u64> {
    prop_oneof![
        3 => prop::sample::select(EventKind::ALL.to_vec()).prop_map(EventKind::as_u64),
        1 => any::<u16>().prop_map(u64::from),
        1 => any::<u64>(),
    ]
}

/// Generate one tag. May be empty.
pub fn tag() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any::<String>(), 0..=4)
}

/// Generate a tag list.
pub fn tags() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(tag(), 0..=5)
}

/// Generate content, covering control characters and non-ASCII.
pub fn content() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ -~]{0,64}".prop_map(String::from),
        "[\\x00-\\x1f\"\\\\\u{7f}é😀]{0,16}".prop_map(String::from),
    ]
}

/// Parameters for generating an event.
#[derive(Debug, Clone)]
pub struct EventParams {
    pub keypair: Keypair,
    pub created_at: i64,
    pub kind: u64,
    pub tags: Vec<Vec<String>>,
    pub content: String,
}

impl EventParams {
    /// The parameters as attributes, with the timestamp set.
    pub fn attributes(&self) -> EventAttributes {
        EventAttributes::new(self.kind, self.content.clone())
            .created_at(self.created_at)
            .tags(self.tags.clone())
    }
}

impl Arbitrary for EventParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (keypair(), timestamp(), kind(), tags(), content())
            .prop_map(|(keypair, created_at, kind, tags, content)| EventParams {
                keypair,
                created_at,
                kind,
                tags,
                content,
            })
            .boxed()
    }
}

/// Generate a signed event from parameters.
pub fn event_from_params(params: &EventParams) -> Event {
    EventFragment::new(
        params.keypair.public_key(),
        params.created_at,
        params.kind,
        params.tags.clone(),
        params.content.clone(),
    )
    .sign(&params.keypair)
    .expect("generated event signs")
}
