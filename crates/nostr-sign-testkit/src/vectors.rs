//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical preimage, the id, and the signature, so
//! any implementation can be checked byte for byte. The expected values were
//! produced with an independent BIP-340 reference implementation.

use nostr_sign::{EventAttributes, Identity, Keypair};
use nostr_sign_core::Event;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Secret key (hex).
    pub secret_key: &'static str,
    pub created_at: i64,
    pub kind: u64,
    pub tags: &'static [&'static [&'static str]],
    pub content: &'static str,
    /// Expected x-only public key (hex).
    pub expected_pubkey: &'static str,
    /// Expected canonical serialization.
    pub expected_preimage: &'static str,
    /// Expected event id (hex).
    pub expected_id: &'static str,
    /// Expected deterministic signature (hex).
    pub expected_sig: &'static str,
}

impl GoldenVector {
    /// The vector's keypair.
    pub fn keypair(&self) -> Keypair {
        Keypair::from_secret_hex(self.secret_key).expect("golden vector secret key is valid")
    }

    /// The vector's fields as event attributes.
    pub fn attributes(&self) -> EventAttributes {
        EventAttributes::new(self.kind, self.content)
            .created_at(self.created_at)
            .tags(
                self.tags
                    .iter()
                    .map(|tag| tag.iter().map(|s| s.to_string()).collect())
                    .collect(),
            )
    }
}

const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
const KEY_TWO: &str = "0000000000000000000000000000000000000000000000000000000000000002";
const KEY_42: &str = "4242424242424242424242424242424242424242424242424242424242424242";

const PK_ONE: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const PK_TWO: &str = "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";
const PK_42: &str = "24653eac434488002cc06bbfb7f10fe18991e35f9fe4302dbea6d2353dc0ab1c";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "text note hello",
            secret_key: KEY_ONE,
            created_at: 1700000000,
            kind: 1,
            tags: &[],
            content: "hello",
            expected_pubkey: PK_ONE,
            expected_preimage: r#"[0,"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",1700000000,1,[],"hello"]"#,
            expected_id: "bde202ea7642ff9910600c7edc948a1f4220f0cbf5e4fb2b7efafa681bbb5285",
            expected_sig: "96ee7a4ebef51f83993655f363518c1676d9b0acee1473002955f0aaaeea8235\
                           01b0142575ed2c37a54c91a3f6d293b2ba279447948c83f71d4385d372be8d52",
        },
        GoldenVector {
            name: "empty tag and empty content",
            secret_key: KEY_ONE,
            created_at: 1700000000,
            kind: 1,
            tags: &[&[]],
            content: "",
            expected_pubkey: PK_ONE,
            expected_preimage: r#"[0,"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",1700000000,1,[[]],""]"#,
            expected_id: "043ee84866e7f9e9bf907589c4b116cb1d090ca80c58a0c1ba85a38856ec0ae9",
            expected_sig: "68f6e8f9ac719cedd5259a955fbb123419889c1a06523abc6fc4ac0539b54daf\
                           fb7be50a76a4e4fe6db17e302612a75c15c041c3a1455550c9bb515057f53471",
        },
        GoldenVector {
            name: "contact list",
            secret_key: KEY_TWO,
            created_at: 1672531200,
            kind: 3,
            tags: &[&["p", PK_ONE, "wss://relay.example.com", "alice"]],
            content: "",
            expected_pubkey: PK_TWO,
            expected_preimage: r#"[0,"c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",1672531200,3,[["p","79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798","wss://relay.example.com","alice"]],""]"#,
            expected_id: "2c5d00f0456955b80243ff458c41658cf07a213c728365bddde53d86a82d402d",
            expected_sig: "20d33f72a65dd238d0f9ca60e8d00cc557aec37bc47c2c0be40844f175c30bc4\
                           67a5a54d15cbb7e7728563781851bbe57e6d5fa18d35875c12698f18f5d8f145",
        },
        GoldenVector {
            name: "metadata with embedded json",
            secret_key: KEY_42,
            created_at: 1700000000,
            kind: 0,
            tags: &[],
            content: r#"{"name":"bob","about":"line\nbreak"}"#,
            expected_pubkey: PK_42,
            expected_preimage: r#"[0,"24653eac434488002cc06bbfb7f10fe18991e35f9fe4302dbea6d2353dc0ab1c",1700000000,0,[],"{\"name\":\"bob\",\"about\":\"line\\nbreak\"}"]"#,
            expected_id: "fbace6a8ece4e45e42877412e2d36714d1c3078b15716ab596b32373337065ae",
            expected_sig: "9df98e4f5b8dc38fdf155b2bb75c627e1bfbbdd6f860f40a31b72d3ff935cb7c\
                           0ec890d83aea8330cb6dbf8c0a5c9efd0ed58f95e20af0b69d2fdf543186ae71",
        },
        GoldenVector {
            name: "escapes and non-ascii",
            secret_key: KEY_42,
            created_at: 1700000001,
            kind: 1,
            tags: &[
                &["t", "nostr"],
                &[
                    "e",
                    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                ],
            ],
            content: "quote \" back\\slash é 😀 nul\u{0} tab\t",
            expected_pubkey: PK_42,
            expected_preimage: r#"[0,"24653eac434488002cc06bbfb7f10fe18991e35f9fe4302dbea6d2353dc0ab1c",1700000001,1,[["t","nostr"],["e","aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"]],"quote \" back\\slash é 😀 nul\u0000 tab\t"]"#,
            expected_id: "dc9cac2feb420c305d5f08843f9d9438a67545078a5a2389f261f06b6044f092",
            expected_sig: "b92ccf8d71e74367025206dcc5fa0fb41159009c93f8ae3f34310f30d70acbd2\
                           32c2d1d09861fcf817bda538bbb44171e2e45fbfc7d018af606d8d4f9975c0e7",
        },
    ]
}

/// Create the signed event described by a golden vector.
pub fn event_from_vector(vector: &GoldenVector) -> Event {
    Identity::new(vector.keypair())
        .create_event(vector.attributes())
        .expect("golden vector signs")
}

/// Check every golden vector against this implementation.
///
/// Returns `(name, matches, computed id hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let event = event_from_vector(v);
            let hex = event.id().to_hex();

            let matches = event.pubkey().to_hex() == v.expected_pubkey
                && event.fragment().canonical_json().ok().as_deref() == Some(v.expected_preimage)
                && hex == v.expected_id
                && event.sig().to_hex() == v.expected_sig;

            (v.name.to_string(), matches, hex)
        })
        .collect()
}
