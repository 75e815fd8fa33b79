//! # nostr-sign testkit
//!
//! Testing utilities for nostr-sign.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known events with pinned preimage, id and signature
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use nostr_sign_testkit::vectors::{all_vectors, event_from_vector};
//!
//! for vector in all_vectors() {
//!     let event = event_from_vector(&vector);
//!     assert_eq!(event.id().to_hex(), vector.expected_id);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use nostr_sign_testkit::generators::{event_from_params, EventParams};
//!
//! proptest! {
//!     #[test]
//!     fn signed_events_verify(params: EventParams) {
//!         prop_assert!(event_from_params(&params).verify());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use nostr_sign_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let event = fixture.make_text_note("hello");
//! assert!(event.verify());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{event_from_params, EventParams};
pub use vectors::{all_vectors, event_from_vector, verify_all_vectors, GoldenVector};
