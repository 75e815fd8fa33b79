//! Key generation.

use crate::crypto::{Keypair, SecretKey};

/// Source of fresh keypairs for identities that were not given one.
pub trait KeyGenerator {
    fn generate_keypair(&self) -> Keypair;
}

/// Draws secret keys from the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomKeyGenerator;

impl KeyGenerator for RandomKeyGenerator {
    fn generate_keypair(&self) -> Keypair {
        // Rejection-samples until the bytes form a valid scalar.
        let secret = secp256k1::SecretKey::new(&mut rand::thread_rng());
        Keypair::from_secret_key(&SecretKey::from_inner(secret))
    }
}
