//! Cryptographic primitives for the VGV settlement core.
//!
//! Validators only verify; key generation and signing exist for official
//! tooling and for tests. The [`SignatureVerifier`] trait is the seam the
//! processor uses, so consensus integrations can substitute batched or
//! hardware-backed verification.

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, blake2b_256_multi, hash_transaction};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature, Ed25519Verifier, SignatureVerifier};
