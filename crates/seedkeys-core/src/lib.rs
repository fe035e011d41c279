//! SeedKeys Core
//!
//! Deterministic secp256k1 test-fixture keys.
//!
//! # Key Derivation
//!
//! Each seed string maps to a keypair by hashing its UTF-8 bytes with
//! SHA-256 and using the digest directly as the private scalar:
//! - private key = SHA-256(seed)
//! - public key = private key x G
//!
//! The same seed always yields the byte-identical keypair, so test
//! suites can build stable sets of identities without storing key
//! material.
//!
//! # Ordering
//!
//! Keypairs carry a total order over their 33-byte compressed public
//! key encodings, so a fixture set can be put into the canonical
//! sorted order that protocols like MuSig2 expect.

pub mod keys;
pub mod ordering;

pub use keys::{derive_keypair, derive_keypair_utf8, derive_keypairs, KeyError, SeedKeypair};
pub use ordering::{compare, sorted_keys};

/// Derive one keypair per seed, optionally in canonical sorted order.
///
/// With `sorted == false` the result preserves input order; with
/// `sorted == true` it is stable-sorted by compressed public key.
/// Fails as a whole on the first bad seed, never returning a partial
/// list.
pub fn fixture_keys<S: AsRef<str>>(seeds: &[S], sorted: bool) -> Result<Vec<SeedKeypair>, KeyError> {
    let mut keys = derive_keypairs(seeds)?;
    if sorted {
        keys.sort();
    }
    Ok(keys)
}
