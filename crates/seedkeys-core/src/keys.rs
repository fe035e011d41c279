//! Keypair derivation from seed strings
//!
//! SHA-256(seed) is the private scalar, unmodified. If the digest falls
//! outside the valid scalar range the derivation fails rather than
//! reducing modulo the curve order, so a derived key is always exactly
//! the hash of its seed.

use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("seed {0:?} does not hash to a valid secp256k1 scalar")]
    InvalidScalar(String),
    #[error("seed bytes are not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// A keypair deterministically derived from a seed string.
///
/// Immutable value type; the secret key is always SHA-256 of the seed's
/// UTF-8 bytes and the public key is always derived from it, so two
/// `SeedKeypair`s built from the same seed are byte-identical.
#[derive(Debug, Clone)]
pub struct SeedKeypair {
    seed: String,
    secret: SecretKey,
    public: PublicKey,
}

impl SeedKeypair {
    /// The seed string this keypair was derived from.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Compressed SEC1 encoding of the public key: one parity byte
    /// followed by the 32-byte big-endian x-coordinate.
    pub fn compressed(&self) -> [u8; 33] {
        self.public.serialize()
    }

    /// Relabel the seed so tests can tell otherwise-identical keypairs
    /// apart. Comparison ignores the label.
    #[cfg(test)]
    pub(crate) fn set_seed_for_test(&mut self, seed: &str) {
        self.seed = seed.to_string();
    }
}

/// Derive the keypair for a single seed.
pub fn derive_keypair(seed: &str) -> Result<SeedKeypair, KeyError> {
    let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();

    // from_slice rejects zero and >= curve order
    let secret = SecretKey::from_slice(&digest)
        .map_err(|_| KeyError::InvalidScalar(seed.to_string()))?;
    let public = PublicKey::from_secret_key(&Secp256k1::new(), &secret);

    Ok(SeedKeypair {
        seed: seed.to_string(),
        secret,
        public,
    })
}

/// Derive the keypair for a seed supplied as raw bytes.
///
/// The bytes must be valid UTF-8; anything else is reported as
/// [`KeyError::InvalidEncoding`].
pub fn derive_keypair_utf8(bytes: &[u8]) -> Result<SeedKeypair, KeyError> {
    let seed = std::str::from_utf8(bytes)
        .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;
    derive_keypair(seed)
}

/// Derive one keypair per seed, preserving input order.
///
/// Each element depends only on its own seed. All-or-nothing: the first
/// failing seed aborts the whole call.
pub fn derive_keypairs<S: AsRef<str>>(seeds: &[S]) -> Result<Vec<SeedKeypair>, KeyError> {
    seeds.iter().map(|s| derive_keypair(s.as_ref())).collect()
}
