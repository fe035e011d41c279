//! Total order over derived keypairs
//!
//! Keypairs compare by unsigned lexicographic order of their 33-byte
//! compressed public key encodings. Equal encodings mean equal keys,
//! which only happens when two seeds derive the same scalar.

use std::cmp::Ordering;

use crate::keys::SeedKeypair;

impl PartialEq for SeedKeypair {
    fn eq(&self, other: &Self) -> bool {
        self.compressed() == other.compressed()
    }
}

impl Eq for SeedKeypair {}

impl PartialOrd for SeedKeypair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeedKeypair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compressed().cmp(&other.compressed())
    }
}

/// Compare two keypairs by compressed public key encoding.
pub fn compare(a: &SeedKeypair, b: &SeedKeypair) -> Ordering {
    a.cmp(b)
}

/// Return the keys stable-sorted by compressed public key encoding.
///
/// The input is left untouched; equal keys keep their relative order.
pub fn sorted_keys(keys: &[SeedKeypair]) -> Vec<SeedKeypair> {
    let mut sorted = keys.to_vec();
    sorted.sort();
    sorted
}
