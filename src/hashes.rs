//! SHA-256, double SHA-256 and HASH160 primitives
//! Thin wrappers over the sha2/ripemd crates; Bitcoin chains them
//! (HASH160 = RIPEMD160(SHA256(x)), checksums use SHA256(SHA256(x))).

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Double SHA-256 (used for Base58Check checksums)
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// HASH160: RIPEMD-160 of the SHA-256 of the input
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    hasher.finalize().into()
}
