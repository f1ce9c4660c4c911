//! Bitcoin key identity derivation
//!
//! Turns a raw secp256k1 private key into its compressed public key,
//! WIF encoding and mainnet P2PKH address. Scalar multiplication is
//! delegated to the `k256` crate; hashing, Base58Check and the key
//! encodings live here.

pub mod base58;
pub mod error;
pub mod hashes;
pub mod keys;
pub mod secp256k1;

pub use base58::{b58check_decode, b58check_encode, b58decode, b58encode};
pub use error::{KeyError, Result};
pub use hashes::{hash160, hash256, sha256};
pub use keys::{PrivateKey, PublicKey};
