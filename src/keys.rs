//! Private/public key types plus the WIF and P2PKH address builders

use crate::base58::b58check_encode;
use crate::error::{KeyError, Result};
use crate::hashes::hash160;
use crate::secp256k1::{derive_compressed, GROUP_ORDER};
use num_bigint::BigInt;
use num_traits::Zero;

/// Mainnet version byte for P2PKH addresses
pub const ADDRESS_VERSION: u8 = 0x00;

/// Mainnet version byte for WIF-encoded private keys
pub const WIF_VERSION: u8 = 0x80;

/// WIF suffix byte marking the compressed-pubkey convention
pub const COMPRESSED_FLAG: u8 = 0x01;

/// A validated secp256k1 private key scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: [u8; 32],
}

impl PrivateKey {
    /// Parse from raw bytes.
    ///
    /// The input must be exactly 32 bytes and its big-endian value must
    /// lie in [1, n-1] where n is the curve order; 0 and anything >= n
    /// is not a usable scalar.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() != 32 {
            return Err(KeyError::InvalidKeyLength(raw.len()));
        }

        let scalar = BigInt::from_bytes_be(num_bigint::Sign::Plus, raw);
        if scalar.is_zero() || scalar >= *GROUP_ORDER {
            return Err(KeyError::InvalidKeyRange);
        }

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(raw);
        Ok(PrivateKey { bytes })
    }

    /// Parse from a hex string (case-insensitive, 64 characters)
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s)?;
        Self::from_bytes(&raw)
    }

    /// Raw 32-byte big-endian scalar
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Derive the compressed public key for this scalar
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_private(self)
    }

    /// Encode as WIF: Base58Check(0x80, scalar || 0x01).
    ///
    /// The trailing 0x01 signals that the corresponding public key is
    /// the compressed one; without it the WIF would refer to the
    /// uncompressed key and map to a different address.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(33);
        payload.extend_from_slice(&self.bytes);
        payload.push(COMPRESSED_FLAG);
        b58check_encode(WIF_VERSION, &payload)
    }
}

/// A public key in compressed SEC1 form (33 bytes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    sec: [u8; 33],
}

impl PublicKey {
    /// Derive from a validated private key
    pub fn from_private(sk: &PrivateKey) -> Self {
        PublicKey {
            sec: derive_compressed(sk.as_bytes()),
        }
    }

    /// Compressed SEC1 bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.sec
    }

    /// 66 uppercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.sec)
    }

    /// Mainnet P2PKH address: Base58Check(0x00, HASH160(pubkey))
    pub fn address(&self) -> String {
        b58check_encode(ADDRESS_VERSION, &hash160(&self.sec))
    }
}
