//! Unified error types for key parsing and encoding

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("key out of range: scalar must lie in [1, n-1]")]
    InvalidKeyRange,

    #[error("invalid base58 character: {0:?}")]
    InvalidBase58(char),

    #[error("invalid base58check checksum")]
    BadChecksum,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeyError>;
