//! Base58 and Base58Check encoding/decoding
//!
//! The encoder treats the input as one big-endian integer and divides
//! by 58 until exhausted; leading zero bytes map to leading '1's.

use crate::error::{KeyError, Result};
use crate::hashes::hash256;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const CHECKSUM_LEN: usize = 4;

fn alphabet_inv(c: u8) -> Option<u8> {
    ALPHABET.iter().position(|&x| x == c).map(|i| i as u8)
}

/// Base58 encode arbitrary bytes
pub fn b58encode(bytes: &[u8]) -> String {
    let mut n = BigInt::from_bytes_be(num_bigint::Sign::Plus, bytes);
    let mut chars = Vec::new();
    let fifty_eight = BigInt::from(58);

    while n > BigInt::zero() {
        let (quotient, remainder) = n.div_rem(&fifty_eight);
        let (_, rem_bytes) = remainder.to_bytes_be();
        let idx = if rem_bytes.is_empty() {
            0
        } else {
            rem_bytes[0] as usize
        };
        chars.push(ALPHABET[idx]);
        n = quotient;
    }

    // One '1' per leading zero byte
    let num_leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    for _ in 0..num_leading_zeros {
        chars.push(ALPHABET[0]);
    }

    chars.reverse();
    String::from_utf8(chars).unwrap()
}

/// Base58 decode to bytes
pub fn b58decode(s: &str) -> Result<Vec<u8>> {
    let mut n = BigInt::zero();
    let fifty_eight = BigInt::from(58);

    for c in s.bytes() {
        let val = alphabet_inv(c).ok_or(KeyError::InvalidBase58(c as char))?;
        n = n * &fifty_eight + BigInt::from(val);
    }

    // One zero byte per leading '1'
    let num_leading_ones = s.bytes().take_while(|&c| c == b'1').count();
    let mut result = vec![0u8; num_leading_ones];

    if !n.is_zero() {
        let (_, bytes) = n.to_bytes_be();
        result.extend(bytes);
    }

    Ok(result)
}

/// Base58Check encode: version byte, payload, 4-byte double-SHA-256 checksum
pub fn b58check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = hash256(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    b58encode(&data)
}

/// Base58Check decode: verify the checksum, return (version, payload)
pub fn b58check_decode(s: &str) -> Result<(u8, Vec<u8>)> {
    let bytes = b58decode(s)?;
    if bytes.len() < 1 + CHECKSUM_LEN {
        return Err(KeyError::BadChecksum);
    }

    let (data, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if hash256(data)[..CHECKSUM_LEN] != *checksum {
        return Err(KeyError::BadChecksum);
    }

    Ok((data[0], data[1..].to_vec()))
}
