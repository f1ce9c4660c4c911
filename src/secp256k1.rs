//! secp256k1 curve parameters and point derivation.
//!
//! Scalar multiplication is delegated to the `k256` crate; only the
//! SEC1 compression of the resulting point lives here.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use num_bigint::BigInt;
use std::sync::LazyLock;

/// Order n of the secp256k1 base point G
pub static GROUP_ORDER: LazyLock<BigInt> = LazyLock::new(|| {
    BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap()
});

/// Multiply the base point by `scalar` and compress the result.
///
/// Byte 0 is `0x02` when the y coordinate is even and `0x03` when odd;
/// bytes 1..33 are the 32-byte big-endian x coordinate.
///
/// The scalar must already be validated to [1, n-1]; a rejection by
/// k256 at this point means that invariant was broken upstream.
pub fn derive_compressed(scalar: &[u8; 32]) -> [u8; 33] {
    let secret = SecretKey::from_slice(scalar).expect("scalar validated to [1, n-1]");
    let point = secret.public_key().to_encoded_point(false);
    let bytes = point.as_bytes();
    let (x, y) = (&bytes[1..33], &bytes[33..65]);

    let mut sec = [0u8; 33];
    sec[0] = if y[31] & 1 == 0 { 0x02 } else { 0x03 };
    sec[1..].copy_from_slice(x);
    sec
}
