//! Signature type and message digesting for the ECDSA scheme.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::DIGEST_SIZE;

/// An ECDSA signature consisting of two scalars.
///
/// The pair `(r, s)` binds one message digest to one signing key:
/// - `r` is the x-coordinate of the nonce point `k·G`, reduced mod `n`
/// - `s = k⁻¹ · (z + d·r) mod n`, where `z` is the digest integer and `d`
///   the signing scalar
///
/// Both components lie in `[1, n-1]`; verification rejects anything else
/// before touching the curve. A fresh signature is produced per signing
/// call, with a fresh nonce: reusing a nonce across two messages with the
/// same key leaks the key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Reduced x-coordinate of the nonce point `k·G`.
    pub r: BigUint,
    /// Response scalar binding the digest and the signing key.
    pub s: BigUint,
}

/// Digest `msg` and interpret the result as a big-endian unsigned integer.
///
/// Deterministic: identical input bytes always yield the identical
/// integer. Any [`Digest`] implementation can stand in for the hash
/// capability; the scheme's byte-level entry points instantiate it with
/// SHA-256, whose width matches the 256-bit order of the base
/// configuration.
pub fn digest_message<D: Digest>(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(D::digest(msg).as_slice())
}

/// SHA-256 digest integer, as computed by `sign` and `verify`.
pub(crate) fn hash_message(msg: &[u8]) -> BigUint {
    let digest = Sha256::digest(msg);
    debug_assert_eq!(digest.len(), DIGEST_SIZE);
    BigUint::from_bytes_be(digest.as_slice())
}
