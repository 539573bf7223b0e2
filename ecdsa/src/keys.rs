//! Signing and verifying keys for the ECDSA signature scheme.

use curve::{CurveParams, Point, mod_inverse, random_scalar};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::EcdsaError;
use crate::signatures::{Signature, hash_message};

/// A secret signing key: a scalar in `[1, n-1]`.
///
/// The scalar is the sole source of signing authority and must be kept
/// secret. It is only ever combined with the caller-supplied domain
/// parameters, so one key value is meaningful for exactly one curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key: a point on the curve, derived from a signing
/// key as `d·G`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Point,
}

impl SigningKey {
    /// Generate a signing key with a uniform scalar in `[1, n-1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::CurveParams;
    /// use ecdsa::SigningKey;
    ///
    /// let params = CurveParams::secp256r1();
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng, &params);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &CurveParams) -> Self {
        Self {
            scalar: random_scalar(rng, params.n()),
        }
    }

    /// Build a signing key from an existing scalar, rejecting values
    /// outside `[1, n-1]`.
    pub fn from_scalar(scalar: BigUint, params: &CurveParams) -> Result<Self, EcdsaError> {
        if scalar.is_zero() || scalar >= *params.n() {
            return Err(EcdsaError::InvalidScalar);
        }
        Ok(Self { scalar })
    }

    /// Derive the public verifying key `d·G`.
    pub fn verifying_key(&self, params: &CurveParams) -> VerifyingKey {
        VerifyingKey {
            point: params.generator().mul(&self.scalar, params),
        }
    }

    /// Sign a message, digesting it with SHA-256.
    ///
    /// The nonce is drawn fresh from `rng` on every call; two signatures
    /// over the same message are different with overwhelming probability,
    /// and must be, since a repeated nonce reveals the signing key.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::CurveParams;
    /// use ecdsa::SigningKey;
    ///
    /// let params = CurveParams::secp256r1();
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng, &params);
    /// let signature = signing_key.sign(&mut rng, b"important message", &params);
    /// ```
    pub fn sign<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        params: &CurveParams,
    ) -> Signature {
        self.sign_digest(rng, &hash_message(msg), params)
    }

    /// Sign a precomputed digest integer.
    ///
    /// `z` must come from the same digest-to-integer mapping the verifier
    /// uses (see [`digest_message`](crate::digest_message)).
    ///
    /// Degenerate nonces (`k·G` at infinity, `r = 0`, or `s = 0`) are
    /// handled by drawing a fresh nonce and retrying. Their probability is
    /// negligible for a correctly sized group, but each one would produce
    /// an unverifiable or key-leaking signature, so the loop stays.
    pub fn sign_digest<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        z: &BigUint,
        params: &CurveParams,
    ) -> Signature {
        let n = params.n();
        loop {
            let k = random_scalar(rng, n);

            // R = k·G; an infinity result means this k is unusable.
            let Point::Affine { x, .. } = params.generator().mul(&k, params) else {
                continue;
            };
            let r = x % n;
            if r.is_zero() {
                continue;
            }

            // s = k⁻¹ · (z + d·r) mod n
            let s = (mod_inverse(&k, n) * (z + &self.scalar * &r)) % n;
            if s.is_zero() {
                continue;
            }

            return Signature { r, s };
        }
    }
}

impl VerifyingKey {
    /// Build a verifying key from an untrusted point.
    ///
    /// Rejects the point at infinity and anything that fails the curve
    /// equation, so a key that comes from the wire cannot smuggle an
    /// off-curve point into the verification arithmetic.
    pub fn from_point(point: Point, params: &CurveParams) -> Result<Self, EcdsaError> {
        if point.is_infinity() || !point.is_on_curve(params) {
            return Err(EcdsaError::InvalidPoint);
        }
        Ok(Self { point })
    }

    /// The public curve point.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Verify a signature over a message, digesting it with SHA-256.
    ///
    /// Returns `Ok(false)` for any signature that does not match,
    /// including malformed components outside `[1, n-1]`; `Err` is
    /// reserved for a key point that is no valid curve point at all.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::CurveParams;
    /// use ecdsa::SigningKey;
    ///
    /// let params = CurveParams::secp256r1();
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng, &params);
    /// let verifying_key = signing_key.verifying_key(&params);
    ///
    /// let signature = signing_key.sign(&mut rng, b"important message", &params);
    /// let valid = verifying_key
    ///     .verify(b"important message", &signature, &params)
    ///     .expect("verification failed");
    /// assert!(valid);
    /// ```
    pub fn verify(
        &self,
        msg: &[u8],
        sig: &Signature,
        params: &CurveParams,
    ) -> Result<bool, EcdsaError> {
        self.verify_digest(&hash_message(msg), sig, params)
    }

    /// Verify a signature over a precomputed digest integer.
    ///
    /// The checks, in order:
    /// 1. the key point must not be the identity,
    /// 2. `r` and `s` must lie in `[1, n-1]`, otherwise `Ok(false)`,
    /// 3. `R = (z·s⁻¹)·G + (r·s⁻¹)·Q` must be an affine point whose
    ///    x-coordinate reduces to `r` mod `n`.
    pub fn verify_digest(
        &self,
        z: &BigUint,
        sig: &Signature,
        params: &CurveParams,
    ) -> Result<bool, EcdsaError> {
        if self.point.is_infinity() {
            return Err(EcdsaError::InvalidPoint);
        }

        let n = params.n();
        if sig.r.is_zero() || sig.r >= *n || sig.s.is_zero() || sig.s >= *n {
            return Ok(false);
        }

        // u1 = z·s⁻¹, u2 = r·s⁻¹ (mod n)
        let w = mod_inverse(&sig.s, n);
        let u1 = (z * &w) % n;
        let u2 = (&sig.r * &w) % n;

        // R = u1·G + u2·Q
        let u1_g = params.generator().mul(&u1, params);
        let u2_q = self.point.mul(&u2, params);
        match u1_g.add(&u2_q, params) {
            Point::Infinity => Ok(false),
            Point::Affine { x, .. } => Ok(x % n == sig.r),
        }
    }
}
