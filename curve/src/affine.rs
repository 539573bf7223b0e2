//! Affine curve points and the group law.
//!
//! A point is either the point at infinity (the group identity) or an
//! affine coordinate pair. Every degenerate slope in the chord-and-tangent
//! formulas (vertical chord, vertical tangent) is matched explicitly and
//! mapped to the identity, so the division below never sees a zero
//! denominator.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::modular;
use crate::params::CurveParams;

/// A point on a short-Weierstrass curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Point {
    /// The point at infinity (identity element).
    Infinity,
    /// An affine point with `x, y` in `[0, p-1]`.
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// Wrap a coordinate pair.
    ///
    /// No curve membership check happens here; callers holding untrusted
    /// coordinates validate with [`Point::is_on_curve`] before use.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Check the curve equation `y^2 = x^3 + a·x + b (mod p)`.
    ///
    /// The point at infinity is on every curve; an affine point must have
    /// canonical coordinates and satisfy the equation.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        let Point::Affine { x, y } = self else {
            return true;
        };
        if x >= &params.p || y >= &params.p {
            return false;
        }
        let lhs = y.modpow(&BigUint::from(2u32), &params.p);
        let x3 = x.modpow(&BigUint::from(3u32), &params.p);
        let rhs = (x3 + &params.a * x + &params.b) % &params.p;
        lhs == rhs
    }

    /// The inverse point `(x, -y mod p)`.
    pub fn negate(&self, params: &CurveParams) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (&params.p - y) % &params.p,
            },
        }
    }

    /// Point addition.
    pub fn add(&self, other: &Point, params: &CurveParams) -> Self {
        let (x1, y1) = match self {
            Point::Infinity => return other.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Infinity => return self.clone(),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            return if y1 == y2 {
                self.double(params)
            } else {
                // Q = -P: the chord is vertical.
                Point::Infinity
            };
        }

        let p = &params.p;
        // λ = (y2 - y1) / (x2 - x1)
        let s = slope(int(y2) - int(y1), int(x2) - int(x1), p);
        let si = int(&s);
        // x' = λ^2 - x1 - x2
        let xr = modular::normalize(&(&si * &si - int(x1) - int(x2)), p);
        // y' = λ(x1 - x') - y1
        let yr = modular::normalize(&(si * (int(x1) - int(&xr)) - int(y1)), p);
        Point::Affine { x: xr, y: yr }
    }

    /// Point doubling.
    pub fn double(&self, params: &CurveParams) -> Self {
        let Point::Affine { x, y } = self else {
            return Point::Infinity;
        };
        // y = 0 is a point of order two; the tangent is vertical.
        if y.is_zero() {
            return Point::Infinity;
        }

        let p = &params.p;
        let xi = int(x);
        let yi = int(y);
        // λ = (3x^2 + a) / (2y)
        let s = slope((&xi * &xi) * 3u32 + int(&params.a), &yi + &yi, p);
        let si = int(&s);
        // x' = λ^2 - 2x
        let xr = modular::normalize(&(&si * &si - &xi - &xi), p);
        // y' = λ(x - x') - y
        let yr = modular::normalize(&(si * (xi - int(&xr)) - yi), p);
        Point::Affine { x: xr, y: yr }
    }

    /// Scalar multiplication `k·P` by double-and-add.
    ///
    /// Scans `k` from the least significant bit, accumulating the running
    /// addend on set bits; `k = 0` yields the identity. Takes `O(log k)`
    /// point operations, with an input-dependent sequence of them.
    pub fn mul(&self, k: &BigUint, params: &CurveParams) -> Self {
        let mut result = Point::Infinity;
        let mut addend = self.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&addend, params);
            }
            addend = addend.double(params);
        }
        result
    }
}

fn int(u: &BigUint) -> BigInt {
    BigInt::from(u.clone())
}

/// Slope `num / den (mod p)` of a chord or tangent. Callers guarantee the
/// denominator is a nonzero residue.
fn slope(num: BigInt, den: BigInt, p: &BigUint) -> BigUint {
    let den = modular::normalize(&den, p);
    let inv = modular::mod_inverse(&den, p);
    modular::normalize(&(num * int(&inv)), p)
}
