//! Curve domain parameters.
//!
//! A [`CurveParams`] value fixes the prime field, the curve coefficients,
//! the base point, and the subgroup order. It is immutable once built and
//! is passed explicitly to every point operation, so several parameter sets
//! can coexist in one process.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::affine::Point;
use crate::modular::is_probable_prime;

/// Errors raised when validating untrusted domain parameters.
///
/// Every variant is fatal at configuration time; there is nothing to retry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The field modulus is even, too small, or fails the primality test.
    CompositeModulus,
    /// A curve coefficient is not a canonical residue modulo `p`.
    CoefficientOutOfRange,
    /// `4a^3 + 27b^2 ≡ 0 (mod p)`: the equation describes a singular curve
    /// with no usable group law.
    SingularCurve,
    /// The base point is the point at infinity or fails the curve equation.
    BasePointOffCurve,
    /// The claimed order is not prime, or `n·G` is not the identity.
    WrongOrder,
}

/// Domain parameters of a short-Weierstrass curve `y^2 = x^3 + a·x + b`
/// over the prime field `GF(p)`, with base point `G` of prime order `n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    pub(crate) p: BigUint,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) g: Point,
    pub(crate) n: BigUint,
}

impl CurveParams {
    /// Validate and assemble a parameter set from untrusted inputs.
    ///
    /// Checks that `p` is an odd probable prime above 3, that the
    /// coefficients are canonical residues, that the curve is non-singular,
    /// that `G` is an affine point satisfying the curve equation, and that
    /// `n` is a probable prime with `n·G` equal to the identity.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: Point,
        n: BigUint,
    ) -> Result<Self, ParamError> {
        let params = CurveParams { p, a, b, g, n };

        if params.p.bits() < 3 || !params.p.bit(0) || !is_probable_prime(&params.p) {
            return Err(ParamError::CompositeModulus);
        }
        if params.a >= params.p || params.b >= params.p {
            return Err(ParamError::CoefficientOutOfRange);
        }

        // Discriminant condition: 4a^3 + 27b^2 must not vanish mod p.
        let a3 = params.a.modpow(&BigUint::from(3u32), &params.p);
        let b2 = params.b.modpow(&BigUint::from(2u32), &params.p);
        let disc = (a3 * 4u32 + b2 * 27u32) % &params.p;
        if disc.is_zero() {
            return Err(ParamError::SingularCurve);
        }

        if params.g.is_infinity() || !params.g.is_on_curve(&params) {
            return Err(ParamError::BasePointOffCurve);
        }
        if !is_probable_prime(&params.n) || !params.g.mul(&params.n, &params).is_infinity() {
            return Err(ParamError::WrongOrder);
        }

        Ok(params)
    }

    /// The SECP256R1 (NIST P-256) parameter set.
    ///
    /// `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`, `a = p - 3`.
    pub fn secp256r1() -> Self {
        CurveParams {
            p: hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
            a: hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
            b: hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
            g: Point::affine(
                hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
                hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
            ),
            n: hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        }
    }

    /// Field modulus `p`.
    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` of the curve equation.
    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    #[inline]
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Order `n` of the subgroup generated by `G`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

fn hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("valid hex constant")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    /// y^2 = x^3 + 2x + 2 over GF(17), generated by (5, 1) with order 19.
    fn tiny() -> CurveParams {
        CurveParams::new(
            big(17),
            big(2),
            big(2),
            Point::affine(big(5), big(1)),
            big(19),
        )
        .expect("valid test curve")
    }

    #[test]
    fn test_secp256r1_passes_validation() {
        let p = CurveParams::secp256r1();
        let revalidated = CurveParams::new(
            p.p().clone(),
            p.a().clone(),
            p.b().clone(),
            p.generator().clone(),
            p.n().clone(),
        );
        assert_eq!(revalidated, Ok(p));
    }

    #[test]
    fn test_tiny_curve_passes_validation() {
        let params = tiny();
        assert_eq!(params.n(), &big(19));
    }

    #[test]
    fn test_even_modulus_rejected() {
        let result = CurveParams::new(
            big(16),
            big(2),
            big(2),
            Point::affine(big(5), big(1)),
            big(19),
        );
        assert_eq!(result, Err(ParamError::CompositeModulus));
    }

    #[test]
    fn test_coefficient_out_of_range_rejected() {
        let result = CurveParams::new(
            big(17),
            big(19),
            big(2),
            Point::affine(big(5), big(1)),
            big(19),
        );
        assert_eq!(result, Err(ParamError::CoefficientOutOfRange));
    }

    #[test]
    fn test_singular_curve_rejected() {
        // a = b = 0 gives a vanishing discriminant.
        let result = CurveParams::new(
            big(17),
            big(0),
            big(0),
            Point::affine(big(5), big(1)),
            big(19),
        );
        assert_eq!(result, Err(ParamError::SingularCurve));
    }

    #[test]
    fn test_base_point_off_curve_rejected() {
        let result = CurveParams::new(
            big(17),
            big(2),
            big(2),
            Point::affine(big(5), big(2)),
            big(19),
        );
        assert_eq!(result, Err(ParamError::BasePointOffCurve));

        let result = CurveParams::new(big(17), big(2), big(2), Point::Infinity, big(19));
        assert_eq!(result, Err(ParamError::BasePointOffCurve));
    }

    #[test]
    fn test_wrong_order_rejected() {
        let result = CurveParams::new(
            big(17),
            big(2),
            big(2),
            Point::affine(big(5), big(1)),
            big(13),
        );
        assert_eq!(result, Err(ParamError::WrongOrder));
    }
}
