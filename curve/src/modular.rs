//! Modular arithmetic over a prime modulus.
//!
//! All residues handed between modules are canonical (`[0, m-1]`) and held
//! in a `BigUint`; signed intermediates from the curve formulas pass through
//! [`normalize`] on their way back to canonical form.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Reduce `x` into `[0, m-1]`.
///
/// `BigInt`'s `%` truncates toward zero, so a negative operand leaves a
/// negative remainder; the result is shifted up by `m` in that case. Every
/// reduction of a subtraction in the point formulas goes through here.
pub fn normalize(x: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    let mut r = x % &m;
    if r.sign() == Sign::Minus {
        r += &m;
    }
    r.to_biguint().expect("residue is non-negative")
}

/// Compute `x⁻¹ mod m` for prime `m` via Fermat's little theorem:
/// `x^(m-2) ≡ x⁻¹ (mod m)`.
///
/// A zero residue has no inverse. The point and signature routines exclude
/// that case by explicit branching before dividing, so hitting it here is a
/// logic error rather than a recoverable condition.
pub fn mod_inverse(x: &BigUint, m: &BigUint) -> BigUint {
    let x = x % m;
    assert!(!x.is_zero(), "modular inverse of a zero residue");
    let exp = m - BigUint::from(2u32);
    x.modpow(&exp, m)
}

/// Miller-Rabin primality test with the small prime bases up to 37.
///
/// Used when validating domain parameters; the fixed bases make the test
/// deterministic for the sizes a unit test reaches and leave a negligible
/// error probability at cryptographic sizes.
pub fn is_probable_prime(m: &BigUint) -> bool {
    const BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    let two = BigUint::from(2u32);
    if m < &two {
        return false;
    }
    for &b in &BASES {
        if *m == BigUint::from(b) {
            return true;
        }
    }
    if !m.bit(0) {
        return false;
    }

    // m - 1 = d * 2^r with d odd
    let one = BigUint::one();
    let m_minus_one = m - &one;
    let r = m_minus_one.trailing_zeros().unwrap_or(0);
    let d = &m_minus_one >> r;

    'witness: for &b in &BASES {
        let a = BigUint::from(b);
        if a >= m_minus_one {
            continue;
        }
        let mut x = a.modpow(&d, m);
        if x == one || x == m_minus_one {
            continue;
        }
        for _ in 1..r {
            x = x.modpow(&two, m);
            if x == m_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
