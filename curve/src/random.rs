//! Uniform scalar sampling.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

/// Draw a uniform scalar in `[1, n-1]` by rejection sampling.
///
/// Samples exactly enough bytes to cover `n`, masks the bits above `n`'s
/// bit length so at least half of all draws land in range, and retries on
/// zero or out-of-range values. The generator is caller-supplied; signing
/// security rests on it being cryptographically secure.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R, n: &BigUint) -> BigUint {
    let bits = n.bits();
    assert!(bits >= 2, "scalar range [1, n-1] is empty");

    let len = ((bits + 7) / 8) as usize;
    let mask = 0xffu8 >> (len as u64 * 8 - bits);
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && candidate < *n {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scalars_stay_in_range() {
        // A 5-bit modulus forces the rejection path to actually run.
        let mut rng = StdRng::seed_from_u64(42);
        let n = BigUint::from(19u32);
        for _ in 0..500 {
            let k = random_scalar(&mut rng, &n);
            assert!(!k.is_zero());
            assert!(k < n);
        }
    }

    #[test]
    fn test_small_range_is_covered() {
        // n = 3 leaves only {1, 2}; both must show up.
        let mut rng = StdRng::seed_from_u64(7);
        let n = BigUint::from(3u32);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let k = random_scalar(&mut rng, &n);
            seen[u32::try_from(&k).expect("fits in u32") as usize] = true;
        }
        assert!(seen[1] && seen[2]);
    }

    #[test]
    fn test_full_width_modulus() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = BigUint::parse_bytes(
            b"ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
            16,
        )
        .expect("valid hex");
        let k = random_scalar(&mut rng, &n);
        assert!(!k.is_zero());
        assert!(k < n);
    }
}
