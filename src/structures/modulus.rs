//! The field definition: extension degree and reduction polynomial.

use super::bits::BitVector;

/// Extension degree: elements are polynomials of degree < `M`.
pub const M: usize = 173;

/// Limbs holding one reduced element.
pub const LIMBS: usize = 3;

/// Limbs holding an unreduced product of degree <= 2M - 2.
pub const WIDE_LIMBS: usize = 6;

/// Width of an unreduced product.
pub const WIDE_BITS: usize = 2 * M - 1;

/// Exponents of the non-zero terms of f(x) = x^173 + x^10 + x^2 + x + 1,
/// highest first.
pub const REDUCTION_EXPONENTS: [usize; 5] = [M, 10, 2, 1, 0];

/// A reduced element.
pub type Narrow = BitVector<LIMBS>;

/// An unreduced polynomial product.
pub type Wide = BitVector<WIDE_LIMBS>;

/// f(x) as a bit pattern.
const REDUCTION_POLYNOMIAL: Wide = reduction_polynomial();

const fn reduction_polynomial() -> Wide {
    let mut limbs = [0u64; WIDE_LIMBS];
    let mut k = 0;
    while k < REDUCTION_EXPONENTS.len() {
        let e = REDUCTION_EXPONENTS[k];
        limbs[e / 64] |= 1u64 << (e % 64);
        k += 1;
    }
    BitVector::from_limbs(limbs)
}

/// Reduce a polynomial of degree <= 2M - 2 modulo f(x).
///
/// Walks positions 2M - 2 down to M; wherever the coefficient is set, adds
/// `f(x) * x^(i - M)`, which clears bit `i` and leaves the residue class
/// unchanged. Bits at or above `WIDE_BITS` must be clear on entry.
pub fn reduce(poly: &Wide) -> Narrow {
    debug_assert!(poly.bit_len() <= WIDE_BITS, "product wider than 2M - 1 bits");

    let mut work = *poly;
    for i in (M..WIDE_BITS).rev() {
        if work.test(i) {
            work.xor_shifted(&REDUCTION_POLYNOMIAL, i - M);
        }
    }

    debug_assert!(work.bit_len() <= M, "reduction left bits above x^172");
    work.low()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_pattern() {
        let f = REDUCTION_POLYNOMIAL;
        assert_eq!(f.bit_len(), M + 1);
        for i in 0..WIDE_BITS {
            assert_eq!(f.test(i), REDUCTION_EXPONENTS.contains(&i), "bit {}", i);
        }
    }

    #[test]
    fn reduce_is_identity_below_m() {
        let poly = Wide::from_limbs([0xdead_beef, 0xcafe_babe, (1 << 44) | 7, 0, 0, 0]);
        let r = reduce(&poly);
        assert_eq!(r.limbs(), &[0xdead_beef, 0xcafe_babe, (1 << 44) | 7]);
    }

    #[test]
    fn reduce_x_to_the_m() {
        // x^173 ≡ x^10 + x^2 + x + 1
        let mut poly = Wide::ZERO;
        poly.set(M);
        let r = reduce(&poly);
        assert_eq!(r.limbs(), &[(1 << 10) | 0b111, 0, 0]);
    }

    #[test]
    fn reduce_f_is_zero() {
        assert!(reduce(&REDUCTION_POLYNOMIAL).is_zero());
    }

    #[test]
    fn reduce_shifted_f_is_zero() {
        // x^k * f(x) ≡ 0 for every shift that stays within the product width.
        for k in 0..(WIDE_BITS - M) {
            let mut poly = Wide::ZERO;
            poly.xor_shifted(&REDUCTION_POLYNOMIAL, k);
            assert!(reduce(&poly).is_zero(), "shift {}", k);
        }
    }

    #[test]
    fn reduce_matches_termwise_flips() {
        // Reference: subtract f(x) * x^(i - M) one term at a time.
        let poly = Wide::from_limbs([
            0x0123_4567_89ab_cdef,
            0xfedc_ba98_7654_3210,
            0xdead_beef_cafe_babe,
            0x0f0f_0f0f_f0f0_f0f0,
            0x1357_9bdf_2468_ace0,
            0x0001_ffff_ffff_ffff,
        ]);
        let mut slow = poly;
        for i in (M..WIDE_BITS).rev() {
            if slow.test(i) {
                for &e in REDUCTION_EXPONENTS.iter() {
                    slow.flip(e + i - M);
                }
            }
        }
        assert!(slow.bit_len() <= M);
        assert_eq!(reduce(&poly), slow.low());
    }

    #[test]
    fn reduce_top_bit() {
        // x^344 = x^171 * x^173 ≡ x^171 * (x^10 + x^2 + x + 1)
        //       = x^181 + x^173 + x^172 + x^171
        //       ≡ x^8 (x^10 + x^2 + x + 1) + (x^10 + x^2 + x + 1) + x^172 + x^171
        let mut poly = Wide::ZERO;
        poly.set(WIDE_BITS - 1);
        let r = reduce(&poly);

        let mut expected = Narrow::ZERO;
        for i in [18usize, 10, 9, 8, 10, 2, 1, 0, 172, 171] {
            expected.flip(i);
        }
        assert_eq!(r, expected);
    }
}
