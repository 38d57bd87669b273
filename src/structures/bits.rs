//! Fixed-width bit vectors over `u64` limbs.
//!
//! Bit `i` lives in limb `i / 64` at position `i % 64`, so bit 0 is the
//! coefficient of x^0. Field elements use three limbs; unreduced products use
//! six.

/// A little-endian vector of `L * 64` bits.
///
/// Indices at or past [`BitVector::BITS`] read as zero and are ignored by the
/// mutating operations, so callers can shift freely without bounds checks.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BitVector<const L: usize> {
    limbs: [u64; L],
}

impl<const L: usize> BitVector<L> {
    /// All bits clear.
    pub const ZERO: Self = Self { limbs: [0; L] };

    /// Capacity in bits.
    pub const BITS: usize = L * 64;

    #[inline]
    pub const fn from_limbs(limbs: [u64; L]) -> Self {
        Self { limbs }
    }

    #[inline]
    pub const fn limbs(&self) -> &[u64; L] {
        &self.limbs
    }

    /// Coefficient of x^i.
    #[inline]
    pub const fn test(&self, i: usize) -> bool {
        if i >= Self::BITS {
            return false;
        }
        (self.limbs[i / 64] >> (i % 64)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, i: usize) {
        if i < Self::BITS {
            self.limbs[i / 64] |= 1u64 << (i % 64);
        }
    }

    /// Toggle bit `i`. This is GF(2) addition of x^i.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        if i < Self::BITS {
            self.limbs[i / 64] ^= 1u64 << (i % 64);
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Number of bits up to and including the highest set bit (0 for zero).
    pub fn bit_len(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            if limb != 0 {
                return i * 64 + (64 - limb.leading_zeros() as usize);
            }
        }
        0
    }

    #[inline]
    pub fn xor(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.xor_assign(rhs);
        out
    }

    #[inline]
    pub fn xor_assign(&mut self, rhs: &Self) {
        for (a, b) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *a ^= b;
        }
    }

    /// `self ^= src << shift`, dropping bits shifted past the end.
    ///
    /// `src` may be narrower than `self`; this is how a 173-bit operand is
    /// accumulated into a 345-bit product.
    pub fn xor_shifted<const S: usize>(&mut self, src: &BitVector<S>, shift: usize) {
        let word = shift / 64;
        let bit = shift % 64;
        for (k, &v) in src.limbs.iter().enumerate() {
            if v == 0 {
                continue;
            }
            let lo = k + word;
            if lo >= L {
                break;
            }
            self.limbs[lo] ^= v << bit;
            if bit != 0 && lo + 1 < L {
                self.limbs[lo + 1] ^= v >> (64 - bit);
            }
        }
    }

    /// Copy the low `N * 64` bits into a narrower vector.
    pub fn low<const N: usize>(&self) -> BitVector<N> {
        let mut limbs = [0u64; N];
        for (dst, src) in limbs.iter_mut().zip(self.limbs.iter()) {
            *dst = *src;
        }
        BitVector { limbs }
    }
}

impl<const L: usize> Default for BitVector<L> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const L: usize> core::fmt::Debug for BitVector<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitVector<{}>(", L)?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}
