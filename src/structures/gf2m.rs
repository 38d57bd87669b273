//! Elements of GF(2^173).
//!
//! A [`FieldElement`] is a polynomial over GF(2) of degree < 173, stored as a
//! 173-bit vector with bit `i` the coefficient of x^i. The representation is
//! canonical: no bit at or above position 173 is ever set, so two elements are
//! equal iff their bit vectors are equal.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::structures::modulus::{reduce, Narrow, Wide, LIMBS, M};

/// Mask for the meaningful bits of the top limb.
const TOP_MASK: u64 = (1u64 << (M - (LIMBS - 1) * 64)) - 1;

/// Inversion of the zero element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotInvertible;

impl fmt::Display for NotInvertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zero has no multiplicative inverse")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotInvertible {}

/// An element of GF(2^173) with reduction polynomial x^173 + x^10 + x^2 + x + 1.
///
/// Elements are plain `Copy` values; every operation returns a new element.
///
/// # Example
///
/// ```
/// use gf2m173::{FieldElement, Ring};
///
/// let a = FieldElement::from_hex_str("17182F40654A23682F00C3790B2E6714CE97F804BFB4").unwrap();
/// let expected = FieldElement::from_hex_str("0E3136CF4B0F969440A35E3403463BCA4D484F5C32A4").unwrap();
///
/// assert_eq!(a.square(), expected);
/// assert_eq!(a.square(), a * a);
/// assert_eq!(a + a, FieldElement::ZERO);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldElement {
    bits: Narrow,
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<FieldElement> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement::new([rng.gen(), rng.gen(), rng.gen()])
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = FieldElement;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a hexadecimal GF(2^173) element")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                FieldElement::from_hex_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

impl FieldElement {
    /// Create an element from little-endian limbs.
    ///
    /// Bits at or above position 173 are discarded.
    pub const fn new(limbs: [u64; LIMBS]) -> Self {
        let mut limbs = limbs;
        limbs[LIMBS - 1] &= TOP_MASK;
        Self::from_bits(Narrow::from_limbs(limbs))
    }

    /// Wrap a bit vector the caller has already confined to 173 bits.
    #[inline]
    pub(crate) const fn from_bits(bits: Narrow) -> Self {
        Self { bits }
    }

    #[inline]
    pub(crate) const fn bits(&self) -> &Narrow {
        &self.bits
    }

    /// Little-endian limbs; bits 173..192 of the top limb are always zero.
    #[inline]
    pub const fn limbs(&self) -> &[u64; LIMBS] {
        self.bits.limbs()
    }

    /// Coefficient of x^i (`false` for `i >= 173`).
    #[inline]
    pub const fn bit(&self, i: usize) -> bool {
        i < M && self.bits.test(i)
    }

    /// Degree of the polynomial, or `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        self.bits.bit_len().checked_sub(1)
    }

    /// Field product: full polynomial product followed by reduction.
    ///
    /// For every set bit `i` of `rhs`, `self * x^i` is XOR-accumulated into a
    /// 345-bit buffer. This is the bit-by-bit toggling product, one limb at
    /// a time.
    pub fn multiply(self, rhs: Self) -> Self {
        crate::tracing::trace_operation!("multiply");

        let mut product = Wide::ZERO;
        for i in 0..M {
            if rhs.bits.test(i) {
                product.xor_shifted(&self.bits, i);
            }
        }
        Self::from_bits(reduce(&product))
    }

    /// `self²` via the Frobenius map: bit `i` moves to bit `2i`, then reduce.
    pub fn square(self) -> Self {
        crate::tracing::trace_operation!("square");

        let mut spread = Wide::ZERO;
        for i in 0..M {
            if self.bits.test(i) {
                spread.set(2 * i);
            }
        }
        Self::from_bits(reduce(&spread))
    }

    /// `self^e` where the bits of `exponent` encode the integer `e`.
    ///
    /// Right-to-left square-and-multiply over all 173 exponent bits; the
    /// iteration count does not depend on the exponent's value.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2m173::{FieldElement, Ring};
    ///
    /// let a = FieldElement::from_hex_str("1E5908188E2D4E112EC2B9F5EBDBE7703651A1A520DC").unwrap();
    ///
    /// assert_eq!(a.pow(FieldElement::ZERO), FieldElement::ONE);
    /// assert_eq!(a.pow(FieldElement::ONE), a);
    /// assert_eq!(a.pow(FieldElement::from(3)), a * a * a);
    ///
    /// // 2^173 - 1 is the order of the multiplicative group.
    /// let all_ones = FieldElement::new([u64::MAX; 3]);
    /// assert_eq!(a.pow(all_ones), FieldElement::ONE);
    /// ```
    pub fn pow(self, exponent: Self) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        for i in 0..M {
            if exponent.bits.test(i) {
                result = result.multiply(base);
            }
            base = base.square();
        }
        result
    }

    /// Absolute trace Tr(a) = a + a² + a⁴ + … + a^(2^172).
    ///
    /// The sum always lands in the prime subfield {0, 1}; the result is
    /// `true` for 1.
    ///
    /// # Panics
    ///
    /// Panics if the accumulated sum has any bit above bit 0 set, which
    /// would mean the squaring or reduction code is broken.
    pub fn trace(self) -> bool {
        let mut acc = Self::ZERO;
        let mut conjugate = self;
        for _ in 0..M {
            acc += conjugate;
            conjugate = conjugate.square();
        }

        assert!(
            acc.bits.bit_len() <= 1,
            "trace of {:?} is not in GF(2): {:?}",
            self,
            acc
        );
        acc.bits.test(0)
    }

    /// Multiplicative inverse `a^(2^173 - 2)`.
    ///
    /// Accumulates `a · a² · a⁴ ⋯ a^(2^171) = a^(2^172 - 1)` with 171 squarings
    /// and multiplications, then squares once more.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] for zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2m173::{FieldElement, NotInvertible, Ring};
    ///
    /// let a = FieldElement::from_hex_str("ABCDEFABCEDFEACBDFEACABCDEFABCDEF").unwrap();
    /// let a_inv = a.inverse().unwrap();
    ///
    /// assert_eq!(a_inv.to_string(), "1E6BCB5756F3B08AAF8A1F88E415A6FBBD28F17B506D");
    /// assert_eq!(a * a_inv, FieldElement::ONE);
    /// assert_eq!(FieldElement::ZERO.inverse(), Err(NotInvertible));
    /// ```
    pub fn inverse(self) -> Result<Self, NotInvertible> {
        if self.bits.is_zero() {
            return Err(NotInvertible);
        }
        crate::tracing::trace_operation!("inverse");

        let mut result = self;
        let mut power = self;
        for _ in 0..M - 2 {
            power = power.square();
            result = result.multiply(power);
        }
        Ok(result.square())
    }

    /// The unique square root `a^(2^172)`.
    ///
    /// Squaring is a bijection in characteristic 2, so every element has
    /// exactly one square root.
    pub fn sqrt(self) -> Self {
        let mut root = self;
        for _ in 0..M - 1 {
            root = root.square();
        }
        root
    }

    /// Invert every element with one inversion plus 3(n-1) multiplications
    /// (Montgomery's trick).
    ///
    /// Requires the `alloc` feature.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if any element is zero.
    #[cfg(feature = "alloc")]
    pub fn batch_inverse(elements: &[Self]) -> Result<Vec<Self>, NotInvertible> {
        let n = elements.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        // partials[i] = elements[0] * ... * elements[i-1]
        let mut partials = Vec::with_capacity(n);
        let mut acc = Self::ONE;
        for &elem in elements {
            if elem.is_zero() {
                return Err(NotInvertible);
            }
            partials.push(acc);
            acc = acc.multiply(elem);
        }

        let mut acc_inv = acc.inverse()?;

        let mut result = vec![Self::ZERO; n];
        for i in (0..n).rev() {
            result[i] = acc_inv.multiply(partials[i]);
            acc_inv = acc_inv.multiply(elements[i]);
        }
        Ok(result)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:#X})", self)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::new([value, 0, 0])
    }
}

/* ---- arithmetic operators ---- */

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits.xor(&rhs.bits))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits.xor(&rhs.bits))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

/// Division implemented via multiplicative inverse.
impl Div for FieldElement {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse().expect("division by zero in GF(2^173)")
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.bits.xor_assign(&rhs.bits);
    }
}

impl SubAssign for FieldElement {
    #[inline]
    #[allow(clippy::suspicious_op_assign_impl)]
    fn sub_assign(&mut self, rhs: Self) {
        self.bits.xor_assign(&rhs.bits);
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

/* ---- implement Ring ---- */

impl Ring for FieldElement {
    const ZERO: Self = Self::from_bits(Narrow::ZERO);
    const ONE: Self = Self::from_bits(Narrow::from_limbs([1, 0, 0]));
}

/* ---- implement Field ---- */

impl Field for FieldElement {
    fn inverse(self) -> Option<Self> {
        FieldElement::inverse(self).ok()
    }

    fn square(self) -> Self {
        FieldElement::square(self)
    }
}
