use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity ZERO
/// - (R, ·) is a commutative monoid with identity ONE
/// - multiplication distributes over addition.
///
/// In characteristic 2 subtraction coincides with addition and negation is
/// the identity map; implementors are still expected to provide the
/// operators so that generic code reads naturally.
pub trait Ring:
    Sized
    + Copy
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}
