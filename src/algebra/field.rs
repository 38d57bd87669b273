use super::ring::Ring;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`, if it exists.
    ///
    /// - `self == ZERO`  ⇒  `None`
    /// - otherwise       ⇒  `Some(a⁻¹)`
    fn inverse(self) -> Option<Self>;

    /// `self²`. Fields with a cheaper squaring map override this.
    #[inline]
    fn square(self) -> Self {
        self * self
    }

    /// Safe division: returns `None` on division by zero.
    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}
