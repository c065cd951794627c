/*
    Operations
*/

use crate::Primitive;

/// Saturating arithmetic on a [`Primitive`].
///
/// Every operation returns a representable value of the same type.
/// Whenever the mathematical result would leave the range of `Self`,
/// divide by zero, or (for floats) be NaN or infinite, a boundary
/// value is substituted instead:
///
/// | Operation | Underflow | Overflow | Division by zero |
/// |-----------|-----------|----------|------------------|
/// | add       | `MIN`     | `MAX`    | n/a              |
/// | sub       | `MIN`     | `MAX`    | n/a              |
/// | mul       | `MIN`     | `MAX`    | n/a              |
/// | div       | n/a       | `MAX`    | `MAX`            |
/// | rem       | n/a       | n/a      | `0`              |
/// | pow       | `MIN`     | `MAX`    | n/a              |
///
/// Floating-point results that are NaN become `0`, and the infinities
/// become `MAX` and `MIN`.
pub trait ClampedMath: Primitive {
    /// Adds `rhs` to this value.
    /// Overflow saturates toward the side given by the sign of `rhs`.
    fn clamped_add(self, rhs: Self) -> Self;

    /// Subtracts `rhs` from this value.
    /// A negative `rhs` overflows to `MAX`, anything else to `MIN`.
    fn clamped_sub(self, rhs: Self) -> Self;

    /// Multiplies this value by `rhs`.
    /// Operands of the same sign overflow to `MAX`, otherwise `MIN`.
    fn clamped_mul(self, rhs: Self) -> Self;

    /// Divides this value by `rhs`.
    /// Integer division by zero yields `MAX` whatever the dividend.
    fn clamped_div(self, rhs: Self) -> Self;

    /// Remainder of dividing this value by `rhs`.
    /// Division by zero yields `0`.
    fn clamped_rem(self, rhs: Self) -> Self;

    /// Raises this value to the power `rhs`.
    ///
    /// `x^0` is `1` (including `0^0`) and `x^1` is `x`. Integer powers
    /// with a negative exponent are `0`. An overflowing power saturates
    /// to `MIN` if the true result is negative and `MAX` otherwise.
    fn clamped_pow(self, rhs: Self) -> Self;
}

/// Saturating addition. See [`ClampedMath::clamped_add`].
#[inline]
pub fn add<T: ClampedMath>(x: T, y: T) -> T {
    x.clamped_add(y)
}

/// Saturating subtraction. See [`ClampedMath::clamped_sub`].
#[inline]
pub fn subtract<T: ClampedMath>(x: T, y: T) -> T {
    x.clamped_sub(y)
}

/// Saturating multiplication. See [`ClampedMath::clamped_mul`].
#[inline]
pub fn multiply<T: ClampedMath>(x: T, y: T) -> T {
    x.clamped_mul(y)
}

/// Saturating division. See [`ClampedMath::clamped_div`].
#[inline]
pub fn divide<T: ClampedMath>(x: T, y: T) -> T {
    x.clamped_div(y)
}

/// Saturating remainder. See [`ClampedMath::clamped_rem`].
#[inline]
pub fn remainder<T: ClampedMath>(x: T, y: T) -> T {
    x.clamped_rem(y)
}

/// Saturating exponentiation. See [`ClampedMath::clamped_pow`].
#[inline]
pub fn pow<T: ClampedMath>(x: T, y: T) -> T {
    x.clamped_pow(y)
}
