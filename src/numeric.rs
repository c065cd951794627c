/*
    Generic numeric abstraction
*/

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::convert::clamp_cast;
use crate::fixed::{Fixed, FixedRaw};
use crate::{Clamped, ClampedMath};

/// A saturating number usable by generic algorithms.
///
/// Implemented by every [`Clamped`] and [`Fixed`] type, so an algorithm
/// written once against `Numeric` runs over any of them. All operators
/// saturate, and conversions from `f64` clamp.
pub trait Numeric:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// The smallest value.
    const MIN: Self;

    /// The largest value.
    const MAX: Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Raises this value to the power `exp`.
    fn pow(self, exp: Self) -> Self;

    /// Converts to a double.
    fn to_f64(self) -> f64;

    /// Converts from a double, clamping to the range of `Self`.
    fn from_f64(value: f64) -> Self;

    /// Two.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Absolute value, saturating.
    #[inline]
    fn abs(self) -> Self {
        if self < Self::ZERO {
            -self
        } else {
            self
        }
    }

    /// Square root, computed in double precision.
    /// Negative values have no real root and give zero.
    #[inline]
    fn sqrt(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO
        } else {
            Self::from_f64(self.to_f64().sqrt())
        }
    }

    /// The smaller of two values.
    #[inline]
    fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The larger of two values.
    #[inline]
    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl<T: ClampedMath> Numeric for Clamped<T> {
    const ZERO: Self = Clamped::<T>::ZERO;
    const MIN: Self = Clamped::<T>::MIN;
    const MAX: Self = Clamped::<T>::MAX;

    #[inline]
    fn one() -> Self {
        Clamped::<T>::ONE
    }

    #[inline]
    fn pow(self, exp: Self) -> Self {
        Clamped::pow(self, exp)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        clamp_cast(self.get())
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Clamped::new(clamp_cast(value))
    }
}

impl<I: FixedRaw, const SCALE: u32> Numeric for Fixed<I, SCALE> {
    const ZERO: Self = Fixed::<I, SCALE>::ZERO;
    const MIN: Self = Fixed::<I, SCALE>::MIN;
    const MAX: Self = Fixed::<I, SCALE>::MAX;

    #[inline]
    fn one() -> Self {
        Fixed::one()
    }

    #[inline]
    fn pow(self, exp: Self) -> Self {
        Fixed::pow(self, exp)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        Fixed::to_f64(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Fixed::from_f64(value)
    }
}
