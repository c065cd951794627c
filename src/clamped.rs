/*
    Definition of the `Clamped<T>` wrapper
*/

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::clamp_cast;
use crate::error::ParseNumberError;
use crate::ClampedMath;

/// A primitive number whose operators saturate.
///
/// Every operator on a `Clamped<T>` routes through [`ClampedMath`], so
/// arithmetic never overflows, wraps or panics. A float-backed
/// `Clamped` never holds NaN or an infinity: construction maps NaN to
/// zero and the infinities to `MAX` and `MIN`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Clamped<T>(T);

// Constants
impl<T: ClampedMath> Clamped<T> {
    /// The smallest value.
    pub const MIN: Self = Self(T::MIN);

    /// The largest value.
    pub const MAX: Self = Self(T::MAX);

    /// Zero.
    pub const ZERO: Self = Self(T::ZERO);

    /// One.
    pub const ONE: Self = Self(T::ONE);
}

// Constructors and getters
impl<T: ClampedMath> Clamped<T> {
    /// Wraps `value`, normalizing non-finite floats.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(value.normalize())
    }

    /// Returns the wrapped primitive.
    #[inline(always)]
    pub fn get(self) -> T {
        self.0
    }

    /// Raises this value to the power `exp`.
    /// See [`ClampedMath::clamped_pow`].
    #[inline]
    pub fn pow(self, exp: Self) -> Self {
        Self(self.0.clamped_pow(exp.0))
    }

    /// Converts to a `Clamped` of another width, saturating when the
    /// value does not fit.
    #[inline]
    pub fn cast<U: ClampedMath>(self) -> Clamped<U> {
        Clamped(clamp_cast(self.0))
    }
}

impl<T: ClampedMath> From<T> for Clamped<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_into_primitive {
    ($($t:ty)*) => {$(
        impl From<Clamped<$t>> for $t {
            #[inline(always)]
            fn from(value: Clamped<$t>) -> Self {
                value.0
            }
        }
    )*};
}

impl_into_primitive!(i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64);

// Operators
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $clamped:ident) => {
        impl<T: ClampedMath> $op for Clamped<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0.$clamped(rhs.0))
            }
        }

        impl<T: ClampedMath> $op<T> for Clamped<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self(self.0.$clamped(rhs.normalize()))
            }
        }

        impl<T: ClampedMath> $assign for Clamped<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0.$clamped(rhs.0);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, clamped_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, clamped_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, clamped_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, clamped_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, clamped_rem);

/// Negation is `ZERO - self`: `-MIN` saturates to `MAX`, and negating
/// an unsigned value gives zero.
impl<T: ClampedMath> Neg for Clamped<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(T::ZERO.clamped_sub(self.0))
    }
}

impl<T: ClampedMath> Sum for Clamped<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<T: ClampedMath> Product for Clamped<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

// Formatting and parsing
impl<T: ClampedMath> fmt::Debug for Clamped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clamped({:?})", self.0)
    }
}

impl<T: ClampedMath> fmt::Display for Clamped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: ClampedMath> FromStr for Clamped<T> {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        T::parse_clamped(s).map(Self::new)
    }
}

/// Alias for `Clamped<i8>`
pub type SByte = Clamped<i8>;
/// Alias for `Clamped<u8>`
pub type Byte = Clamped<u8>;
/// Alias for `Clamped<i16>`
pub type Int16 = Clamped<i16>;
/// Alias for `Clamped<u16>`
pub type UInt16 = Clamped<u16>;
/// Alias for `Clamped<i32>`
pub type Int32 = Clamped<i32>;
/// Alias for `Clamped<u32>`
pub type UInt32 = Clamped<u32>;
/// Alias for `Clamped<i64>`
pub type Int64 = Clamped<i64>;
/// Alias for `Clamped<u64>`
pub type UInt64 = Clamped<u64>;
/// Alias for `Clamped<i128>`
pub type Int128 = Clamped<i128>;
/// Alias for `Clamped<u128>`
pub type UInt128 = Clamped<u128>;
/// Alias for `Clamped<f32>` (single-precision number)
pub type Single = Clamped<f32>;
/// Alias for `Clamped<f64>` (double-precision number)
pub type Double = Clamped<f64>;
