/*
    Arithmetic
*/

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::Signed;

use crate::math::pow_by_squaring;

use super::*;

// Bit budget for computing a negative power exactly.
const EXACT_POW_BITS: u64 = 1 << 14;

impl<I: FixedRaw, const SCALE: u32> Fixed<I, SCALE> {
    /// Adds two `Fixed` numbers, saturating on overflow.
    /// Both operands share `SCALE`, so this is addition of the raw values.
    #[inline]
    pub fn clamped_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().clamped_add(rhs.raw()))
    }

    /// Subtracts `rhs`, saturating on overflow.
    #[inline]
    pub fn clamped_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().clamped_sub(rhs.raw()))
    }

    /// Multiplies two `Fixed` numbers through a wide intermediate.
    /// See [`scaled_multiply`].
    #[inline]
    pub fn clamped_mul(self, rhs: Self) -> Self {
        Self::from_raw(scaled_multiply(self.raw(), rhs.raw(), Self::scale()))
    }

    /// Divides by `rhs` through a wide intermediate.
    /// Division by zero yields `MAX`. See [`scaled_divide`].
    #[inline]
    pub fn clamped_div(self, rhs: Self) -> Self {
        Self::from_raw(scaled_divide(self.raw(), rhs.raw(), Self::scale()))
    }

    /// Remainder of dividing by `rhs`; zero when `rhs` is zero.
    #[inline]
    pub fn clamped_rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw().clamped_rem(rhs.raw()))
    }

    /// Raises this value to the integer part of `exp`.
    ///
    /// `x^0` is one and `x^1` is `x`. A negative exponent gives the
    /// reciprocal of the positive power, and zero to a negative power is
    /// `MAX`. An overflowing power saturates to `MIN` if the true result
    /// is negative and `MAX` otherwise.
    pub fn pow(self, exp: Self) -> Self {
        self.powi(exp.to_int())
    }

    /// Raises this value to the integer power `exp`.
    pub fn powi(self, exp: I) -> Self {
        if exp == I::ZERO {
            return Self::one();
        }
        if exp == I::ONE {
            return self;
        }

        // parity comes from `exp` itself: `|MIN|` does not fit in `I`
        let negative_result = self.is_negative() && exp.is_odd();
        if exp < I::ZERO {
            return self.reciprocal_powi(exp, negative_result);
        }

        let scale = Self::scale();
        match pow_by_squaring(self.raw(), exp, scale, |a, b| {
            checked_scaled_multiply(a, b, scale)
        }) {
            Some(raw) => Self::from_raw(raw),
            None if negative_result => Self::MIN,
            None => Self::MAX,
        }
    }

    // `x^-n` for `exp = -n`. In raw terms this is `SCALE^(n+1) / raw^n`,
    // computed exactly while the operands stay within `EXACT_POW_BITS`;
    // larger powers square the truncated reciprocal instead.
    fn reciprocal_powi(self, exp: I, negative_result: bool) -> Self {
        if self.is_zero() {
            return Self::MAX;
        }

        let magnitude = I::ZERO.clamped_sub(exp);
        let base = widen(self.raw()).abs();
        let scale = BigInt::from(SCALE);
        let width = base.bits().max(scale.bits());
        let exact = magnitude
            .to_u64()
            .filter(|n| n.saturating_mul(width) <= EXACT_POW_BITS);

        if let Some(n) = exact {
            let n = n as usize;
            let mut raw = num_traits::pow(scale, n + 1) / num_traits::pow(base, n);
            if negative_result {
                raw = -raw;
            }
            return Self::from_raw(saturate(&raw));
        }

        let reciprocal = Self::one().clamped_div(self).abs();
        let scale = Self::scale();
        let power = pow_by_squaring(reciprocal.raw(), magnitude, scale, |a, b| {
            checked_scaled_multiply(a, b, scale)
        });
        match power {
            Some(raw) if negative_result => -Self::from_raw(raw),
            Some(raw) => Self::from_raw(raw),
            None if negative_result => Self::MIN,
            None => Self::MAX,
        }
    }

    /// Returns the absolute value, saturating `MIN` to `MAX`.
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $clamped:ident) => {
        impl<I: FixedRaw, const SCALE: u32> $op for Fixed<I, SCALE> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.$clamped(rhs)
            }
        }

        impl<I: FixedRaw, const SCALE: u32> $assign for Fixed<I, SCALE> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.$clamped(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, clamped_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, clamped_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, clamped_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, clamped_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, clamped_rem);

impl<I: FixedRaw, const SCALE: u32> Neg for Fixed<I, SCALE> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO.clamped_sub(self)
    }
}

impl<I: FixedRaw, const SCALE: u32> Sum for Fixed<I, SCALE> {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<I: FixedRaw, const SCALE: u32> Product for Fixed<I, SCALE> {
    fn product<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
