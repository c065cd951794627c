/*
    Saturating integer arithmetic
*/

use num_integer::Integer;
use num_traits::{CheckedRem, PrimInt, Zero};

use crate::{ClampedMath, Primitive};

// The capabilities the generic integer algorithms need.
pub(crate) trait ClampedInt: Primitive + PrimInt + CheckedRem + Integer {}

impl<T: Primitive + PrimInt + CheckedRem + Integer> ClampedInt for T {}

/// Computes `base^exp` by repeated squaring.
///
/// `mul` is a checked multiplication; the first step that overflows
/// ends the computation with `None`. `exp` must be positive. A base is
/// only squared while exponent bits remain, so every square is folded
/// into the result and an overflowing square means an overflowing
/// result.
pub(crate) fn pow_by_squaring<T, E, F>(base: T, exp: E, one: T, mul: F) -> Option<T>
where
    T: Copy,
    E: PrimInt + Integer,
    F: Fn(T, T) -> Option<T>,
{
    let mut acc = one;
    let mut base = base;
    let mut exp = exp;
    loop {
        if exp.is_odd() {
            acc = mul(acc, base)?;
        }
        exp = exp >> 1;
        if exp.is_zero() {
            return Some(acc);
        }
        base = mul(base, base)?;
    }
}

#[inline]
fn add<I: ClampedInt>(x: I, y: I) -> I {
    match x.checked_add(&y) {
        Some(v) => v,
        None if y > I::ZERO => I::MAX,
        None => I::MIN,
    }
}

#[inline]
fn sub<I: ClampedInt>(x: I, y: I) -> I {
    match x.checked_sub(&y) {
        Some(v) => v,
        None if y < I::ZERO => I::MAX,
        None => I::MIN,
    }
}

#[inline]
fn mul<I: ClampedInt>(x: I, y: I) -> I {
    match x.checked_mul(&y) {
        Some(v) => v,
        None if (x < I::ZERO) == (y < I::ZERO) => I::MAX,
        None => I::MIN,
    }
}

#[inline]
fn div<I: ClampedInt>(x: I, y: I) -> I {
    // zero divisor and `MIN / -1` both land on `MAX`
    x.checked_div(&y).unwrap_or(I::MAX)
}

#[inline]
fn rem<I: ClampedInt>(x: I, y: I) -> I {
    // zero divisor, and `MIN % -1` whose true value is zero
    x.checked_rem(&y).unwrap_or(I::ZERO)
}

fn pow<I: ClampedInt>(x: I, y: I) -> I {
    if y == I::ZERO {
        return I::ONE;
    }
    if y == I::ONE {
        return x;
    }
    if y < I::ZERO {
        // no fractional results
        return I::ZERO;
    }

    match pow_by_squaring(x, y, I::ONE, |a: I, b: I| a.checked_mul(&b)) {
        Some(v) => v,
        None if x < I::ZERO && y.is_odd() => I::MIN,
        None => I::MAX,
    }
}

macro_rules! impl_clamped_math_int {
    ($($t:ty)*) => {$(
        impl ClampedMath for $t {
            #[inline(always)]
            fn clamped_add(self, rhs: Self) -> Self {
                add(self, rhs)
            }

            #[inline(always)]
            fn clamped_sub(self, rhs: Self) -> Self {
                sub(self, rhs)
            }

            #[inline(always)]
            fn clamped_mul(self, rhs: Self) -> Self {
                mul(self, rhs)
            }

            #[inline(always)]
            fn clamped_div(self, rhs: Self) -> Self {
                div(self, rhs)
            }

            #[inline(always)]
            fn clamped_rem(self, rhs: Self) -> Self {
                rem(self, rhs)
            }

            #[inline]
            fn clamped_pow(self, rhs: Self) -> Self {
                pow(self, rhs)
            }
        }
    )*};
}

impl_clamped_math_int!(i8 i16 i32 i64 i128);
impl_clamped_math_int!(u8 u16 u32 u64 u128);
