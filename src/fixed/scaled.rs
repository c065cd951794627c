/*
    Rescaling multiply and divide
*/

use num_bigint::Sign;
use num_traits::Zero;

use super::*;

// Widens a backing integer into the intermediate type.
#[inline]
pub(crate) fn widen<I: FixedRaw>(value: I) -> BigInt {
    value.into()
}

// Narrows a wide intermediate back into the backing type,
// saturating by sign.
pub(crate) fn saturate<I: FixedRaw>(value: &BigInt) -> I {
    match I::from_big(value) {
        Some(v) => v,
        None if value.sign() == Sign::Minus => {
            log::trace!("fixed-point result {} saturated to MIN", value);
            I::MIN
        }
        None => {
            log::trace!("fixed-point result {} saturated to MAX", value);
            I::MAX
        }
    }
}

/// Multiplies two scaled integers and rescales the product.
///
/// Computes `(left * right) / scaling_factor` in a [`BigInt`] wide
/// intermediate, truncating toward zero, then saturates into `I`.
/// A zero `scaling_factor` is treated as division by zero and
/// yields `I::MAX`.
///
/// ```rust
/// # use clamped_num::fixed::scaled_multiply;
/// // 1.5 * 2.5 at six fractional digits
/// assert_eq!(scaled_multiply(1_500_000i64, 2_500_000, 1_000_000), 3_750_000);
/// assert_eq!(scaled_multiply(i64::MAX, 2_000_000, 1_000_000), i64::MAX);
/// ```
pub fn scaled_multiply<I: FixedRaw>(left: I, right: I, scaling_factor: I) -> I {
    if scaling_factor == I::ZERO {
        return I::MAX;
    }
    let product = widen(left) * widen(right);
    saturate(&(product / widen(scaling_factor)))
}

/// Divides two scaled integers, keeping the scale.
///
/// Computes `(left * scaling_factor) / right` in a [`BigInt`] wide
/// intermediate, truncating toward zero, then saturates into `I`.
/// A zero `right` yields `I::MAX` for signed and unsigned backings
/// alike.
///
/// ```rust
/// # use clamped_num::fixed::scaled_divide;
/// // 1.0 / 4.0 at six fractional digits
/// assert_eq!(scaled_divide(1_000_000i64, 4_000_000, 1_000_000), 250_000);
/// assert_eq!(scaled_divide(-1i64, 0, 1_000_000), i64::MAX);
/// ```
pub fn scaled_divide<I: FixedRaw>(left: I, right: I, scaling_factor: I) -> I {
    if right == I::ZERO {
        return I::MAX;
    }
    let numerator = widen(left) * widen(scaling_factor);
    saturate(&(numerator / widen(right)))
}

// Like `scaled_multiply`, but reports overflow instead of saturating.
pub(crate) fn checked_scaled_multiply<I: FixedRaw>(left: I, right: I, scaling_factor: I) -> Option<I> {
    let divisor = widen(scaling_factor);
    if divisor.is_zero() {
        return None;
    }
    let product = widen(left) * widen(right);
    I::from_big(&(product / divisor))
}
