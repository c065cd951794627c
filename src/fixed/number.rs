/*
    Definition of `Fixed<I, SCALE>` struct
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;

/// A fixed-point number stored as a scaled integer.
///
/// The value represented is `raw / SCALE`. The backing integer `I` is
/// always a valid `I`: every operation that would leave its range
/// saturates to `MIN` or `MAX` instead. Ordering, equality and hashing
/// are those of `raw`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Fixed<I, const SCALE: u32 = DEFAULT_SCALE> {
    raw: I,
}

// Format parameters
impl<I: FixedRaw, const SCALE: u32> Fixed<I, SCALE> {
    /// The scaling factor.
    pub const SCALE: u32 = SCALE;

    /// Number of fractional decimal digits printed by `Display`.
    ///
    /// Exact whenever `SCALE` has no prime factors besides 2 and 5
    /// (so for every power of ten this is just `log10(SCALE)`);
    /// otherwise the expansion is truncated to this many digits.
    pub const DIGITS: u32 = fraction_digits(SCALE);

    /// The smallest representable value.
    pub const MIN: Self = Self { raw: I::MIN };

    /// The largest representable value.
    pub const MAX: Self = Self { raw: I::MAX };

    /// Zero.
    pub const ZERO: Self = Self { raw: I::ZERO };

    /// The smallest positive value, `1 / SCALE`.
    pub const EPSILON: Self = Self { raw: I::ONE };

    pub(crate) const SCALE_IS_POSITIVE: () = assert!(SCALE > 0, "fixed-point scale must be positive");

    /// The scaling factor as a backing integer.
    #[inline(always)]
    pub fn scale() -> I {
        #[allow(clippy::let_unit_value)]
        let () = Self::SCALE_IS_POSITIVE;
        <I as From<u32>>::from(SCALE)
    }
}

// Digits needed to write `k / scale` exactly: `scale = 2^a 5^b` needs
// `max(a, b)`. Other scales fall back to the digit count of `scale`.
const fn fraction_digits(scale: u32) -> u32 {
    let mut rest = scale;
    let mut twos = 0;
    let mut fives = 0;
    while rest > 0 && rest % 2 == 0 {
        rest /= 2;
        twos += 1;
    }
    while rest > 0 && rest % 5 == 0 {
        rest /= 5;
        fives += 1;
    }
    if rest == 1 {
        if twos > fives {
            twos
        } else {
            fives
        }
    } else {
        let mut n = scale;
        let mut d = 0;
        while n > 0 {
            n /= 10;
            d += 1;
        }
        d
    }
}

// Constructors and getters
impl<I: FixedRaw, const SCALE: u32> Fixed<I, SCALE> {
    /// Creates a `Fixed` from its scaled integer representation.
    ///
    /// ```rust
    /// # use clamped_num::Fixed;
    /// let tenths = Fixed::<i64, 10>::from_raw(25);
    /// assert_eq!(tenths.to_string(), "2.5");
    /// ```
    ///
    /// A zero scale is rejected when the type is instantiated:
    ///
    /// ```compile_fail
    /// # use clamped_num::Fixed;
    /// let broken = Fixed::<i64, 0>::from_raw(25);
    /// ```
    #[inline(always)]
    pub const fn from_raw(raw: I) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SCALE_IS_POSITIVE;
        Self { raw }
    }

    /// Returns the scaled integer representation.
    #[inline(always)]
    pub fn raw(self) -> I {
        self.raw
    }

    /// One, whose raw value is `SCALE`.
    #[inline]
    pub fn one() -> Self {
        Self::from_raw(Self::scale())
    }

    /// Creates a `Fixed` with the integer value `value`,
    /// saturating if `value * SCALE` does not fit.
    #[inline]
    pub fn from_int(value: I) -> Self {
        Self::from_raw(value.clamped_mul(Self::scale()))
    }

    /// Returns the integer part, truncated toward zero.
    #[inline]
    pub fn to_int(self) -> I {
        self.raw / Self::scale()
    }

    /// Returns the fractional part, carrying the sign of `self`.
    #[inline]
    pub fn fract(self) -> Self {
        Self::from_raw(self.raw % Self::scale())
    }

    /// Returns true if this value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw == I::ZERO
    }

    /// Returns true if this value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.raw < I::ZERO
    }
}
