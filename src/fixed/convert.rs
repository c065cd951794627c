/*
    Conversions to and from `Fixed<I, SCALE>`
*/

use std::fmt;
use std::str::FromStr;

use num_bigint::Sign;
use num_traits::Zero;

use crate::convert::clamp_cast;
use crate::error::ParseNumberError;

use super::*;

// Floating-point conversions
impl<I: FixedRaw, const SCALE: u32> Fixed<I, SCALE> {
    /// Converts a double to the nearest `Fixed`, rounding half away
    /// from zero.
    ///
    /// NaN converts to zero; values out of range, including the
    /// infinities, saturate to `MAX` or `MIN`.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            log::trace!("non-finite input {} to fixed-point conversion", value);
        }
        let scaled = (value * f64::from(SCALE)).round();
        Self::from_raw(clamp_cast(scaled))
    }

    /// Converts a single to the nearest `Fixed`. See [`Fixed::from_f64`].
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Returns `raw / SCALE` in double precision.
    pub fn to_f64(self) -> f64 {
        clamp_cast::<I, f64>(self.raw()) / f64::from(SCALE)
    }

    /// Returns `raw / SCALE` in single precision, saturating to the
    /// finite range of `f32`.
    pub fn to_f32(self) -> f32 {
        clamp_cast(self.to_f64())
    }
}

// Integer conversions
impl<I: FixedRaw, const SCALE: u32> Fixed<I, SCALE> {
    /// Converts to a different scaling factor, truncating digits the
    /// new scale cannot hold and saturating on overflow.
    ///
    /// ```compile_fail
    /// # use clamped_num::Fix64;
    /// let broken = Fix64::ZERO.rescale::<0>();
    /// ```
    pub fn rescale<const TO: u32>(self) -> Fixed<I, TO> {
        #[allow(clippy::let_unit_value)]
        let ((), ()) = (Self::SCALE_IS_POSITIVE, Fixed::<I, TO>::SCALE_IS_POSITIVE);
        let raw = widen(self.raw()) * BigInt::from(TO) / BigInt::from(SCALE);
        Fixed::from_raw(saturate(&raw))
    }

    /// Converts to a different backing integer, saturating on overflow.
    pub fn cast<J: FixedRaw>(self) -> Fixed<J, SCALE> {
        Fixed::from_raw(saturate(&widen(self.raw())))
    }
}

// Prints the exact decimal expansion with trailing zeros trimmed.
impl<I: FixedRaw, const SCALE: u32> fmt::Display for Fixed<I, SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::let_unit_value)]
        let () = Self::SCALE_IS_POSITIVE;
        let raw = widen(self.raw());
        let scale = BigInt::from(SCALE);
        let negative = raw.sign() == Sign::Minus;
        let magnitude = if negative { -raw } else { raw };
        let (int, frac) = magnitude.div_rem(&scale);

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&int.to_string());
        if !frac.is_zero() {
            let width = Self::DIGITS as usize;
            let decimal = frac * num_traits::pow(BigInt::from(10u32), width) / &scale;
            let digits = format!("{:0>width$}", decimal.to_string(), width = width);
            out.push('.');
            out.push_str(digits.trim_end_matches('0'));
        }
        f.write_str(&out)
    }
}

impl<I: FixedRaw, const SCALE: u32> fmt::Debug for Fixed<I, SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({})", self)
    }
}

// Parses `[+-]digits[.digits]`. Fractional digits beyond the scale are
// truncated; values out of range saturate.
impl<I: FixedRaw, const SCALE: u32> FromStr for Fixed<I, SCALE> {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let invalid = || {
            log::debug!("rejected fixed-point literal {:?}", s);
            ParseNumberError::InvalidDigit(s.to_owned())
        };

        let (negative, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(int_part) || !is_digits(frac_part) {
            return Err(invalid());
        }

        let scale = BigInt::from(SCALE);
        let mut raw = BigInt::zero();
        if !int_part.is_empty() {
            let int: BigInt = int_part.parse().map_err(|_| invalid())?;
            raw = int * &scale;
        }
        if !frac_part.is_empty() {
            let frac: BigInt = frac_part.parse().map_err(|_| invalid())?;
            raw += frac * &scale / num_traits::pow(BigInt::from(10u32), frac_part.len());
        }
        if negative {
            raw = -raw;
        }
        Ok(Self::from_raw(saturate(&raw)))
    }
}
