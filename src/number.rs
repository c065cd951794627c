/*
    Defines a primitive number
*/

use std::fmt::{Debug, Display};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use num_traits::NumCast;

use crate::error::ParseNumberError;

/// The primitive number type.
///
/// The capability trait every clamped operation is written against.
/// A `Primitive` is one of the fixed-width machine integers or an
/// IEEE-754 binary float, described by its boundary values and a
/// handful of classification predicates.
pub trait Primitive:
    Copy + Default + PartialEq + PartialOrd + Debug + Display + NumCast + Send + Sync + 'static
{
    /// The smallest representable value.
    /// For floats this is the most negative finite value.
    const MIN: Self;

    /// The largest representable value.
    /// For floats this is the largest finite value.
    const MAX: Self;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// True if this type can hold negative values.
    const SIGNED: bool;

    /// True for the binary floating-point types.
    const FLOATING: bool;

    /// Bitwidth of the representation.
    const BITS: u32;

    /// Returns true if this value does not encode a number.
    /// Always false for integers.
    fn is_nan(self) -> bool;

    /// Returns true if this value encodes an infinity.
    /// Always false for integers.
    fn is_infinite(self) -> bool;

    /// Maps a value onto the finite range of this type.
    ///
    /// NaN becomes zero and the infinities become `MAX` and `MIN`.
    /// Integers are returned unchanged.
    fn normalize(self) -> Self;

    /// Parses a value from text, saturating at the boundary values
    /// when the number is well-formed but out of range.
    fn parse_clamped(s: &str) -> Result<Self, ParseNumberError>;
}

// Parses an integer, saturating on overflow.
// A negative literal for an unsigned type saturates to zero.
fn parse_int<T>(s: &str) -> Result<T, ParseNumberError>
where
    T: Primitive + FromStr<Err = ParseIntError>,
{
    match s.parse::<T>() {
        Ok(v) => Ok(v),
        Err(e) => match e.kind() {
            IntErrorKind::Empty => Err(ParseNumberError::Empty),
            IntErrorKind::PosOverflow => Ok(T::MAX),
            IntErrorKind::NegOverflow => Ok(T::MIN),
            _ => match s.parse::<i128>() {
                Ok(v) if v <= 0 => Ok(T::MIN),
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(T::MIN),
                _ => {
                    log::debug!("rejected integer literal {:?}", s);
                    Err(ParseNumberError::InvalidDigit(s.to_owned()))
                }
            },
        },
    }
}

macro_rules! impl_primitive_int {
    ($signed:expr; $($t:ty)*) => {$(
        impl Primitive for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const SIGNED: bool = $signed;
            const FLOATING: bool = false;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn is_nan(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_infinite(self) -> bool {
                false
            }

            #[inline(always)]
            fn normalize(self) -> Self {
                self
            }

            fn parse_clamped(s: &str) -> Result<Self, ParseNumberError> {
                parse_int::<$t>(s)
            }
        }
    )*};
}

macro_rules! impl_primitive_float {
    ($($t:ident, $bits:expr);*) => {$(
        impl Primitive for $t {
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const SIGNED: bool = true;
            const FLOATING: bool = true;
            const BITS: u32 = $bits;

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline(always)]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }

            #[inline]
            fn normalize(self) -> Self {
                if <$t>::is_nan(self) {
                    0.0
                } else if self == $t::INFINITY {
                    $t::MAX
                } else if self == $t::NEG_INFINITY {
                    $t::MIN
                } else {
                    self
                }
            }

            fn parse_clamped(s: &str) -> Result<Self, ParseNumberError> {
                if s.is_empty() {
                    return Err(ParseNumberError::Empty);
                }
                match s.parse::<$t>() {
                    Ok(v) => Ok(v.normalize()),
                    Err(_) => {
                        log::debug!("rejected float literal {:?}", s);
                        Err(ParseNumberError::InvalidDigit(s.to_owned()))
                    }
                }
            }
        }
    )*};
}

impl_primitive_int!(true; i8 i16 i32 i64 i128);
impl_primitive_int!(false; u8 u16 u32 u64 u128);
impl_primitive_float!(f32, 32; f64, 64);
