/*
    Scaled fixed-point numbers
*/

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{PrimInt, ToPrimitive};

use crate::ClampedMath;

mod arithmetic;
mod convert;
mod number;
mod scaled;

pub use number::*;
pub use scaled::*;

/// The default scaling factor: six decimal digits of fraction.
pub const DEFAULT_SCALE: u32 = 1_000_000;

/// An integer type that can back a [`Fixed`] number.
///
/// Rescaling multiplies two backing integers before dividing, so
/// intermediates are computed in [`BigInt`] and narrowed back with
/// [`FixedRaw::from_big`].
pub trait FixedRaw: ClampedMath + PrimInt + Integer + From<u32> + Into<BigInt> + std::hash::Hash {
    /// Narrows a `BigInt`, returning `None` if it does not fit.
    fn from_big(value: &BigInt) -> Option<Self>;
}

macro_rules! impl_fixed_raw {
    ($($t:ty, $to:ident);*) => {$(
        impl FixedRaw for $t {
            #[inline]
            fn from_big(value: &BigInt) -> Option<Self> {
                value.$to()
            }
        }
    )*};
}

impl_fixed_raw!(i64, to_i64; u64, to_u64; i128, to_i128; u128, to_u128);

/// Alias for `Fixed<i64>` (signed, six fractional digits)
pub type Fix64 = Fixed<i64>;
/// Alias for `Fixed<u64>` (unsigned, six fractional digits)
pub type UFix64 = Fixed<u64>;
/// Alias for `Fixed<i128>` (signed, six fractional digits)
pub type Fix128 = Fixed<i128>;
/// Alias for `Fixed<u128>` (unsigned, six fractional digits)
pub type UFix128 = Fixed<u128>;
