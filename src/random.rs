/*
    Random generation
*/

use rand::Rng;

use crate::fixed::{Fixed, FixedRaw};
use crate::{Clamped, ClampedMath, Primitive};

/// A number that can be drawn at random.
pub trait RandomValue: Sized {
    /// Draws a value uniformly.
    ///
    /// Integers and fixed-point numbers cover their whole range;
    /// floats are drawn from `[0, 1)`.
    fn random<R: Rng>(rng: &mut R) -> Self;

    /// Draws a value uniformly from the inclusive range between `low`
    /// and `high`. The bounds may be given in either order.
    fn random_range<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self;
}

macro_rules! impl_random_int {
    ($($t:ty)*) => {$(
        impl RandomValue for $t {
            #[inline]
            fn random<R: Rng>(rng: &mut R) -> Self {
                rng.random::<$t>()
            }

            #[inline]
            fn random_range<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self {
                let (low, high) = if low <= high { (low, high) } else { (high, low) };
                rng.random_range(low..=high)
            }
        }
    )*};
}

// The span between two finite floats can exceed `MAX`, so the draw is
// built from clamped arithmetic instead of a uniform float range.
macro_rules! impl_random_float {
    ($($t:ty)*) => {$(
        impl RandomValue for $t {
            #[inline]
            fn random<R: Rng>(rng: &mut R) -> Self {
                rng.random::<$t>()
            }

            fn random_range<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self {
                let (low, high) = (low.normalize(), high.normalize());
                let (low, high) = if low <= high { (low, high) } else { (high, low) };
                let unit = rng.random::<$t>();
                let span = high.clamped_sub(low);
                let value = low.clamped_add(span.clamped_mul(unit));
                if value > high {
                    high
                } else {
                    value
                }
            }
        }
    )*};
}

impl_random_int!(i8 i16 i32 i64 i128 u8 u16 u32 u64 u128);
impl_random_float!(f32 f64);

impl<T: ClampedMath + RandomValue> RandomValue for Clamped<T> {
    #[inline]
    fn random<R: Rng>(rng: &mut R) -> Self {
        Clamped::new(T::random(rng))
    }

    #[inline]
    fn random_range<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self {
        Clamped::new(T::random_range(rng, low.get(), high.get()))
    }
}

impl<I: FixedRaw + RandomValue, const SCALE: u32> RandomValue for Fixed<I, SCALE> {
    #[inline]
    fn random<R: Rng>(rng: &mut R) -> Self {
        Fixed::from_raw(I::random(rng))
    }

    #[inline]
    fn random_range<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self {
        Fixed::from_raw(I::random_range(rng, low.raw(), high.raw()))
    }
}
