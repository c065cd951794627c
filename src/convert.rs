/*
    Clamping conversions between primitives
*/

use num_traits::NumCast;

use crate::Primitive;

/// Converts `value` into another primitive type, saturating when the
/// value does not fit.
///
/// - NaN converts to zero.
/// - Values in range convert exactly, except that floats converted to
///   integers are truncated toward zero.
/// - Values out of range (including the infinities) become `T::MAX`
///   when positive and `T::MIN` when negative.
///
/// ```rust
/// # use clamped_num::convert::clamp_cast;
/// assert_eq!(clamp_cast::<i32, u8>(300), 255);
/// assert_eq!(clamp_cast::<i32, u8>(-5), 0);
/// assert_eq!(clamp_cast::<f64, i16>(f64::NAN), 0);
/// assert_eq!(clamp_cast::<f64, f32>(1e300), f32::MAX);
/// ```
pub fn clamp_cast<S: Primitive, T: Primitive>(value: S) -> T {
    if value.is_nan() {
        log::trace!("clamp_cast: NaN converted to zero");
        return T::ZERO;
    }

    match <T as NumCast>::from(value) {
        Some(v) => v.normalize(),
        None if value > S::ZERO => {
            log::trace!("clamp_cast: {} saturated to {}", value, T::MAX);
            T::MAX
        }
        None => {
            log::trace!("clamp_cast: {} saturated to {}", value, T::MIN);
            T::MIN
        }
    }
}
