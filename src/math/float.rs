/*
    Saturating floating-point arithmetic
*/

use crate::{ClampedMath, Primitive};

// IEEE-754 already saturates to the infinities, so each operation is the
// native one followed by `normalize`.
macro_rules! impl_clamped_math_float {
    ($($t:ty)*) => {$(
        impl ClampedMath for $t {
            #[inline]
            fn clamped_add(self, rhs: Self) -> Self {
                (self + rhs).normalize()
            }

            #[inline]
            fn clamped_sub(self, rhs: Self) -> Self {
                (self - rhs).normalize()
            }

            #[inline]
            fn clamped_mul(self, rhs: Self) -> Self {
                (self * rhs).normalize()
            }

            #[inline]
            fn clamped_div(self, rhs: Self) -> Self {
                (self / rhs).normalize()
            }

            #[inline]
            fn clamped_rem(self, rhs: Self) -> Self {
                if rhs == 0.0 {
                    0.0
                } else {
                    (self % rhs).normalize()
                }
            }

            #[inline]
            fn clamped_pow(self, rhs: Self) -> Self {
                if rhs == 0.0 {
                    1.0
                } else if rhs == 1.0 {
                    self.normalize()
                } else {
                    self.powf(rhs).normalize()
                }
            }
        }
    )*};
}

impl_clamped_math_float!(f32 f64);
