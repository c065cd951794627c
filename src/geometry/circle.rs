/*
    Circles
*/

use std::f64::consts::PI;

use crate::Numeric;

use super::{Rectangle, Vector2};

/// A circle given by its center and radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle<N> {
    pub center: Vector2<N>,
    pub radius: N,
}

impl<N: Numeric> Circle<N> {
    /// Creates a circle. A negative radius is taken as zero.
    pub fn new(center: Vector2<N>, radius: N) -> Self {
        Self {
            center,
            radius: radius.max(N::ZERO),
        }
    }

    /// `pi * r^2`, computed in double precision.
    pub fn area(&self) -> N {
        let r = self.radius.to_f64();
        N::from_f64(PI * r * r)
    }

    /// `2 * pi * r`, computed in double precision.
    pub fn circumference(&self) -> N {
        N::from_f64(2.0 * PI * self.radius.to_f64())
    }

    /// Returns true if `point` lies inside or on the circle.
    pub fn contains(&self, point: Vector2<N>) -> bool {
        let r = self.radius.to_f64();
        distance_squared(self.center, point) <= r * r
    }

    /// Returns true if the two circles share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius.to_f64() + other.radius.to_f64();
        distance_squared(self.center, other.center) <= reach * reach
    }

    /// The smallest axis-aligned rectangle containing the circle.
    pub fn bounding_box(&self) -> Rectangle<N> {
        let diameter = self.radius + self.radius;
        Rectangle::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            diameter,
            diameter,
        )
    }
}

// Compared in double precision: converting a distance back into `N`
// would truncate it for integer types.
fn distance_squared<N: Numeric>(a: Vector2<N>, b: Vector2<N>) -> f64 {
    let dx = a.x.to_f64() - b.x.to_f64();
    let dy = a.y.to_f64() - b.y.to_f64();
    dx * dx + dy * dy
}
