/*
    Two-dimensional vectors
*/

use std::ops::{Add, Neg, Sub};

use crate::Numeric;

/// A point or displacement in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<N> {
    pub x: N,
    pub y: N,
}

impl<N: Numeric> Vector2<N> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn zero() -> Self {
        Self::new(N::ZERO, N::ZERO)
    }

    /// Multiplies both components by `factor`.
    #[inline]
    pub fn scale(self, factor: N) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> N {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product. Positive when `other`
    /// is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> N {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, the dot product with itself.
    #[inline]
    pub fn length_squared(self) -> N {
        self.dot(self)
    }

    /// Euclidean length, computed in double precision.
    pub fn length(self) -> N {
        let x = self.x.to_f64();
        let y = self.y.to_f64();
        N::from_f64(x.hypot(y))
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> N {
        let dx = self.x.to_f64() - other.x.to_f64();
        let dy = self.y.to_f64() - other.y.to_f64();
        N::from_f64(dx.hypot(dy))
    }
}

impl<N: Numeric> Add for Vector2<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<N: Numeric> Sub for Vector2<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<N: Numeric> Neg for Vector2<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
