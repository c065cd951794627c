/*
    Angles
*/

use std::ops::{Add, Sub};

use crate::Numeric;

/// An angle, stored in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle<N> {
    degrees: N,
}

impl<N: Numeric> Angle<N> {
    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: N) -> Self {
        Self { degrees }
    }

    /// Creates an angle from radians, clamping the converted degrees.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(N::from_f64(radians.to_degrees()))
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> N {
        self.degrees
    }

    /// The angle in radians, in double precision.
    #[inline]
    pub fn radians(self) -> f64 {
        self.degrees.to_f64().to_radians()
    }

    /// The equivalent angle in `[0, 360)`.
    pub fn normalized(self) -> Self {
        let full = N::from_f64(360.0);
        let mut degrees = self.degrees % full;
        if degrees < N::ZERO {
            degrees = degrees + full;
        }
        Self::from_degrees(degrees)
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.radians().cos()
    }
}

impl<N: Numeric> Add for Angle<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees + rhs.degrees)
    }
}

impl<N: Numeric> Sub for Angle<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees - rhs.degrees)
    }
}
