/*
    Axis-aligned rectangles
*/

use crate::Numeric;

use super::Vector2;

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// The rectangle covers `[x, x + width] x [y, y + height]`; edges are
/// inclusive. Corner coordinates saturate like any other arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle<N> {
    pub x: N,
    pub y: N,
    pub width: N,
    pub height: N,
}

impl<N: Numeric> Rectangle<N> {
    /// Creates a rectangle from its top-left corner and size.
    /// A negative size is taken as zero.
    pub fn new(x: N, y: N, width: N, height: N) -> Self {
        Self {
            x,
            y,
            width: width.max(N::ZERO),
            height: height.max(N::ZERO),
        }
    }

    /// Creates the smallest rectangle containing both corners.
    pub fn from_corners(a: Vector2<N>, b: Vector2<N>) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        let right = a.x.max(b.x);
        let bottom = a.y.max(b.y);
        Self::new(left, top, right - left, bottom - top)
    }

    /// The x coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> N {
        self.x
    }

    /// The y coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> N {
        self.y
    }

    /// The x coordinate of the right edge, `x + width`.
    #[inline]
    pub fn right(&self) -> N {
        self.x + self.width
    }

    /// The y coordinate of the bottom edge, `y + height`.
    #[inline]
    pub fn bottom(&self) -> N {
        self.y + self.height
    }

    /// `width * height`.
    #[inline]
    pub fn area(&self) -> N {
        self.width * self.height
    }

    /// `2 * (width + height)`.
    #[inline]
    pub fn perimeter(&self) -> N {
        N::two() * (self.width + self.height)
    }

    /// The center point, rounded the way `N` divides.
    pub fn center(&self) -> Vector2<N> {
        Vector2::new(
            self.x + self.width / N::two(),
            self.y + self.height / N::two(),
        )
    }

    /// Returns true if `point` lies inside or on the edge.
    pub fn contains(&self, point: Vector2<N>) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns true if the two rectangles share at least one point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// The overlapping region, or `None` if the rectangles are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Self::new(left, top, right - left, bottom - top))
    }

    /// The smallest rectangle containing both.
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }
}
