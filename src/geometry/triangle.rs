/*
    Triangles
*/

use crate::Numeric;

use super::{Rectangle, Vector2};

/// A triangle given by its three vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle<N> {
    pub a: Vector2<N>,
    pub b: Vector2<N>,
    pub c: Vector2<N>,
}

impl<N: Numeric> Triangle<N> {
    /// Creates a triangle from its vertices.
    #[inline]
    pub fn new(a: Vector2<N>, b: Vector2<N>, c: Vector2<N>) -> Self {
        Self { a, b, c }
    }

    // Twice the signed area; positive for counter-clockwise vertices.
    fn doubled_signed_area(&self) -> N {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Area, half the absolute cross product of two edges.
    pub fn area(&self) -> N {
        self.doubled_signed_area().abs() / N::two()
    }

    /// Sum of the edge lengths.
    pub fn perimeter(&self) -> N {
        self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.a)
    }

    /// The mean of the three vertices.
    pub fn centroid(&self) -> Vector2<N> {
        let three = N::two() + N::one();
        Vector2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }

    /// Returns true if `point` lies inside or on an edge.
    ///
    /// The point is inside when it is on the same side of all three
    /// edges; a zero cross product puts it on an edge.
    pub fn contains(&self, point: Vector2<N>) -> bool {
        let d1 = (self.b - self.a).cross(point - self.a);
        let d2 = (self.c - self.b).cross(point - self.b);
        let d3 = (self.a - self.c).cross(point - self.c);

        let has_negative = d1 < N::ZERO || d2 < N::ZERO || d3 < N::ZERO;
        let has_positive = d1 > N::ZERO || d2 > N::ZERO || d3 > N::ZERO;
        !(has_negative && has_positive)
    }

    /// The smallest axis-aligned rectangle containing the triangle.
    pub fn bounding_box(&self) -> Rectangle<N> {
        let top_left = Vector2::new(
            self.a.x.min(self.b.x).min(self.c.x),
            self.a.y.min(self.b.y).min(self.c.y),
        );
        let bottom_right = Vector2::new(
            self.a.x.max(self.b.x).max(self.c.x),
            self.a.y.max(self.b.y).max(self.c.y),
        );
        Rectangle::from_corners(top_left, bottom_right)
    }
}
