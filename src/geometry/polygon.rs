use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{is_convex, point_in_polygon, signed_area, Containment};
use crate::math::{sign, Point2D};

use super::Segment2D;

/// A simple polygon given by its vertices in order.
///
/// Area and winding are computed once at construction. Behavior of the
/// algorithms on self-intersecting vertex lists is unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    points: Vec<Point2D>,
    signed_area: f64,
}

impl Polygon2D {
    /// Creates a polygon from at least three vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than three vertices are given.
    pub fn new(points: Vec<Point2D>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                required: 3,
                actual: points.len(),
            }
            .into());
        }
        let signed_area = signed_area(&points);
        Ok(Self {
            points,
            signed_area,
        })
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a polygon has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the vertex at `i` modulo the vertex count.
    #[must_use]
    pub fn vertex(&self, i: usize) -> &Point2D {
        &self.points[i % self.points.len()]
    }

    /// Returns the enclosed area (non-negative).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    /// Returns the signed area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    /// Returns `true` if the vertices wind clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        sign(self.signed_area) == -1
    }

    /// Iterates over the edges `(P[i], P[i+1])`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2D> + '_ {
        (0..self.points.len()).map(move |i| Segment2D::new(self.points[i], *self.vertex(i + 1)))
    }

    /// Returns `true` if the polygon has no reflex vertex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex(self)
    }

    /// Classifies `p` as inside, outside, or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2D) -> Containment {
        point_in_polygon(self, p)
    }
}
