use crate::math::vector::abs;
use crate::math::{distance_2d, intersect_2d, Point2D, EPS};

/// A closed line segment between two endpoints.
///
/// The segment is undirected for intersection queries, but the `s → t`
/// direction is used by orientation tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2D {
    s: Point2D,
    t: Point2D,
}

impl Segment2D {
    /// Creates a new segment from `s` to `t`.
    #[must_use]
    pub fn new(s: Point2D, t: Point2D) -> Self {
        Self { s, t }
    }

    /// Returns the start point.
    #[must_use]
    pub fn s(&self) -> &Point2D {
        &self.s
    }

    /// Returns the end point.
    #[must_use]
    pub fn t(&self) -> &Point2D {
        &self.t
    }

    /// Returns the direction vector `t - s`.
    #[must_use]
    pub fn direction(&self) -> Point2D {
        self.t - self.s
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        abs(&self.direction())
    }

    /// Returns `true` if the endpoints are closer than `EPS`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < EPS
    }

    /// Returns the same segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.t, self.s)
    }

    /// Returns `true` if the two closed segments share a point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        intersect_2d::segment_segment(self, other)
    }

    /// Returns the distance from `p` to this segment.
    #[must_use]
    pub fn distance_to_point(&self, p: &Point2D) -> f64 {
        distance_2d::point_segment(p, self)
    }

    /// Returns the distance between the two segments.
    #[must_use]
    pub fn distance_to_segment(&self, other: &Self) -> f64 {
        distance_2d::segment_segment_dist(self, other)
    }
}
