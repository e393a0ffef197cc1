use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Polygon2D;
use crate::math::orientation::{orientation, Orientation};
use crate::math::vector::compare_yx;
use crate::math::Point2D;

/// Builds the convex hull of a point set (Andrew's monotone chain).
///
/// Points are sorted by `y`, then `x`, with the epsilon comparator. Vertices
/// lying on a hull edge are kept. The output winds clockwise unless
/// [`clockwise(false)`](Self::clockwise) is set.
///
/// Distinct input points are expected to be at least `EPS` apart in each
/// coordinate they differ in. Clusters of points closer than that make the
/// sort comparator inconsistent; exact duplicates are fine and are removed.
pub struct ConvexHull {
    points: Vec<Point2D>,
    clockwise: bool,
}

impl ConvexHull {
    /// Creates a new `ConvexHull` operation over `points`.
    #[must_use]
    pub fn new(points: Vec<Point2D>) -> Self {
        Self {
            points,
            clockwise: true,
        }
    }

    /// Creates a hull operation over the vertices of `poly`.
    #[must_use]
    pub fn from_polygon(poly: &Polygon2D) -> Self {
        Self::new(poly.points().to_vec())
    }

    /// Selects the winding of the resulting polygon.
    #[must_use]
    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Executes the operation, returning the hull as a polygon.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if no points were given.
    /// - `GeometryError::TooFewPoints` if fewer than three distinct points remain.
    /// - `GeometryError::Degenerate` if all points are collinear.
    pub fn execute(&self) -> Result<Polygon2D> {
        if self.points.is_empty() {
            return Err(OperationError::InvalidInput("convex hull of no points".into()).into());
        }

        let mut points = self.points.clone();
        points.sort_by(compare_yx);
        points.dedup_by(|a, b| compare_yx(a, b) == Ordering::Equal);
        debug!(
            input = self.points.len(),
            distinct = points.len(),
            clockwise = self.clockwise,
            "convex hull"
        );
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                required: 3,
                actual: points.len(),
            }
            .into());
        }

        // The turn that must not survive on the chain.
        let reject = if self.clockwise {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        };

        let mut hull = monotone_chain(points.iter(), reject);
        let lower = monotone_chain(points.iter().rev(), reject);
        trace!(upper = hull.len(), lower = lower.len(), "hull chains");
        hull.extend(lower);

        let n = hull.len();
        let has_turn = (0..n)
            .any(|i| orientation(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]).is_turn());
        if !has_turn {
            return Err(GeometryError::Degenerate("all hull points are collinear".into()).into());
        }

        Polygon2D::new(hull)
    }
}

/// Builds one chain, dropping its last point (it starts the opposite chain).
fn monotone_chain<'a>(points: impl Iterator<Item = &'a Point2D>, reject: Orientation) -> Vec<Point2D> {
    let mut chain: Vec<Point2D> = Vec::new();
    for p in points {
        while chain.len() >= 2 && orientation(&chain[chain.len() - 2], &chain[chain.len() - 1], p) == reject {
            chain.pop();
        }
        chain.push(*p);
    }
    chain.pop();
    chain
}
