use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::Polygon2D;
use crate::math::orientation::orientation;
use crate::math::vector::{abs, cross};
use crate::math::{sign, Point2D};

/// Result of a farthest pair query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarthestPairResult {
    /// One end of the farthest pair.
    pub first: Point2D,
    /// The other end of the farthest pair.
    pub second: Point2D,
    /// The distance between them, i.e. the diameter of the hull.
    pub distance: f64,
}

/// Finds the two most distant vertices of a convex polygon (rotating calipers).
///
/// The polygon must be convex with consistent winding, such as the output of
/// [`ConvexHull`](super::ConvexHull). Runs in time linear in the vertex count.
pub struct FarthestPair<'a> {
    hull: &'a Polygon2D,
}

impl<'a> FarthestPair<'a> {
    /// Creates a new `FarthestPair` query.
    #[must_use]
    pub fn new(hull: &'a Polygon2D) -> Self {
        Self { hull }
    }

    /// Executes the query.
    ///
    /// Vertices that do not make a strict turn cannot be the unique farthest
    /// vertex, so they are skipped. The antipodal pointer then advances while
    /// the next edge still turns in the hull's winding direction relative to
    /// the current edge; every pair it passes is measured.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon is not convex.
    pub fn execute(&self) -> Result<FarthestPairResult> {
        if !self.hull.is_convex() {
            return Err(OperationError::InvalidInput(
                "farthest pair requires a convex polygon".into(),
            )
            .into());
        }

        let corners: Vec<Point2D> = (0..self.hull.len())
            .filter(|&i| {
                let prev = self.hull.vertex(i + self.hull.len() - 1);
                orientation(prev, self.hull.vertex(i), self.hull.vertex(i + 1)).is_turn()
            })
            .map(|i| *self.hull.vertex(i))
            .collect();
        debug!(vertices = self.hull.len(), corners = corners.len(), "farthest pair");

        let result = if corners.len() < 3 {
            brute_force(self.hull.points())
        } else {
            let winding = if self.hull.is_clockwise() { -1 } else { 1 };
            calipers(&corners, winding)
        };
        trace!(
            first = ?result.first,
            second = ?result.second,
            distance = result.distance,
            "farthest pair found"
        );
        Ok(result)
    }
}

/// Diameter of a convex polygon: the largest distance between two of its vertices.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the polygon is not convex.
pub fn diameter(hull: &Polygon2D) -> Result<f64> {
    Ok(FarthestPair::new(hull).execute()?.distance)
}

struct Best {
    first: usize,
    second: usize,
    distance: f64,
}

impl Best {
    fn consider(&mut self, pts: &[Point2D], i: usize, j: usize) {
        let d = abs(&(pts[i] - pts[j]));
        if d > self.distance {
            *self = Self {
                first: i,
                second: j,
                distance: d,
            };
        }
    }

    fn into_result(self, pts: &[Point2D]) -> FarthestPairResult {
        FarthestPairResult {
            first: pts[self.first],
            second: pts[self.second],
            distance: self.distance,
        }
    }
}

fn calipers(pts: &[Point2D], winding: i32) -> FarthestPairResult {
    let n = pts.len();
    let mut best = Best {
        first: 0,
        second: 0,
        distance: f64::MIN,
    };
    let mut j = 1;
    for i in 0..n {
        let ni = (i + 1) % n;
        let edge = pts[ni] - pts[i];
        for _ in 0..n {
            best.consider(pts, i, j);
            best.consider(pts, ni, j);
            let nj = (j + 1) % n;
            let turn = sign(cross(&edge, &(pts[nj] - pts[j]))) * winding;
            if turn <= 0 {
                if turn == 0 {
                    // Parallel edges: both ends of the opposite edge are antipodal.
                    best.consider(pts, i, nj);
                    best.consider(pts, ni, nj);
                }
                break;
            }
            j = nj;
        }
    }
    best.into_result(pts)
}

fn brute_force(pts: &[Point2D]) -> FarthestPairResult {
    let mut best = Best {
        first: 0,
        second: 0,
        distance: f64::MIN,
    };
    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            best.consider(pts, i, j);
        }
    }
    best.into_result(pts)
}
