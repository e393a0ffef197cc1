use super::orientation::{orientation, Orientation};
use super::vector::{cross, dot};
use super::{sign, Point2D};
use crate::geometry::Polygon2D;

/// Position of a point relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    Outside,
    OnBoundary,
    Inside,
}

impl Containment {
    /// Integer code: `0` outside, `1` on the boundary, `2` inside.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Outside => 0,
            Self::OnBoundary => 1,
            Self::Inside => 2,
        }
    }

    /// Returns `true` for `Inside` and `OnBoundary`.
    #[must_use]
    pub fn is_covered(self) -> bool {
        self != Self::Outside
    }
}

/// Computes the signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2D]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = cross(&points[n - 1], &points[0]);
    for i in 1..n {
        sum += cross(&points[i - 1], &points[i]);
    }
    sum * 0.5
}

/// Returns `true` if no two consecutive vertex triples turn in opposite directions.
///
/// Collinear triples are ignored.
#[must_use]
pub fn is_convex(poly: &Polygon2D) -> bool {
    let mut ccw = false;
    let mut cw = false;
    for i in 0..poly.len() {
        match orientation(poly.vertex(i), poly.vertex(i + 1), poly.vertex(i + 2)) {
            Orientation::CounterClockwise => ccw = true,
            Orientation::Clockwise => cw = true,
            _ => {}
        }
    }
    !(ccw && cw)
}

/// Classifies `p` against `poly` using a crossing-number parity test.
///
/// Boundary detection takes precedence over the parity result.
#[must_use]
pub fn point_in_polygon(poly: &Polygon2D, p: &Point2D) -> Containment {
    let mut inside = false;
    for i in 0..poly.len() {
        let mut a = poly.vertex(i) - p;
        let mut b = poly.vertex(i + 1) - p;
        if sign(dot(&a, &b)) != 1 && sign(cross(&a, &b)) == 0 {
            return Containment::OnBoundary;
        }
        if a.y > b.y {
            std::mem::swap(&mut a, &mut b);
        }
        if sign(a.y) != 1 && sign(b.y) == 1 && sign(cross(&a, &b)) == -1 {
            inside = !inside;
        }
    }
    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}
