use super::intersect_2d::{segment_line, segment_segment};
use super::vector::{abs, cross, dot};
use super::{sign, Point2D};
use crate::geometry::{Line2D, Segment2D};

/// Perpendicular distance from `p` to the infinite line `line`.
#[must_use]
pub fn point_line(p: &Point2D, line: &Line2D) -> f64 {
    line.signed_distance(p).abs()
}

/// Distance from `p` to the closed segment `seg`.
///
/// If `p` projects outside `[s, t]` the nearer endpoint wins; otherwise the
/// perpendicular distance to the supporting line is returned. A zero-length
/// segment measures as its single point.
#[must_use]
pub fn point_segment(p: &Point2D, seg: &Segment2D) -> f64 {
    let (s, t) = (seg.s(), seg.t());
    if seg.is_degenerate() {
        return abs(&(p - s));
    }
    if sign(dot(&(t - s), &(p - s))) == -1 || sign(dot(&(s - t), &(p - t))) == -1 {
        return abs(&(p - s)).min(abs(&(p - t)));
    }
    let d = t - s;
    cross(&d, &(p - s)).abs() / abs(&d)
}

/// Distance between two closed segments; zero when they intersect.
#[must_use]
pub fn segment_segment_dist(m: &Segment2D, n: &Segment2D) -> f64 {
    if segment_segment(m, n) {
        return 0.0;
    }
    point_segment(n.s(), m)
        .min(point_segment(n.t(), m))
        .min(point_segment(m.s(), n))
        .min(point_segment(m.t(), n))
}

/// Distance between two infinite lines.
///
/// Zero unless the lines are parallel and distinct, in which case it is the
/// distance from a point of `m` to `n`.
#[must_use]
pub fn line_line_dist(m: &Line2D, n: &Line2D) -> f64 {
    if m.is_equivalent(n) || !m.is_parallel(n) {
        return 0.0;
    }
    point_line(m.s(), n)
}

/// Distance between an infinite line and a closed segment.
///
/// Zero when they meet; otherwise the nearer of the two endpoint distances.
#[must_use]
pub fn line_segment_dist(line: &Line2D, seg: &Segment2D) -> f64 {
    if segment_line(seg, line) {
        return 0.0;
    }
    point_line(seg.s(), line).min(point_line(seg.t(), line))
}
