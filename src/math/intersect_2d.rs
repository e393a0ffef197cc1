use super::orientation::{orientation, Orientation};
use super::vector::{abs, cross, cross_scalars};
use super::{is_zero, sign, Point2D, EPS};
use crate::geometry::{Line2D, Segment2D};

/// Parametric 2D line-line intersection.
///
/// Given lines `a1 + t * d1` and `a2 + u * d2`, returns the common point, or
/// `None` if the directions are parallel (including coincident lines).
#[must_use]
pub fn parametric_line_line(
    a1: &Point2D,
    d1: &Point2D,
    a2: &Point2D,
    d2: &Point2D,
) -> Option<Point2D> {
    let denom = cross(d1, d2);
    if denom.abs() <= EPS {
        return None;
    }
    let t = cross(&(a2 - a1), d2) / denom;
    Some(a1 + d1 * t)
}

/// Intersection of two implicit lines `a·x + b·y + c = 0`.
///
/// Returns `None` if the lines are parallel or coincident.
#[must_use]
pub fn line_line(m: &Line2D, n: &Line2D) -> Option<Point2D> {
    let m = m.normalized();
    let n = n.normalized();
    let det = cross_scalars(m.a(), m.b(), n.a(), n.b());
    if is_zero(det) {
        return None;
    }
    let x = -cross_scalars(m.c(), m.b(), n.c(), n.b()) / det;
    let y = -cross_scalars(m.a(), m.c(), n.a(), n.c()) / det;
    Some(Point2D::new(x, y))
}

/// Returns `true` if the closed intervals `[a, b]` and `[c, d]` share a point.
///
/// Endpoints may be given in either order.
#[must_use]
pub fn intervals_overlap(a: f64, b: f64, c: f64, d: f64) -> bool {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let (c, d) = if c > d { (d, c) } else { (c, d) };
    a.max(c) <= b.min(d)
}

/// Returns `true` if the closed segments `m` and `n` share a point.
///
/// A zero-length segment is treated as the single point it collapses to.
#[must_use]
pub fn segment_segment(m: &Segment2D, n: &Segment2D) -> bool {
    let (ms, mt) = (m.s(), m.t());
    let (ns, nt) = (n.s(), n.t());

    match (m.is_degenerate(), n.is_degenerate()) {
        (true, true) => return abs(&(ms - ns)) < EPS,
        (true, false) => return orientation(ns, nt, ms) == Orientation::OnSegment,
        (false, true) => return orientation(ms, mt, ns) == Orientation::OnSegment,
        (false, false) => {}
    }

    if is_zero(cross(&(ms - ns), &(ms - nt))) && is_zero(cross(&(mt - ns), &(mt - nt))) {
        // All four endpoints on one line: compare coordinate projections.
        return intervals_overlap(ms.x, mt.x, ns.x, nt.x)
            && intervals_overlap(ms.y, mt.y, ns.y, nt.y);
    }

    let dm = mt - ms;
    let dn = nt - ns;
    sign(cross(&dm, &(ns - ms))) != sign(cross(&dm, &(nt - ms)))
        && sign(cross(&dn, &(ms - ns))) != sign(cross(&dn, &(mt - ns)))
}

/// Returns `true` if the closed segment `seg` meets the infinite line `line`.
///
/// The endpoints must not lie strictly on the same side of the line; an
/// endpoint within `EPS` of the line counts as meeting it. Sides are taken
/// from the signed distance, so scaling the line's coefficients does not
/// change the answer.
#[must_use]
pub fn segment_line(seg: &Segment2D, line: &Line2D) -> bool {
    sign(line.signed_distance(seg.s())) * sign(line.signed_distance(seg.t())) <= 0
}
