use crate::error::{GeometryError, Result};
use crate::math::vector::{abs, cross_scalars};
use crate::math::{distance_2d, intersect_2d, is_zero, sign, Point2D};

use super::Segment2D;

/// An infinite line in implicit form `a·x + b·y + c = 0`.
///
/// The line also carries two distinct points `s` and `t` on it. Their
/// direction `t - s` is always `(b, -a)` up to a positive factor, so
/// coefficient sign and point order stay consistent.
///
/// `(a, b)` is never `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    a: f64,
    b: f64,
    c: f64,
    s: Point2D,
    t: Point2D,
}

impl Line2D {
    /// Creates the line through `p` and `q`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `p` and `q` coincide, or are
    /// indistinguishable at their magnitude.
    pub fn from_points(p: Point2D, q: Point2D) -> Result<Self> {
        let a = p.y - q.y;
        let b = -(p.x - q.x);
        let len = a.hypot(b);
        if len <= f64::EPSILON * abs(&p).max(abs(&q)) || !len.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "line through coincident points ({}, {})",
                p.x, p.y
            ))
            .into());
        }
        let c = -(a * p.x + b * p.y);
        Ok(Self { a, b, c, s: p, t: q })
    }

    /// Creates the line `a·x + b·y + c = 0`.
    ///
    /// The defining points are the foot of the perpendicular from the origin
    /// and that point shifted by the unit vector along `(b, -a)`. Only the
    /// ratio of the coefficients matters, so scaled triples give the same
    /// defining points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `(a, b)` is zero or negligible
    /// next to `c`.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Self> {
        let len = a.hypot(b);
        if len <= f64::EPSILON * c.abs() || !len.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "line coefficients ({a}, {b}) have no normal"
            ))
            .into());
        }
        let (ua, ub) = (a / len, b / len);
        let s = Point2D::new(-ua * c / len, -ub * c / len);
        let t = s + Point2D::new(ub, -ua);
        Ok(Self { a, b, c, s, t })
    }

    /// Returns the `x` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the `y` coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the first defining point.
    #[must_use]
    pub fn s(&self) -> &Point2D {
        &self.s
    }

    /// Returns the second defining point.
    #[must_use]
    pub fn t(&self) -> &Point2D {
        &self.t
    }

    /// Returns the (unnormalized) normal vector `(a, b)`.
    #[must_use]
    pub fn normal(&self) -> Point2D {
        Point2D::new(self.a, self.b)
    }

    /// Returns the direction vector `t - s`.
    #[must_use]
    pub fn direction(&self) -> Point2D {
        self.t - self.s
    }

    /// Returns the canonical representative of this line.
    ///
    /// Coefficients are scaled so that `a² + b² = 1`, then negated if `a < 0`
    /// or if `a = 0` and `b < 0`. The defining points are swapped on negation
    /// so the direction still agrees with `(b, -a)`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let z = self.a.hypot(self.b);
        let (a, b, c) = (self.a / z, self.b / z, self.c / z);
        if sign(a) == -1 || (is_zero(a) && sign(b) == -1) {
            Self {
                a: -a,
                b: -b,
                c: -c,
                s: self.t,
                t: self.s,
            }
        } else {
            Self {
                a,
                b,
                c,
                s: self.s,
                t: self.t,
            }
        }
    }

    /// Signed perpendicular distance from `p`, positive to the left of `s → t`.
    #[must_use]
    pub fn signed_distance(&self, p: &Point2D) -> f64 {
        (self.a * p.x + self.b * p.y + self.c) / self.a.hypot(self.b)
    }

    /// Returns `true` if both lines have the same direction (possibly coincident).
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        let m = self.normalized();
        let n = other.normalized();
        is_zero(cross_scalars(m.a, m.b, n.a, n.b))
    }

    /// Returns `true` if both lines describe the same point set.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        let m = self.normalized();
        let n = other.normalized();
        is_zero(cross_scalars(m.a, m.b, n.a, n.b))
            && is_zero(cross_scalars(m.a, m.c, n.a, n.c))
            && is_zero(cross_scalars(m.b, m.c, n.b, n.c))
    }

    /// Returns the intersection point with `other`, or `None` if the lines are parallel.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point2D> {
        intersect_2d::line_line(self, other)
    }

    /// Returns the perpendicular distance from `p` to this line.
    #[must_use]
    pub fn distance_to_point(&self, p: &Point2D) -> f64 {
        distance_2d::point_line(p, self)
    }

    /// Returns the distance to `other`; zero unless the lines are parallel and distinct.
    #[must_use]
    pub fn distance_to_line(&self, other: &Self) -> f64 {
        distance_2d::line_line_dist(self, other)
    }

    /// Returns `true` if the closed segment `seg` meets this line.
    #[must_use]
    pub fn intersects_segment(&self, seg: &Segment2D) -> bool {
        intersect_2d::segment_line(seg, self)
    }

    /// Returns the distance to `seg`; zero when they meet.
    #[must_use]
    pub fn distance_to_segment(&self, seg: &Segment2D) -> f64 {
        distance_2d::line_segment_dist(self, seg)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn from_points_coefficients() {
        let line = Line2D::from_points(p(0.0, 1.0), p(2.0, 1.0)).unwrap();
        // y = 1  →  0·x + 2·y - 2 = 0
        assert_relative_eq!(line.a(), 0.0);
        assert_relative_eq!(line.b(), 2.0);
        assert_relative_eq!(line.c(), -2.0);
        let dir = line.direction();
        assert_relative_eq!(dir.x, line.b());
        assert_relative_eq!(dir.y, -line.a());
    }

    #[test]
    fn from_points_coincident_errors() {
        assert!(Line2D::from_points(p(1.0, 1.0), p(1.0, 1.0)).is_err());
    }

    #[test]
    fn from_coefficients_zero_normal_errors() {
        assert!(Line2D::from_coefficients(0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn from_coefficients_through_origin_has_distinct_points() {
        let line = Line2D::from_coefficients(1.0, -1.0, 0.0).unwrap();
        assert!(line.direction().norm() > 0.5);
        for q in [line.s(), line.t()] {
            assert_relative_eq!(line.a() * q.x + line.b() * q.y + line.c(), 0.0);
        }
    }

    #[test]
    fn from_coefficients_points_lie_on_line() {
        let line = Line2D::from_coefficients(3.0, 4.0, -12.0).unwrap();
        for q in [line.s(), line.t()] {
            assert_relative_eq!(3.0 * q.x + 4.0 * q.y - 12.0, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalized_is_canonical() {
        let line = Line2D::from_coefficients(-3.0, -4.0, 10.0).unwrap().normalized();
        assert_relative_eq!(line.a(), 0.6);
        assert_relative_eq!(line.b(), 0.8);
        assert_relative_eq!(line.c(), -2.0);

        let horizontal = Line2D::from_coefficients(0.0, -2.0, 4.0).unwrap().normalized();
        assert_relative_eq!(horizontal.a(), 0.0);
        assert_relative_eq!(horizontal.b(), 1.0);
        assert_relative_eq!(horizontal.c(), -2.0);
        let dir = horizontal.direction();
        assert!(dir.x > 0.0);
    }

    #[test]
    fn equivalent_from_different_points() {
        let m = Line2D::from_points(p(0.0, 0.0), p(1.0, 2.0)).unwrap();
        let n = Line2D::from_points(p(3.0, 6.0), p(-2.0, -4.0)).unwrap();
        assert!(m.is_parallel(&n));
        assert!(m.is_equivalent(&n));

        let shifted = Line2D::from_points(p(0.0, 1.0), p(1.0, 3.0)).unwrap();
        assert!(m.is_parallel(&shifted));
        assert!(!m.is_equivalent(&shifted));
    }

    #[test]
    fn segment_queries() {
        let line = Line2D::from_coefficients(0.0, 1.0, -1.0).unwrap();
        let crossing = Segment2D::new(p(0.0, 0.0), p(0.0, 2.0));
        let above = Segment2D::new(p(0.0, 4.0), p(3.0, 3.0));
        assert!(line.intersects_segment(&crossing));
        assert!(line.distance_to_segment(&crossing).abs() < 1e-12);
        assert!(!line.intersects_segment(&above));
        assert_relative_eq!(line.distance_to_segment(&above), 2.0);
        let other = Line2D::from_coefficients(0.0, 2.0, 6.0).unwrap();
        assert_relative_eq!(line.distance_to_line(&other), 4.0);
        let r = line.intersection(&Line2D::from_coefficients(1.0, 0.0, -5.0).unwrap()).unwrap();
        assert_relative_eq!(r.x, 5.0);
        assert_relative_eq!(r.y, 1.0);
    }

    #[test]
    fn tiny_coefficients_are_a_valid_line() {
        let line = Line2D::from_coefficients(1e-10, 1e-10, 0.0).unwrap();
        assert_relative_eq!(line.direction().norm(), 1.0, epsilon = 1e-12);
        assert!(Line2D::from_points(p(0.0, 0.0), p(1e-10, 1e-10)).is_ok());
        assert!(Line2D::from_coefficients(1e-20, 0.0, 1.0).is_err());
    }

    #[test]
    fn signed_distance_is_positive_on_the_left() {
        let line = Line2D::from_points(p(0.0, 0.0), p(2.0, 0.0)).unwrap();
        assert_relative_eq!(line.signed_distance(&p(5.0, 3.0)), 3.0);
        assert_relative_eq!(line.signed_distance(&p(-1.0, -0.5)), -0.5);
        // Direction (-7, 0) points the other way, so the sides swap.
        let reversed = Line2D::from_coefficients(0.0, -7.0, 0.0).unwrap();
        assert_relative_eq!(reversed.signed_distance(&p(5.0, 3.0)), -3.0);
    }

    #[test]
    fn scaled_coefficients_answer_alike() {
        let near = Segment2D::new(p(1.000_5, 0.0), p(1.001, 5.0));
        let across = Segment2D::new(p(0.0, 1.0), p(2.0, 3.0));
        let other = Line2D::from_coefficients(0.0, 1.0, -2.0).unwrap();
        for k in [1e-6, 1.0, 1e6] {
            let line = Line2D::from_coefficients(k, 0.0, -k).unwrap();
            assert!(line.is_equivalent(&Line2D::from_coefficients(1.0, 0.0, -1.0).unwrap()));
            assert!(!line.intersects_segment(&near), "k = {k}");
            assert_relative_eq!(line.distance_to_segment(&near), 0.000_5, epsilon = 1e-9);
            assert!(line.intersects_segment(&across), "k = {k}");
            assert_relative_eq!(line.distance_to_point(&p(4.0, 9.0)), 3.0, epsilon = 1e-9);
            let r = line.intersection(&other).unwrap();
            assert_relative_eq!(r.x, 1.0, epsilon = 1e-9);
            assert_relative_eq!(r.y, 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn equivalent_between_constructions() {
        let m = Line2D::from_points(p(0.0, 2.0), p(2.0, 0.0)).unwrap();
        let n = Line2D::from_coefficients(5.0, 5.0, -10.0).unwrap();
        assert!(m.is_equivalent(&n));
    }
}
