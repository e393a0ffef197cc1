use std::cmp::Ordering;

use super::{sign, Point2D, Point3D, EPS};
use crate::error::{GeometryError, Result};

/// Dot product of two 2D vectors.
#[must_use]
pub fn dot(a: &Point2D, b: &Point2D) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Dot product of two 3D vectors.
#[must_use]
pub fn dot_3d(a: &Point3D, b: &Point3D) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Squared length of `a`.
#[must_use]
pub fn norm(a: &Point2D) -> f64 {
    dot(a, a)
}

/// Squared length of `a`.
#[must_use]
pub fn norm_3d(a: &Point3D) -> f64 {
    dot_3d(a, a)
}

/// Euclidean length of `a`.
#[must_use]
pub fn abs(a: &Point2D) -> f64 {
    norm(a).sqrt()
}

/// Euclidean length of `a`.
#[must_use]
pub fn abs_3d(a: &Point3D) -> f64 {
    norm_3d(a).sqrt()
}

/// Scalar cross product (signed area of the parallelogram spanned by `a` and `b`).
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross(a: &Point2D, b: &Point2D) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Determinant of the 2x2 matrix `[[a, b], [c, d]]`, i.e. `a*d - b*c`.
#[must_use]
pub fn cross_scalars(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// 3D cross product.
#[must_use]
pub fn cross_3d(a: &Point3D, b: &Point3D) -> Point3D {
    Point3D::new(
        a.y * b.z - b.y * a.z,
        a.z * b.x - b.z * a.x,
        a.x * b.y - b.x * a.y,
    )
}

/// Signed volume of the parallelepiped spanned by `a`, `b`, `c`.
///
/// Zero iff the three vectors are coplanar.
#[must_use]
pub fn triple(a: &Point3D, b: &Point3D, c: &Point3D) -> f64 {
    dot_3d(a, &cross_3d(b, c))
}

/// Length of the projection of `a` onto `b`.
///
/// `b` must be non-zero; the result is not finite otherwise.
#[must_use]
pub fn proj(a: &Point2D, b: &Point2D) -> f64 {
    dot(a, b) / abs(b)
}

/// Angle between `a` and `b` in `[0, π]`.
///
/// Both vectors must be non-zero.
#[must_use]
pub fn angle(a: &Point2D, b: &Point2D) -> f64 {
    // Rounding can push the cosine just past ±1.
    (dot(a, b) / (abs(a) * abs(b))).clamp(-1.0, 1.0).acos()
}

/// Polar angle of `a` measured from the positive x-axis, in `(-π, π]`.
#[must_use]
pub fn arg(a: &Point2D) -> f64 {
    a.y.atan2(a.x)
}

/// Complex multiplication, treating `(x, y)` as `x + iy`.
///
/// Multiplying by a unit vector rotates by that vector's polar angle.
#[must_use]
pub fn complex_mul(a: &Point2D, b: &Point2D) -> Point2D {
    Point2D::new(a.x * b.x - a.y * b.y, a.x * b.y + a.y * b.x)
}

/// Returns `a` scaled to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `a` is shorter than `EPS`.
pub fn normalize(a: &Point2D) -> Result<Point2D> {
    let len = abs(a);
    if len < EPS {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(a / len)
}

/// Returns `a` scaled to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `a` is shorter than `EPS`.
pub fn normalize_3d(a: &Point3D) -> Result<Point3D> {
    let len = abs_3d(a);
    if len < EPS {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(a / len)
}

fn ordering_of(s: i32) -> Ordering {
    s.cmp(&0)
}

/// Orders points by `y`, then `x`, using the epsilon sign.
///
/// Coordinates within `EPS` of each other compare equal, so this is not a
/// strict weak ordering for clusters of points closer than `EPS`. Sorting with
/// it is only meaningful for well-separated inputs.
#[must_use]
pub fn compare_yx(a: &Point2D, b: &Point2D) -> Ordering {
    match sign(a.y - b.y) {
        0 => ordering_of(sign(a.x - b.x)),
        s => ordering_of(s),
    }
}

/// Orders points by `x`, then `y`, then `z`, using the epsilon sign.
///
/// Same caveat as [`compare_yx`].
#[must_use]
pub fn compare_xyz(a: &Point3D, b: &Point3D) -> Ordering {
    [a.x - b.x, a.y - b.y, a.z - b.z]
        .into_iter()
        .map(sign)
        .find(|&s| s != 0)
        .map_or(Ordering::Equal, ordering_of)
}
