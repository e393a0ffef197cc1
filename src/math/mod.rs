pub mod distance_2d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod orientation;
pub mod polygon_2d;
pub mod projection;
pub mod vector;

/// 2D point type. Doubles as a free vector.
pub type Point2D = nalgebra::Vector2<f64>;

/// 3D point type. Doubles as a free vector.
pub type Point3D = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
pub const EPS: f64 = 1e-9;

/// Epsilon-aware sign: `-1` below `-EPS`, `+1` above `EPS`, `0` otherwise.
#[must_use]
pub fn sign(a: f64) -> i32 {
    if a < -EPS {
        -1
    } else if a > EPS {
        1
    } else {
        0
    }
}

/// Returns `true` if `|a| < EPS`.
#[must_use]
pub fn is_zero(a: f64) -> bool {
    a.abs() < EPS
}
