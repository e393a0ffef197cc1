use super::vector::{abs, proj};
use super::{Point2D, EPS};
use crate::error::{GeometryError, Result};

/// Foot of the perpendicular dropped from `c` onto the line through `a` and `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `a` and `b` coincide.
pub fn foot_of_perpendicular(a: &Point2D, b: &Point2D, c: &Point2D) -> Result<Point2D> {
    let ab = b - a;
    let len = abs(&ab);
    if len < EPS {
        return Err(GeometryError::Degenerate(format!(
            "line through coincident points ({}, {})",
            a.x, a.y
        ))
        .into());
    }
    let t = proj(&(c - a), &ab);
    Ok(a + ab * (t / len))
}

/// Mirror image of `c` across the line through `a` and `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `a` and `b` coincide.
pub fn reflect_across_line(a: &Point2D, b: &Point2D, c: &Point2D) -> Result<Point2D> {
    let d = foot_of_perpendicular(a, b, c)?;
    Ok(c + (d - c) * 2.0)
}
