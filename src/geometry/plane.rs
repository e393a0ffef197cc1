use crate::error::{GeometryError, Result};
use crate::math::vector::{abs_3d, dot_3d};
use crate::math::{Point3D, EPS};

/// An infinite plane in 3D space, given by a point on it and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3D,
    normal: Point3D,
}

impl Plane {
    /// Creates a plane through `origin` perpendicular to `normal`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the normal has zero length.
    pub fn from_normal(origin: Point3D, normal: Point3D) -> Result<Self> {
        let len = abs_3d(&normal);
        if len < EPS {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Returns the point the plane was built from.
    #[must_use]
    pub fn origin(&self) -> &Point3D {
        &self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Point3D {
        &self.normal
    }

    /// Signed distance of `p` from the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, p: &Point3D) -> f64 {
        dot_3d(&self.normal, &(p - self.origin))
    }
}
