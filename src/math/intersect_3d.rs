use super::vector::{dot_3d, triple};
use super::{Point3D, EPS};
use crate::geometry::Plane;

/// Common point of three planes.
///
/// Solves the 3x3 system `nᵢ · x = nᵢ · aᵢ` by Cramer's rule with the triple
/// product as determinant. Returns `None` if the planes do not meet in a
/// single point (two or more normals are coplanar).
#[must_use]
pub fn plane_plane_plane(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point3D> {
    let (n1, n2, n3) = (p1.normal(), p2.normal(), p3.normal());
    let det = triple(n1, n2, n3);
    if det.abs() < EPS {
        return None;
    }
    let x = Point3D::new(n1.x, n2.x, n3.x);
    let y = Point3D::new(n1.y, n2.y, n3.y);
    let z = Point3D::new(n1.z, n2.z, n3.z);
    let d = Point3D::new(
        dot_3d(p1.origin(), n1),
        dot_3d(p2.origin(), n2),
        dot_3d(p3.origin(), n3),
    );
    Some(Point3D::new(triple(&d, &y, &z), triple(&x, &d, &z), triple(&x, &y, &d)) / det)
}
