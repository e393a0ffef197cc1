pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanarError, Result};
pub use geometry::{Line2D, Plane, Polygon2D, Segment2D};
pub use math::orientation::Orientation;
pub use math::polygon_2d::Containment;
pub use math::{Point2D, Point3D, EPS};
