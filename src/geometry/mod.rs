mod line;
mod plane;
mod polygon;
mod segment;

pub use line::Line2D;
pub use plane::Plane;
pub use polygon::Polygon2D;
pub use segment::Segment2D;
