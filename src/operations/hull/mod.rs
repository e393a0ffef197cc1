mod convex_hull;
mod farthest_pair;

pub use convex_hull::ConvexHull;
pub use farthest_pair::{diameter, FarthestPair, FarthestPairResult};
