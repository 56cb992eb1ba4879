//! Package cluster implements greedy haversine clustering on (lat, lon)
pub mod distance;
pub mod greedy;
pub mod point;
pub mod scale;

#[cfg(test)]
mod scale_test;

pub use greedy::{DEFAULT_CLUSTER_RADIUS_KM, cluster_points};
pub use point::{Cluster, Point, PointList};
pub use scale::{DEFAULT_MAX_RADIUS, RadiusScale};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use distance::{DEGREE_RAD, EARTH_R, distance_haversine};
#[allow(unused_imports)]
pub use greedy::nearest_cluster;
