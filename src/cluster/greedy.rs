use super::distance::distance_haversine;
use super::point::{Cluster, Point, PointList};

/// Default merge threshold in kilometers
pub const DEFAULT_CLUSTER_RADIUS_KM: f64 = 40.0;

// Greedy clustering pseudocode:
//
// cluster(points, maxDist)
//    clusters = []
//    for each point P in input order
//       best = cluster whose centroid is closest to P
//              with distance strictly less than maxDist
//       if best exists
//          merge P into best (running-mean centroid, count + 1)
//       else
//          append singleton cluster for P
//    return clusters

/// Groups points into clusters by merging each point into the closest
/// existing cluster within `max_distance_km`
///
/// Points are processed in input order. A point joins the cluster whose
/// current centroid is nearest among those strictly under the threshold
/// ("closest", not "first within threshold"); if none qualifies it opens
/// a new singleton cluster. Merging moves the centroid, so the result is
/// order-dependent: earlier assignments are never revisited.
///
/// Complexity is O(n * k) with k the number of clusters formed so far.
/// Fine for the target dataset sizes (low thousands of points); a spatial
/// index would be needed before this scales much further.
///
/// # Returns
///
/// Clusters in order of creation. Cluster counts always sum to the number
/// of input points.
pub fn cluster_points(points: &PointList, max_distance_km: f64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for &point in points {
        match nearest_cluster(&clusters, &point) {
            Some((i, d)) if d < max_distance_km => clusters[i].absorb(point),
            _ => clusters.push(Cluster::singleton(point)),
        }
    }

    clusters
}

/// Finds the closest cluster centroid to a point
///
/// # Returns
///
/// `(index, distance in km)` of the nearest cluster, or `None` for an
/// empty cluster list
pub fn nearest_cluster(clusters: &[Cluster], point: &Point) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (i, cluster) in clusters.iter().enumerate() {
        let d = distance_haversine(&cluster.centroid, point);
        if best.map(|(_, bd)| d < bd).unwrap_or(true) {
            best = Some((i, d));
        }
    }

    best
}
