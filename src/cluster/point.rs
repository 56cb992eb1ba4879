//! Package cluster implements greedy haversine clustering on (lat, lon)

/// Point represents a geographic coordinate (longitude, latitude)
///
/// The point is stored as [longitude, latitude] where:
/// - `[0]` is longitude
/// - `[1]` is latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

impl Point {
    /// Longitude component in degrees
    pub fn lon(&self) -> f64 {
        self.0[0]
    }

    /// Latitude component in degrees
    pub fn lat(&self) -> f64 {
        self.0[1]
    }
}

/// Cluster is a group of nearby points reduced to a centroid and a count
///
/// The centroid is the count-weighted running mean of the member points;
/// it shifts slightly as points are absorbed. Clusters are rebuilt from
/// scratch whenever the input point set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Running-mean coordinate of the member points
    pub centroid: Point,
    /// Number of member points
    pub count: usize,
}

impl Cluster {
    /// Creates a cluster containing a single point
    pub fn singleton(point: Point) -> Self {
        Cluster {
            centroid: point,
            count: 1,
        }
    }

    /// Merges a point into the cluster
    ///
    /// The centroid becomes the count-weighted mean of the old centroid
    /// and the new point; the count grows by one.
    pub fn absorb(&mut self, point: Point) {
        let n = self.count as f64;
        for j in 0..2 {
            self.centroid.0[j] = (self.centroid.0[j] * n + point.0[j]) / (n + 1.0);
        }
        self.count += 1;
    }
}
