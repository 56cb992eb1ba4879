use super::point::Cluster;

/// Default maximum point radius in pixels
pub const DEFAULT_MAX_RADIUS: f64 = 15.0;

/// Maps cluster size to a visual radius via a square-root scale
///
/// A count of zero maps to radius zero and the largest count in the
/// fitted cluster set maps to `max_radius`, with radius proportional to
/// the square root of the count in between (circle area tracks count).
///
/// The scale is tied to one cluster set: refit it whenever the underlying
/// point set changes, since the maximum count shifts with the filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    max_count: usize,
    max_radius: f64,
}

impl RadiusScale {
    /// Fits a scale to the largest count in `clusters`
    pub fn fit(clusters: &[Cluster], max_radius: f64) -> Self {
        let max_count = clusters.iter().map(|c| c.count).max().unwrap_or(0);
        RadiusScale {
            max_count,
            max_radius,
        }
    }

    /// Radius in pixels for a cluster of `count` points
    pub fn radius(&self, count: usize) -> f64 {
        if self.max_count == 0 || count == 0 {
            return 0.0;
        }
        self.max_radius * (count as f64 / self.max_count as f64).sqrt()
    }
}
