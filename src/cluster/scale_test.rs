#[cfg(test)]
mod tests {
    use crate::cluster::{Cluster, Point, RadiusScale};

    fn clusters(counts: &[usize]) -> Vec<Cluster> {
        counts
            .iter()
            .map(|&count| Cluster {
                centroid: Point([0.0, 0.0]),
                count,
            })
            .collect()
    }

    #[test]
    fn test_max_count_gets_max_radius() {
        let scale = RadiusScale::fit(&clusters(&[1, 4, 9]), 15.0);
        assert_eq!(scale.radius(9), 15.0);
    }

    #[test]
    fn test_zero_count_gets_zero_radius() {
        let scale = RadiusScale::fit(&clusters(&[1, 4, 9]), 15.0);
        assert_eq!(scale.radius(0), 0.0);
    }

    #[test]
    fn test_sqrt_relationship() {
        // Quartering the count halves the radius
        let scale = RadiusScale::fit(&clusters(&[16]), 12.0);
        assert!((scale.radius(4) - 6.0).abs() < 1e-12);
        assert!((scale.radius(1) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_cluster_set() {
        let scale = RadiusScale::fit(&[], 15.0);
        assert_eq!(scale.radius(0), 0.0);
        assert_eq!(scale.radius(5), 0.0);
    }

    #[test]
    fn test_refit_tracks_new_max() {
        let before = RadiusScale::fit(&clusters(&[100]), 15.0);
        let after = RadiusScale::fit(&clusters(&[4]), 15.0);
        assert!(before.radius(4) < after.radius(4));
        assert_eq!(after.radius(4), 15.0);
    }
}
