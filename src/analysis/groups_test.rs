#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::analysis::groups::{
        DeprivationMetric, GeodemographicLevel, deprivation_means, geodemographic_distribution,
        subject_distribution, subject_subtype_distribution,
    };
    use crate::filter::region::GEODEMOGRAPHIC_EXCLUSIONS;
    use crate::museum::Museum;

    fn museum(region: &str, group: &str, subject: &str, index: f64) -> Museum {
        Museum {
            admin_area_1: region.to_string(),
            area_geodemographic_group: group.to_string(),
            area_geodemographic_supergroup: format!("Super {}", group),
            subject_matter: subject.to_string(),
            area_deprivation_index: index,
            ..Default::default()
        }
    }

    fn dataset() -> Vec<Museum> {
        vec![
            museum("England", "Urban Settlements", "Arts", 3.0),
            museum("England", "Urban Settlements", "War and conflict", 5.0),
            museum("Scotland", "Countryside Living", "Arts", 7.0),
            museum("Isle of Man", "", "Local Histories", f64::NAN),
        ]
    }

    #[test]
    fn test_geodemographic_distribution_counts_and_order() {
        let museums = dataset();
        let indices: Vec<usize> = (0..museums.len()).collect();
        let dist = geodemographic_distribution(
            &museums,
            &indices,
            GeodemographicLevel::Group,
            &HashSet::new(),
        );

        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].category, "Urban Settlements");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[1].category, "Countryside Living");
        assert_eq!(dist[1].count, 1);
    }

    #[test]
    fn test_geodemographic_supergroup_level() {
        let museums = dataset();
        let indices: Vec<usize> = (0..museums.len()).collect();
        let dist = geodemographic_distribution(
            &museums,
            &indices,
            GeodemographicLevel::Supergroup,
            &HashSet::new(),
        );

        assert_eq!(dist[0].category, "Super Urban Settlements");
        assert_eq!(dist[0].count, 2);
    }

    #[test]
    fn test_geodemographic_exclusion_set() {
        let museums = vec![
            museum("England", "Urban Settlements", "Arts", 3.0),
            museum("Ireland", "Urban Settlements", "Arts", 3.0),
        ];
        let excluded: HashSet<String> = GEODEMOGRAPHIC_EXCLUSIONS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let dist = geodemographic_distribution(
            &museums,
            &[0, 1],
            GeodemographicLevel::Group,
            &excluded,
        );
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].count, 1);
    }

    #[test]
    fn test_subject_distribution_ties_break_by_name() {
        let museums = dataset();
        let indices: Vec<usize> = (0..museums.len()).collect();
        let dist = subject_distribution(&museums, &indices);

        assert_eq!(dist[0].category, "Arts");
        assert_eq!(dist[0].count, 2);
        // Singletons sorted alphabetically
        assert_eq!(dist[1].category, "Local Histories");
        assert_eq!(dist[2].category, "War and conflict");
    }

    #[test]
    fn test_subject_subtype_distribution() {
        let mut a = museum("England", "Urban Settlements", "Arts", 1.0);
        a.subject_matter_subtype_1 = "Fine art".to_string();
        a.subject_matter_subtype_2 = "Sculpture".to_string();
        let mut b = museum("England", "Urban Settlements", "Arts", 1.0);
        b.subject_matter_subtype_1 = "Fine art".to_string();
        let other = museum("England", "Urban Settlements", "Transport", 1.0);

        let museums = vec![a, b, other];
        let dist = subject_subtype_distribution(&museums, &[0, 1, 2], "Arts");

        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].category, "Fine art");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[1].category, "Sculpture");
        assert_eq!(dist[1].count, 1);
    }

    #[test]
    fn test_deprivation_means_skip_nan() {
        let museums = dataset();
        let indices: Vec<usize> = (0..museums.len()).collect();
        let means = deprivation_means(&museums, &indices, DeprivationMetric::Overall);

        // Isle of Man has only a NaN value, so it drops out entirely
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].0, "England");
        assert!((means[0].1 - 4.0).abs() < 1e-12);
        assert_eq!(means[1].0, "Scotland");
        assert!((means[1].1 - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_deprivation_metric_selects_sub_index() {
        let mut m = museum("England", "Urban Settlements", "Arts", 1.0);
        m.area_deprivation_index_income = 9.0;
        let museums = vec![m];
        let means = deprivation_means(&museums, &[0], DeprivationMetric::Income);
        assert_eq!(means.len(), 1);
        assert!((means[0].1 - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_subset() {
        let museums = dataset();
        let no_exclusions = HashSet::new();
        let dist = geodemographic_distribution(
            &museums,
            &[],
            GeodemographicLevel::Group,
            &no_exclusions,
        );
        assert!(dist.is_empty());
        assert!(subject_distribution(&museums, &[]).is_empty());
        assert!(deprivation_means(&museums, &[], DeprivationMetric::Overall).is_empty());
    }
}
