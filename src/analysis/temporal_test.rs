#[cfg(test)]
mod tests {
    use crate::analysis::temporal::{is_collection_artifact, openings_series};
    use crate::museum::Museum;

    fn museum(opened: f64, closed: f64) -> Museum {
        Museum {
            year_opened_low: opened,
            year_opened_high: opened,
            year_closed_low: closed,
            year_closed_high: closed,
            ..Default::default()
        }
    }

    #[test]
    fn test_series_counts_open_museums_per_year() {
        let museums = vec![
            museum(1990.0, f64::NAN),
            museum(1992.0, 1994.0),
            museum(1995.0, f64::NAN),
        ];
        let indices: Vec<usize> = (0..museums.len()).collect();
        let series = openings_series(&museums, &indices, 1990, 1995);

        let counts: Vec<usize> = series.iter().map(|yc| yc.count).collect();
        assert_eq!(counts, vec![1, 1, 2, 2, 1, 2]);
        assert_eq!(series[0].year, 1990);
        assert_eq!(series[5].year, 1995);
    }

    #[test]
    fn test_series_respects_subset_indices() {
        let museums = vec![museum(1990.0, f64::NAN), museum(1990.0, f64::NAN)];
        let series = openings_series(&museums, &[1], 1990, 1990);
        assert_eq!(series[0].count, 1);
    }

    #[test]
    fn test_artifact_rows_flagged() {
        assert!(is_collection_artifact(&museum(1945.0, 2017.0)));
        assert!(is_collection_artifact(&museum(1960.0, 2017.0)));
        assert!(!is_collection_artifact(&museum(1950.0, 2017.0)));
        assert!(!is_collection_artifact(&museum(1945.0, 2016.0)));
        assert!(!is_collection_artifact(&museum(1945.0, f64::NAN)));
    }

    #[test]
    fn test_artifact_rows_excluded_from_series() {
        let museums = vec![museum(1960.0, 2017.0), museum(1960.0, f64::NAN)];
        let indices = vec![0, 1];
        let series = openings_series(&museums, &indices, 2000, 2000);
        assert_eq!(series[0].count, 1);
    }

    #[test]
    fn test_empty_range_order() {
        let museums = vec![museum(1990.0, f64::NAN)];
        let series = openings_series(&museums, &[0], 2000, 1990);
        assert!(series.is_empty());
    }
}
