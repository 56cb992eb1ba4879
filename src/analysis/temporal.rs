use crate::filter::date::open_at;
use crate::museum::Museum;

/// Opening years flagged as data-collection artifacts
///
/// The survey batched unknown opening dates onto these two years; paired
/// with a 2017 closure they spike the time series without describing real
/// museums. They stay on the map, only aggregation drops them.
const ARTIFACT_OPENING_YEARS: [f64; 2] = [1945.0, 1960.0];
const ARTIFACT_CLOSING_YEAR: f64 = 2017.0;

/// Number of museums open in a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Flags rows whose open/close years are known survey artifacts
pub fn is_collection_artifact(museum: &Museum) -> bool {
    ARTIFACT_OPENING_YEARS.contains(&museum.year_opened_low)
        && museum.year_closed_low == ARTIFACT_CLOSING_YEAR
}

/// Counts museums open at each year of a closed range
///
/// `indices` selects the subset to aggregate (typically the
/// region-filtered set, so the series spans all years). Artifact rows are
/// excluded here and only here; the map still shows them.
pub fn openings_series(
    museums: &[Museum],
    indices: &[usize],
    from: i32,
    to: i32,
) -> Vec<YearCount> {
    (from..=to)
        .map(|year| YearCount {
            year,
            count: indices
                .iter()
                .filter(|&&i| {
                    let m = &museums[i];
                    !is_collection_artifact(m) && open_at(m, year as f64)
                })
                .count(),
        })
        .collect()
}
