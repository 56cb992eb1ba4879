use std::collections::{BTreeMap, HashSet};

use clap::ValueEnum;

use crate::museum::Museum;

/// Count of museums sharing one category value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Which tier of the geodemographic classification to distribute over
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeodemographicLevel {
    Group,
    Supergroup,
}

/// Deprivation sub-index selector for the by-region bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeprivationMetric {
    Overall,
    Crime,
    Education,
    Employment,
    Health,
    Housing,
    Income,
}

impl DeprivationMetric {
    fn value(&self, museum: &Museum) -> f64 {
        match self {
            DeprivationMetric::Overall => museum.area_deprivation_index,
            DeprivationMetric::Crime => museum.area_deprivation_index_crime,
            DeprivationMetric::Education => museum.area_deprivation_index_education,
            DeprivationMetric::Employment => museum.area_deprivation_index_employment,
            DeprivationMetric::Health => museum.area_deprivation_index_health,
            DeprivationMetric::Housing => museum.area_deprivation_index_housing,
            DeprivationMetric::Income => museum.area_deprivation_index_income,
        }
    }
}

/// Museums per geodemographic group or supergroup over a filtered subset
///
/// Regions named in `excluded_regions` are dropped before counting: some
/// map-selectable regions carry no comparable geodemographic
/// classification (see `GEODEMOGRAPHIC_EXCLUSIONS` for the default set).
/// Rows with a blank classification are skipped.
pub fn geodemographic_distribution(
    museums: &[Museum],
    indices: &[usize],
    level: GeodemographicLevel,
    excluded_regions: &HashSet<String>,
) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for &i in indices {
        let m = &museums[i];
        if excluded_regions.contains(&m.admin_area_1) {
            continue;
        }
        let category = match level {
            GeodemographicLevel::Group => &m.area_geodemographic_group,
            GeodemographicLevel::Supergroup => &m.area_geodemographic_supergroup,
        };
        if !category.is_empty() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    sorted_counts(counts)
}

/// Museums per subject matter over a filtered subset
pub fn subject_distribution(museums: &[Museum], indices: &[usize]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for &i in indices {
        let m = &museums[i];
        if !m.subject_matter.is_empty() {
            *counts.entry(&m.subject_matter).or_insert(0) += 1;
        }
    }

    sorted_counts(counts)
}

/// Subtype breakdown within one subject matter
///
/// A museum may carry two subtypes; both contribute a count. Blank
/// subtype fields are skipped.
pub fn subject_subtype_distribution(
    museums: &[Museum],
    indices: &[usize],
    subject: &str,
) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for &i in indices {
        let m = &museums[i];
        if m.subject_matter != subject {
            continue;
        }
        for subtype in [&m.subject_matter_subtype_1, &m.subject_matter_subtype_2] {
            if !subtype.is_empty() {
                *counts.entry(subtype).or_insert(0) += 1;
            }
        }
    }

    sorted_counts(counts)
}

/// Mean deprivation index per region over a filtered subset
///
/// NaN index values are skipped; a region with no usable values is
/// omitted. Results are sorted by region name.
pub fn deprivation_means(
    museums: &[Museum],
    indices: &[usize],
    metric: DeprivationMetric,
) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for &i in indices {
        let m = &museums[i];
        let v = metric.value(m);
        if m.admin_area_1.is_empty() || v.is_nan() {
            continue;
        }
        let entry = sums.entry(&m.admin_area_1).or_insert((0.0, 0));
        entry.0 += v;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(region, (sum, n))| (region.to_string(), sum / n as f64))
        .collect()
}

/// Sorts category counts by count descending, ties broken by name
fn sorted_counts(counts: BTreeMap<&str, usize>) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    out
}
