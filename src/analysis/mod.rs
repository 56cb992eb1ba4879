//! Derived aggregations consumed by the chart views
pub mod groups;
pub mod temporal;

#[cfg(test)]
mod groups_test;
#[cfg(test)]
mod temporal_test;

pub use groups::{
    CategoryCount, DeprivationMetric, GeodemographicLevel, deprivation_means,
    geodemographic_distribution, subject_distribution, subject_subtype_distribution,
};
pub use temporal::{YearCount, openings_series};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use temporal::is_collection_artifact;
