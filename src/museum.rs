//! Museum dataset rows and CSV loading
//!
//! Rows come from a survey-derived CSV. Numeric fields are frequently
//! blank or unparseable; year and index fields degrade to NaN rather than
//! failing the row, and the filter predicates treat a NaN closing year as
//! "still open". Rows without usable coordinates are skipped and counted.

use std::fs::File;
use std::path::PathBuf;

use csv::ReaderBuilder;
use serde::{Deserialize, Deserializer};

use crate::cluster::Point;

/// One museum record
///
/// Immutable once loaded; filters borrow rows and never mutate them.
#[derive(Debug, Clone, Deserialize)]
pub struct Museum {
    pub latitude: f64,
    pub longitude: f64,
    /// Administrative region name, e.g. "Scotland" or "Isle of Man"
    #[serde(default)]
    pub admin_area_1: String,
    #[serde(default)]
    pub subject_matter: String,
    #[serde(default)]
    pub subject_matter_subtype_1: String,
    #[serde(default)]
    pub subject_matter_subtype_2: String,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub year_opened_low: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub year_opened_high: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub year_closed_low: f64,
    /// Recorded for completeness; the filter predicates key on the low bound
    #[allow(dead_code)]
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub year_closed_high: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index_crime: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index_education: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index_employment: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index_health: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index_housing: f64,
    #[serde(default = "nan", deserialize_with = "nan_when_blank")]
    pub area_deprivation_index_income: f64,
    #[serde(default)]
    pub area_geodemographic_group: String,
    #[serde(default)]
    pub area_geodemographic_supergroup: String,
}

impl Museum {
    /// Location as a clustering point ([lon, lat])
    pub fn point(&self) -> Point {
        Point([self.longitude, self.latitude])
    }
}

impl Default for Museum {
    /// An entirely blank row: empty strings, NaN for every year and index
    fn default() -> Self {
        Museum {
            latitude: 0.0,
            longitude: 0.0,
            admin_area_1: String::new(),
            subject_matter: String::new(),
            subject_matter_subtype_1: String::new(),
            subject_matter_subtype_2: String::new(),
            year_opened_low: f64::NAN,
            year_opened_high: f64::NAN,
            year_closed_low: f64::NAN,
            year_closed_high: f64::NAN,
            area_deprivation_index: f64::NAN,
            area_deprivation_index_crime: f64::NAN,
            area_deprivation_index_education: f64::NAN,
            area_deprivation_index_employment: f64::NAN,
            area_deprivation_index_health: f64::NAN,
            area_deprivation_index_housing: f64::NAN,
            area_deprivation_index_income: f64::NAN,
            area_geodemographic_group: String::new(),
            area_geodemographic_supergroup: String::new(),
        }
    }
}

/// Result of loading a dataset
///
/// Per-row parse failures are not fatal: unusable rows are dropped and
/// counted here so callers can see partial failure explicitly.
#[derive(Debug)]
pub struct LoadSummary {
    pub museums: Vec<Museum>,
    pub skipped_rows: usize,
}

fn nan() -> f64 {
    f64::NAN
}

/// Blank or unparseable numeric fields become NaN instead of an error
fn nan_when_blank<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Reads museum rows from a CSV file with a header row
///
/// Rows that fail to decode, or whose latitude/longitude are not finite,
/// are skipped and reported in `LoadSummary::skipped_rows`.
pub fn read_museums(filename: &PathBuf) -> Result<LoadSummary, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut museums = Vec::new();
    let mut skipped_rows = 0;

    for result in reader.deserialize() {
        match result {
            Ok(museum) => {
                let museum: Museum = museum;
                if museum.latitude.is_finite() && museum.longitude.is_finite() {
                    museums.push(museum);
                } else {
                    skipped_rows += 1;
                }
            }
            Err(_) => skipped_rows += 1,
        }
    }

    Ok(LoadSummary {
        museums,
        skipped_rows,
    })
}
