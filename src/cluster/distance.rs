use std::f64::consts::PI;

use super::point::Point;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in kilometers
pub const EARTH_R: f64 = 6371.0;

/// Calculates great-circle distance between two points using the
/// haversine formula
///
/// NaN coordinates propagate to a NaN result.
///
/// # Returns
///
/// Distance in kilometers
pub fn distance_haversine(p1: &Point, p2: &Point) -> f64 {
    let lat1 = p1.lat() * DEGREE_RAD;
    let lat2 = p2.lat() * DEGREE_RAD;
    let dlat = (p2.lat() - p1.lat()) * DEGREE_RAD;
    let dlon = (p2.lon() - p1.lon()) * DEGREE_RAD;

    let sin_lat = (dlat / 2.0).sin();
    let sin_lon = (dlon / 2.0).sin();
    let a = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;

    // Rounding can push a marginally past 1 for near-antipodal pairs,
    // where asin would produce NaN
    if a >= 1.0 {
        return EARTH_R * PI;
    }

    2.0 * EARTH_R * a.sqrt().asin()
}
