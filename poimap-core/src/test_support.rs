//! Test-only helpers for building points of interest.

use geo::Coord;

use crate::PointOfInterest;

/// Build a POI at the given latitude and longitude in a placeholder country.
///
/// # Panics
/// Panics when the coordinates are out of range; callers pass literals.
#[must_use]
pub fn poi_at(name: &str, lat: f64, lon: f64) -> PointOfInterest {
    match PointOfInterest::new(name, "", Coord { x: lon, y: lat }, "", "Canada") {
        Ok(poi) => poi,
        Err(err) => panic!("invalid test coordinates for {name}: {err}"),
    }
}

/// Build a POI at the origin belonging to `country`.
///
/// # Panics
/// Panics when `name` is blank.
#[must_use]
pub fn poi_in_country(name: &str, country: &str) -> PointOfInterest {
    match PointOfInterest::new(name, "", Coord { x: 0.0, y: 0.0 }, "", country) {
        Ok(poi) => poi,
        Err(err) => panic!("invalid test POI {name}: {err}"),
    }
}
