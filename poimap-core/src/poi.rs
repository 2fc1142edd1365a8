use geo::Coord;
use thiserror::Error;

use crate::Category;

/// Valid latitude range in degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A named location shown on the map.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use poimap_core::{Category, PointOfInterest};
///
/// # fn main() -> Result<(), poimap_core::PointOfInterestError> {
/// let poi = PointOfInterest::new(
///     "CFB Trenton",
///     "Air Mobility hub",
///     Coord { x: -77.5281, y: 44.1189 },
///     "🇨🇦",
///     "Canada",
/// )?
/// .with_country_code("ca")
/// .with_category(Category::Air);
///
/// assert_eq!(poi.latitude(), 44.1189);
/// assert_eq!(poi.category, Category::Air);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "wire::PoiRecord", try_from = "wire::PoiRecord")
)]
pub struct PointOfInterest {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Presentation glyph, usually a flag emoji.
    pub flag: String,
    /// Country display name, e.g. `Canada`.
    pub country: String,
    /// Lowercase ISO alpha-2 code, or `nato`. Empty when unknown.
    pub country_code: String,
    /// Service branch.
    pub category: Category,
}

/// Errors returned by [`PointOfInterest::new`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PointOfInterestError {
    /// The name was empty or whitespace.
    #[error("point of interest must have a name")]
    MissingName,
    /// Latitude fell outside `[-90, 90]` or was not finite.
    #[error("latitude {latitude} is outside the range [-90, 90]")]
    LatitudeOutOfRange {
        /// Rejected latitude in degrees.
        latitude: f64,
    },
    /// Longitude fell outside `[-180, 180]` or was not finite.
    #[error("longitude {longitude} is outside the range [-180, 180]")]
    LongitudeOutOfRange {
        /// Rejected longitude in degrees.
        longitude: f64,
    },
}

impl PointOfInterest {
    /// Validate and construct a [`PointOfInterest`].
    ///
    /// The country code starts empty and the category defaults to
    /// [`Category::Army`].
    ///
    /// # Errors
    /// Returns [`PointOfInterestError`] when the name is blank or the
    /// coordinates are out of range.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: Coord<f64>,
        flag: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, PointOfInterestError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PointOfInterestError::MissingName);
        }
        if !LATITUDE_RANGE.contains(&location.y) {
            return Err(PointOfInterestError::LatitudeOutOfRange {
                latitude: location.y,
            });
        }
        if !LONGITUDE_RANGE.contains(&location.x) {
            return Err(PointOfInterestError::LongitudeOutOfRange {
                longitude: location.x,
            });
        }
        Ok(Self {
            name,
            description: description.into(),
            location,
            flag: flag.into(),
            country: country.into(),
            country_code: String::new(),
            category: Category::default(),
        })
    }

    /// Set the flag-image country code.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Set the service branch.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

#[cfg(feature = "serde")]
mod wire {
    use geo::Coord;
    use serde::{Deserialize, Serialize};

    use super::{PointOfInterest, PointOfInterestError};
    use crate::Category;

    /// Flat JSON shape served by the API.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub(super) struct PoiRecord {
        name: String,
        description: String,
        latitude: f64,
        longitude: f64,
        flag: String,
        country: String,
        #[serde(default)]
        country_code: String,
        #[serde(default)]
        category: Category,
    }

    impl From<PointOfInterest> for PoiRecord {
        fn from(poi: PointOfInterest) -> Self {
            Self {
                name: poi.name,
                description: poi.description,
                latitude: poi.location.y,
                longitude: poi.location.x,
                flag: poi.flag,
                country: poi.country,
                country_code: poi.country_code,
                category: poi.category,
            }
        }
    }

    impl TryFrom<PoiRecord> for PointOfInterest {
        type Error = PointOfInterestError;

        fn try_from(record: PoiRecord) -> Result<Self, Self::Error> {
            let location = Coord {
                x: record.longitude,
                y: record.latitude,
            };
            Ok(Self::new(
                record.name,
                record.description,
                location,
                record.flag,
                record.country,
            )?
            .with_country_code(record.country_code)
            .with_category(record.category))
        }
    }
}
