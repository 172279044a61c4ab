use crate::error::{Error, Result};
use crate::utils::angle::normalize_longitude;

/// Mean Earth radius in meters, the default radius for distance calculations
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// A point on the surface of the sphere
///
/// Coordinates are stored in degrees. The latitude is always within
/// [-90, 90] and the longitude is normalized into (-180, 180]. The poles
/// have a single representation with longitude `0`, so that equal
/// positions compare equal.
///
/// Points are immutable; every calculation returns a new point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Create a point from latitude and longitude in degrees
    ///
    /// The longitude is normalized into (-180, 180], and set to `0` at
    /// either pole. Returns
    /// [`Error::InvalidInput`] for non-finite coordinates or a latitude
    /// outside [-90, 90].
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidInput {
                what: "latitude",
                value: lat,
            });
        }
        if !lon.is_finite() {
            return Err(Error::InvalidInput {
                what: "longitude",
                value: lon,
            });
        }

        Ok(Self::canonical(lat, normalize_longitude(lon)))
    }

    fn canonical(lat: f64, lon: f64) -> Self {
        let lon = if lat.abs() == 90.0 { 0.0 } else { lon };
        Self { lat, lon }
    }

    /// Build a point from computed coordinates in radians
    ///
    /// Latitude overshoot from rounding is clamped back onto the pole.
    pub(crate) fn from_radians(lat: f64, lon: f64) -> Self {
        Self::canonical(
            lat.to_degrees().clamp(-90.0, 90.0),
            normalize_longitude(lon.to_degrees()),
        )
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = Error;

    /// Convert a `(lat, lon)` tuple in degrees
    fn try_from((lat, lon): (f64, f64)) -> Result<Self> {
        Self::new(lat, lon)
    }
}
