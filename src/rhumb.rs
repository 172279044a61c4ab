//! Rhumb-line (loxodrome) navigation formulas
//!
//! A rhumb line keeps a constant compass bearing and shows up as a straight
//! line on a Mercator projection. Longitude differences are taken the short
//! way round, across the anti-meridian where that is shorter.

use crate::error::{Result, check_finite, check_radius};
use crate::types::Point;
use crate::utils::angle::{EPSILON, normalize_bearing, wrap_pi};
use log::trace;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Mercator projected ("stretched") latitude of a latitude in radians
///
/// The poles project to ±∞.
fn stretched_latitude(lat: f64) -> f64 {
    if lat >= FRAC_PI_2 {
        f64::INFINITY
    } else if lat <= -FRAC_PI_2 {
        f64::NEG_INFINITY
    } else {
        (FRAC_PI_4 + lat / 2.0).tan().ln()
    }
}

fn is_pole(point: &Point) -> bool {
    point.lat().abs() == 90.0
}

/// Difference of stretched latitudes between `lat1` and `lat2`
///
/// Both latitudes on the same pole project to the same infinity, whose
/// difference is reported as zero.
fn stretched_latitude_difference(lat1: f64, lat2: f64) -> f64 {
    let delta = stretched_latitude(lat2) - stretched_latitude(lat1);
    if delta.is_nan() { 0.0 } else { delta }
}

/// Ratio between latitude and stretched-latitude differences
///
/// Becomes 0/0 along a parallel; there the cosine of the latitude is used.
/// Towards a pole the stretched difference is infinite and the factor is
/// zero, so any longitude difference drops out.
fn stretch_factor(lat1: f64, delta_lat: f64, delta_psi: f64) -> f64 {
    if delta_psi.abs() > EPSILON {
        delta_lat / delta_psi
    } else {
        trace!("Rhumb line runs along a parallel, using cos(lat) stretch factor");
        lat1.cos()
    }
}

impl Point {
    /// Angular length of the rhumb line to `other` in radians
    pub fn rhumb_angular_distance_to(&self, other: &Point) -> f64 {
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let delta_lat = lat2 - lat1;
        let delta_lon = wrap_pi(other.lon_rad() - self.lon_rad());

        let delta_psi = stretched_latitude_difference(lat1, lat2);
        let q = stretch_factor(lat1, delta_lat, delta_psi);

        // Pythagoras on the stretched Mercator projection
        (delta_lat * delta_lat + q * q * delta_lon * delta_lon).sqrt()
    }

    /// Length of the rhumb line to `other`, in the unit of `radius`
    pub fn rhumb_distance_to(&self, other: &Point, radius: f64) -> Result<f64> {
        let radius = check_radius(radius)?;
        Ok(self.rhumb_angular_distance_to(other) * radius)
    }

    /// Constant compass bearing of the rhumb line to `other`, in degrees
    /// [0, 360)
    pub fn rhumb_bearing_to(&self, other: &Point) -> f64 {
        let delta_lon = wrap_pi(other.lon_rad() - self.lon_rad());
        let delta_psi = stretched_latitude_difference(self.lat_rad(), other.lat_rad());

        normalize_bearing(delta_lon.atan2(delta_psi).to_degrees())
    }

    /// Point reached after travelling `distance` along the rhumb line on
    /// `bearing`
    ///
    /// A path that runs over a pole continues down the opposite meridian,
    /// as often as the distance takes it round.
    pub fn rhumb_destination_point(
        &self,
        distance: f64,
        bearing: f64,
        radius: f64,
    ) -> Result<Point> {
        let distance = check_finite("distance", distance)?;
        let bearing = check_finite("bearing", bearing)?;
        let radius = check_radius(radius)?;

        if distance == 0.0 {
            return Ok(*self);
        }

        let delta = check_finite("distance", distance / radius)?;
        let theta = normalize_bearing(bearing).to_radians();
        let lat1 = self.lat_rad();
        let mut lon1 = self.lon_rad();

        let delta_lat = delta * theta.cos();
        let mut lat2 = lat1 + delta_lat;
        if lat2.abs() > FRAC_PI_2 {
            trace!("Rhumb line from {self:?} passes over a pole");
            // position on the meridian circle, in [-π, π)
            lat2 = (lat2 + PI).rem_euclid(2.0 * PI) - PI;
            if lat2.abs() > FRAC_PI_2 {
                lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
                lon1 += PI;
            }
        }

        let delta_psi = stretched_latitude_difference(lat1, lat2);
        let q = stretch_factor(lat1, delta_lat, delta_psi);

        let delta_lon = delta * theta.sin() / q;
        let delta_lon = if delta_lon.is_finite() { delta_lon } else { 0.0 };

        Ok(Point::from_radians(lat2, lon1 + delta_lon))
    }

    /// Point halfway along the rhumb line to `other`
    ///
    /// The latitude is the mean latitude; the longitude is interpolated
    /// linearly in stretched latitude, which keeps the point on the
    /// rhumb line. Along a parallel the mean longitude is used, and
    /// towards a pole the longitude of the other end.
    pub fn rhumb_midpoint_to(&self, other: &Point) -> Point {
        if is_pole(self) || is_pole(other) {
            let lat3 = (self.lat_rad() + other.lat_rad()) / 2.0;
            let lon3 = if is_pole(self) { other.lon_rad() } else { self.lon_rad() };
            return Point::from_radians(lat3, lon3);
        }

        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let lon1 = self.lon_rad();
        let delta_lon = wrap_pi(other.lon_rad() - lon1);

        let lat3 = (lat1 + lat2) / 2.0;
        let delta_psi = stretched_latitude_difference(lat1, lat2);

        let lon3 = if delta_psi.abs() > EPSILON {
            let progress = (stretched_latitude(lat3) - stretched_latitude(lat1)) / delta_psi;
            lon1 + delta_lon * progress
        } else {
            lon1 + delta_lon / 2.0
        };

        Point::from_radians(lat3, lon3)
    }
}
