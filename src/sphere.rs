//! Sphere configuration for distance-based calculations

use crate::error::{Result, check_radius};
use crate::types::{EARTH_RADIUS, Point};

/// A sphere of a given radius
///
/// Holds the radius used to turn angular results into distances, so callers
/// don't have to pass it to every calculation. The default is the mean
/// Earth radius in meters ([`EARTH_RADIUS`]); distances are returned in
/// the unit of the radius.
///
/// # Example
///
/// ```
/// use spherical_nav::{Point, Sphere};
///
/// let km = Sphere::with_radius(6371.0).unwrap();
/// let cambridge = Point::new(52.205, 0.119).unwrap();
/// let paris = Point::new(48.857, 2.351).unwrap();
///
/// assert_eq!(format!("{:.1}", km.distance(&cambridge, &paris)), "404.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS,
        }
    }
}

impl Sphere {
    /// Create a sphere with a custom radius
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) unless
    /// the radius is finite and positive.
    pub fn with_radius(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: check_radius(radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Great-circle distance between two points
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        a.angular_distance_to(b) * self.radius
    }

    /// Great-circle destination from `from` after `distance` on `bearing`
    pub fn destination(&self, from: &Point, distance: f64, bearing: f64) -> Result<Point> {
        from.destination_point(distance, bearing, self.radius)
    }

    /// Signed distance of `point` from the path `path_start` → `path_end`
    pub fn cross_track_distance(
        &self,
        point: &Point,
        path_start: &Point,
        path_end: &Point,
    ) -> Result<f64> {
        point.cross_track_distance_to(path_start, path_end, self.radius)
    }

    /// Distance along the path `path_start` → `path_end` to the point
    /// closest to `point`
    pub fn along_track_distance(
        &self,
        point: &Point,
        path_start: &Point,
        path_end: &Point,
    ) -> Result<f64> {
        point.along_track_distance_to(path_start, path_end, self.radius)
    }

    /// Rhumb-line distance between two points
    pub fn rhumb_distance(&self, a: &Point, b: &Point) -> f64 {
        a.rhumb_angular_distance_to(b) * self.radius
    }

    /// Rhumb-line destination from `from` after `distance` on `bearing`
    pub fn rhumb_destination(&self, from: &Point, distance: f64, bearing: f64) -> Result<Point> {
        from.rhumb_destination_point(distance, bearing, self.radius)
    }
}
