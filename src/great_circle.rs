//! Great-circle navigation formulas
//!
//! All calculations treat the Earth as a sphere. Angular quantities are
//! computed on the unit sphere and scaled by the radius passed in by the
//! caller, so distances come out in the unit of that radius.

use crate::error::{Error, Result, check_finite, check_radius};
use crate::types::{ParallelCrossing, Point};
use crate::utils::angle::{EPSILON, clamp_unit, normalize_bearing};
use crate::utils::vector::UnitVector;
use log::{debug, trace};
use std::f64::consts::PI;

/// The point diametrically opposite `point`
fn antipode(point: &Point) -> Point {
    Point::from_radians(-point.lat_rad(), point.lon_rad() + PI)
}

/// Whether two points are diametrically opposite
///
/// Uses the length of the summed unit vectors, which stays well
/// conditioned where the haversine distance approaches π.
fn is_antipodal(a: &Point, b: &Point) -> bool {
    let sum = UnitVector::from_point(a).combine(1.0, UnitVector::from_point(b), 1.0);
    sum.norm() < EPSILON
}

impl Point {
    /// Central angle between two points in radians (haversine formula)
    pub fn angular_distance_to(&self, other: &Point) -> f64 {
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let delta_lat = lat2 - lat1;
        let delta_lon = other.lon_rad() - self.lon_rad();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let a = clamp_unit(a);

        2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Great-circle distance to another point
    ///
    /// The result is in the unit of `radius`, e.g. meters for
    /// [`EARTH_RADIUS`](crate::EARTH_RADIUS). Returns
    /// [`Error::InvalidInput`] unless `radius` is finite and positive.
    pub fn distance_to(&self, other: &Point, radius: f64) -> Result<f64> {
        let radius = check_radius(radius)?;
        Ok(self.angular_distance_to(other) * radius)
    }

    /// Initial bearing from this point to `other` in degrees [0, 360)
    ///
    /// The bearing of a point to itself is undefined and reported as `0`.
    pub fn bearing_to(&self, other: &Point) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let delta_lon = other.lon_rad() - self.lon_rad();

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        normalize_bearing(y.atan2(x).to_degrees())
    }

    /// Bearing on arrival at `other` in degrees [0, 360)
    ///
    /// This is the reverse of the initial bearing from `other` back to
    /// this point, turned around by 180°.
    pub fn final_bearing_to(&self, other: &Point) -> f64 {
        normalize_bearing(other.bearing_to(self) + 180.0)
    }

    /// Point halfway along the great circle to `other`
    ///
    /// Antipodal points are joined by infinitely many great circles, so
    /// their midpoint is reported as [`Error::AmbiguousResult`].
    pub fn midpoint_to(&self, other: &Point) -> Result<Point> {
        let sum = UnitVector::from_point(self).combine(1.0, UnitVector::from_point(other), 1.0);
        if sum.norm() < EPSILON {
            debug!("No unique midpoint between antipodal points {self:?} and {other:?}");
            return Err(Error::AmbiguousResult(
                "antipodal points have no unique midpoint",
            ));
        }

        Ok(sum.to_point())
    }

    /// Point at `fraction` of the way along the great circle to `other`
    ///
    /// `0.0` returns this point, `1.0` returns `other`, and `0.5` matches
    /// [`Point::midpoint_to`]. Fractions outside [0, 1] extrapolate along
    /// the same great circle.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `fraction` is not finite
    /// - [`Error::AmbiguousResult`] for antipodal points and any fraction
    ///   other than `0.0` or `1.0`
    pub fn intermediate_point_to(&self, other: &Point, fraction: f64) -> Result<Point> {
        let fraction = check_finite("fraction", fraction)?;
        if fraction == 0.0 {
            return Ok(*self);
        }
        if fraction == 1.0 {
            return Ok(*other);
        }

        if is_antipodal(self, other) {
            debug!("No unique great circle between antipodal points {self:?} and {other:?}");
            return Err(Error::AmbiguousResult(
                "antipodal points have no unique great circle",
            ));
        }

        let delta = self.angular_distance_to(other);
        if delta < EPSILON {
            return Ok(*self);
        }

        let a = ((1.0 - fraction) * delta).sin() / delta.sin();
        let b = (fraction * delta).sin() / delta.sin();

        let v1 = UnitVector::from_point(self);
        let v2 = UnitVector::from_point(other);
        Ok(v1.combine(a, v2, b).to_point())
    }

    /// Point reached after travelling `distance` along a great circle
    /// starting on `bearing`
    ///
    /// `distance` is in the unit of `radius`. A zero distance returns this
    /// point unchanged; negative distances travel backwards.
    pub fn destination_point(&self, distance: f64, bearing: f64, radius: f64) -> Result<Point> {
        let distance = check_finite("distance", distance)?;
        let bearing = check_finite("bearing", bearing)?;
        let radius = check_radius(radius)?;

        if distance == 0.0 {
            return Ok(*self);
        }

        let delta = check_finite("distance", distance / radius)?;
        let theta = normalize_bearing(bearing).to_radians();
        let lat1 = self.lat_rad();

        let sin_lat2 = clamp_unit(lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos());
        let lat2 = sin_lat2.asin();

        let y = theta.sin() * delta.sin() * lat1.cos();
        let x = delta.cos() - lat1.sin() * sin_lat2;
        let lon2 = self.lon_rad() + y.atan2(x);

        Ok(Point::from_radians(lat2, lon2))
    }

    /// Intersection of two great-circle paths, each given by a start point
    /// and an initial bearing
    ///
    /// Two great circles meet in a pair of antipodal points; the one lying
    /// ahead of both bearings is returned. When one path runs along the
    /// line between the start points, the circles meet at the other start
    /// point, or at its antipode if the path leads away from it.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for non-finite bearings
    /// - [`Error::AmbiguousResult`] if the start points coincide and the
    ///   bearings are exactly opposite, or if the start points are antipodal
    /// - [`Error::NoIntersection`] if both paths run along the same great
    ///   circle, or if they leave the baseline on opposite sides
    pub fn intersection(p1: &Point, bearing1: f64, p2: &Point, bearing2: f64) -> Result<Point> {
        let bearing1 = normalize_bearing(check_finite("bearing", bearing1)?);
        let bearing2 = normalize_bearing(check_finite("bearing", bearing2)?);

        let delta12 = p1.angular_distance_to(p2);
        if delta12 < EPSILON {
            let turn = normalize_bearing(bearing1 - bearing2);
            if (turn - 180.0).abs() < EPSILON {
                debug!("Opposite bearings from the same point {p1:?}");
                return Err(Error::AmbiguousResult(
                    "opposite bearings from the same point",
                ));
            }
            return Ok(*p1);
        }

        if is_antipodal(p1, p2) {
            debug!("Every path from {p1:?} meets its antipode {p2:?}");
            return Err(Error::AmbiguousResult(
                "paths from antipodal points meet at both start points",
            ));
        }

        let theta13 = bearing1.to_radians();
        let theta23 = bearing2.to_radians();
        let theta12 = p1.bearing_to(p2).to_radians();
        let theta21 = p2.bearing_to(p1).to_radians();

        // angles 2-1-3 and 1-2-3 of the spherical triangle
        let alpha1 = theta13 - theta12;
        let alpha2 = theta21 - theta23;
        let (sin_alpha1, sin_alpha2) = (alpha1.sin(), alpha2.sin());

        let on_baseline1 = sin_alpha1.abs() < EPSILON;
        let on_baseline2 = sin_alpha2.abs() < EPSILON;
        match (on_baseline1, on_baseline2) {
            (true, true) => {
                debug!("Paths from {p1:?} and {p2:?} run along the same great circle");
                return Err(Error::NoIntersection(
                    "paths run along the same great circle",
                ));
            }
            // the circles meet at the other start point and its antipode
            (true, false) if alpha1.cos() > 0.0 => return Ok(*p2),
            (true, false) => return Ok(antipode(p2)),
            (false, true) if alpha2.cos() > 0.0 => return Ok(*p1),
            (false, true) => return Ok(antipode(p1)),
            (false, false) => {}
        }

        if sin_alpha1 * sin_alpha2 < 0.0 {
            debug!("Paths from {p1:?} and {p2:?} leave the baseline on opposite sides");
            return Err(Error::NoIntersection(
                "paths diverge on opposite sides of the baseline",
            ));
        }

        let cos_alpha3 =
            -alpha1.cos() * alpha2.cos() + sin_alpha1 * sin_alpha2 * delta12.cos();
        let delta13 = (delta12.sin() * sin_alpha1 * sin_alpha2)
            .atan2(alpha2.cos() + alpha1.cos() * cos_alpha3);

        let lat1 = p1.lat_rad();
        let sin_lat3 =
            clamp_unit(lat1.sin() * delta13.cos() + lat1.cos() * delta13.sin() * theta13.cos());
        let lat3 = sin_lat3.asin();

        let delta_lon13 = (theta13.sin() * delta13.sin() * lat1.cos())
            .atan2(delta13.cos() - lat1.sin() * sin_lat3);

        Ok(Point::from_radians(lat3, p1.lon_rad() + delta_lon13))
    }

    /// Angular cross-track offset and the pieces the along-track distance
    /// needs: `(delta13, theta13 - theta12, delta_xt)`
    fn cross_track_angles(&self, path_start: &Point, path_end: &Point) -> Result<(f64, f64, f64)> {
        if path_start.angular_distance_to(path_end) < EPSILON || is_antipodal(path_start, path_end) {
            debug!("Path from {path_start:?} to {path_end:?} does not define a great circle");
            return Err(Error::AmbiguousResult(
                "path start and end do not define a great circle",
            ));
        }

        let delta13 = path_start.angular_distance_to(self);
        let theta13 = path_start.bearing_to(self).to_radians();
        let theta12 = path_start.bearing_to(path_end).to_radians();
        let turn = theta13 - theta12;

        let delta_xt = clamp_unit(delta13.sin() * turn.sin()).asin();
        Ok((delta13, turn, delta_xt))
    }

    /// Signed distance from this point to the great circle through
    /// `path_start` and `path_end`
    ///
    /// Negative means the point lies left of the path when travelling from
    /// start to end, positive means right. Distance is in the unit of
    /// `radius`.
    pub fn cross_track_distance_to(
        &self,
        path_start: &Point,
        path_end: &Point,
        radius: f64,
    ) -> Result<f64> {
        let radius = check_radius(radius)?;
        let (_, _, delta_xt) = self.cross_track_angles(path_start, path_end)?;
        Ok(delta_xt * radius)
    }

    /// Distance from `path_start` to the point on the path closest to this
    /// point
    ///
    /// Negative when that point lies behind `path_start`.
    pub fn along_track_distance_to(
        &self,
        path_start: &Point,
        path_end: &Point,
        radius: f64,
    ) -> Result<f64> {
        let radius = check_radius(radius)?;
        let (delta13, turn, delta_xt) = self.cross_track_angles(path_start, path_end)?;

        let cos_xt = delta_xt.cos();
        if cos_xt < EPSILON {
            trace!("{self:?} is a pole of the path, along-track distance is zero");
            return Ok(0.0);
        }

        let delta_at = clamp_unit(delta13.cos() / cos_xt).acos();
        let direction = if turn.cos() < 0.0 { -1.0 } else { 1.0 };
        Ok(delta_at * direction * radius)
    }

    /// Highest latitude reached by the great circle through this point on
    /// `bearing`, in degrees [0, 90] (Clairaut's formula)
    ///
    /// A great circle reaches this latitude in the northern hemisphere and
    /// its negative in the southern one, whichever way it is travelled, so
    /// only the magnitude is returned.
    pub fn max_latitude(&self, bearing: f64) -> Result<f64> {
        let theta = check_finite("bearing", bearing)?.to_radians();
        let lat = self.lat_rad();

        let cos_max = clamp_unit((theta.sin() * lat.cos()).abs());
        Ok(cos_max.acos().to_degrees().clamp(0.0, 90.0))
    }

    /// Longitudes where the great circle through `p1` and `p2` crosses the
    /// parallel at `latitude`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for a latitude outside [-90, 90]
    /// - [`Error::AmbiguousResult`] if `p1` and `p2` are coincident or
    ///   antipodal, or the great circle lies along the parallel itself
    ///   (the equator)
    /// - [`Error::NoIntersection`] if the great circle never reaches
    ///   `latitude`
    pub fn crossing_parallels(p1: &Point, p2: &Point, latitude: f64) -> Result<ParallelCrossing> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidInput {
                what: "latitude",
                value: latitude,
            });
        }
        if p1.angular_distance_to(p2) < EPSILON || is_antipodal(p1, p2) {
            debug!("{p1:?} and {p2:?} do not define a great circle");
            return Err(Error::AmbiguousResult(
                "coincident or antipodal points do not define a great circle",
            ));
        }

        let phi = latitude.to_radians();
        let lat1 = p1.lat_rad();
        let lat2 = p2.lat_rad();
        let lon1 = p1.lon_rad();
        let delta_lon = p2.lon_rad() - lon1;

        let x = lat1.sin() * lat2.cos() * phi.cos() * delta_lon.sin();
        let y = lat1.sin() * lat2.cos() * phi.cos() * delta_lon.cos()
            - lat1.cos() * lat2.sin() * phi.cos();
        let z = lat1.cos() * lat2.cos() * phi.sin() * delta_lon.sin();
        let horizontal = x.hypot(y);

        if horizontal < EPSILON {
            if z.abs() > EPSILON {
                debug!("Great circle through {p1:?} and {p2:?} never reaches {latitude}°");
                return Err(Error::NoIntersection(
                    "great circle does not reach the latitude",
                ));
            }
            if phi.cos() < EPSILON {
                // a meridian touches the pole at a single point
                return Ok(ParallelCrossing::Tangent { lon: p1.lon() });
            }
            return Err(Error::AmbiguousResult(
                "great circle lies along the parallel",
            ));
        }

        let ratio = z / horizontal;
        if ratio.abs() > 1.0 + EPSILON {
            debug!("Great circle through {p1:?} and {p2:?} never reaches {latitude}°");
            return Err(Error::NoIntersection(
                "great circle does not reach the latitude",
            ));
        }

        // longitude of the vertex, relative to p1
        let lon_max = (-y).atan2(x);
        let delta_lon_i = clamp_unit(ratio).acos();

        let crossing1 = Point::from_radians(phi, lon1 + lon_max - delta_lon_i);
        if ratio.abs() >= 1.0 - EPSILON {
            return Ok(ParallelCrossing::Tangent {
                lon: crossing1.lon(),
            });
        }

        let crossing2 = Point::from_radians(phi, lon1 + lon_max + delta_lon_i);
        Ok(ParallelCrossing::Pair {
            lon1: crossing1.lon(),
            lon2: crossing2.lon(),
        })
    }
}
