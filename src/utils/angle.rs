//! Angle normalization and safe-trig helpers shared by every formula

use std::f64::consts::PI;

/// Tolerance used to detect coincident, antipodal and parallel configurations
///
/// Applied to unit-sphere quantities (radians, sines, vector norms).
pub const EPSILON: f64 = 1e-12;

/// Normalize a longitude in degrees into the range (-180, 180]
///
/// Values that are already in range are returned unchanged.
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }

    let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if lon <= -180.0 { lon + 360.0 } else { lon }
}

/// Normalize a bearing in degrees into the range [0, 360)
pub fn normalize_bearing(bearing: f64) -> f64 {
    if (0.0..360.0).contains(&bearing) {
        return bearing;
    }

    let bearing = bearing.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// Clamp an `asin`/`acos` argument into [-1, 1]
///
/// Rounding near the poles and antipodes can push a cosine a few ULPs
/// past ±1, which would otherwise turn into NaN.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Wrap a longitude difference in radians into [-π, π]
///
/// Used to take the shorter way across the anti-meridian.
pub fn wrap_pi(delta: f64) -> f64 {
    if delta > PI {
        delta - 2.0 * PI
    } else if delta < -PI {
        delta + 2.0 * PI
    } else {
        delta
    }
}
