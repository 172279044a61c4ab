use crate::Point;

/// Cartesian unit vector of a point on the unit sphere
///
/// Only used internally to interpolate along great circles without
/// averaging angles directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UnitVector {
    pub fn from_point(point: &Point) -> Self {
        let (lat, lon) = (point.lat_rad(), point.lon_rad());
        Self {
            x: lat.cos() * lon.cos(),
            y: lat.cos() * lon.sin(),
            z: lat.sin(),
        }
    }

    /// Weighted sum `a * self + b * other`
    pub fn combine(self, a: f64, other: Self, b: f64) -> Self {
        Self {
            x: a * self.x + b * other.x,
            y: a * self.y + b * other.y,
            z: a * self.z + b * other.z,
        }
    }

    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Convert back to a point, ignoring the vector's length
    pub fn to_point(self) -> Point {
        let lat = self.z.atan2(self.x.hypot(self.y));
        let lon = self.y.atan2(self.x);
        Point::from_radians(lat, lon)
    }
}
