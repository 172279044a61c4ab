/// Errors returned by the spherical calculations
///
/// Floating-point overshoot near the poles or antipodes is never reported
/// here; it is absorbed by clamping trigonometric arguments.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric input was non-finite or outside its valid range
    #[error("Invalid {what}: {value}")]
    InvalidInput { what: &'static str, value: f64 },

    /// The geometric configuration has no single well-defined answer
    #[error("Ambiguous result: {0}")]
    AmbiguousResult(&'static str),

    /// The requested paths or parallels do not meet
    #[error("No intersection: {0}")]
    NoIntersection(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject non-finite values
pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput { what, value })
    }
}

/// Reject radii that are non-finite, zero or negative
pub(crate) fn check_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(Error::InvalidInput {
            what: "radius",
            value: radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err_eq, assert_ok_eq};
    use insta::assert_snapshot;

    #[test]
    fn finite_values_pass_through() {
        assert_ok_eq!(check_finite("bearing", 42.5), 42.5);
        assert_ok_eq!(check_finite("bearing", -0.0), -0.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_err_eq!(
            check_finite("distance", f64::INFINITY),
            Error::InvalidInput {
                what: "distance",
                value: f64::INFINITY
            }
        );
        assert!(check_finite("distance", f64::NAN).is_err());
    }

    #[test]
    fn radius_must_be_positive() {
        assert_ok_eq!(check_radius(6_371_000.0), 6_371_000.0);
        assert!(check_radius(0.0).is_err());
        assert!(check_radius(-1.0).is_err());
        assert!(check_radius(f64::NAN).is_err());
    }

    #[test]
    fn error_messages() {
        let err = check_radius(-3.0).unwrap_err();
        assert_snapshot!(err.to_string(), @"Invalid radius: -3");

        let err = Error::AmbiguousResult("antipodal points have no unique midpoint");
        assert_snapshot!(err.to_string(), @"Ambiguous result: antipodal points have no unique midpoint");

        let err = Error::NoIntersection("paths run along the same great circle");
        assert_snapshot!(err.to_string(), @"No intersection: paths run along the same great circle");
    }
}
