//! Wind speed from horizontal wind components

use crate::core_types::units::MetersPerSecond;

/// Scalar wind speed `sqrt(u^2 + v^2)` (m/s)
///
/// Uses `hypot` so large components do not overflow the intermediate square.
#[inline]
#[must_use]
pub fn wind_speed(u: f64, v: f64) -> f64 {
    u.hypot(v)
}

/// Typed form of [`wind_speed`]
#[must_use]
pub fn wind_speed_from_components(u: MetersPerSecond, v: MetersPerSecond) -> MetersPerSecond {
    MetersPerSecond::new(wind_speed(*u, *v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_speed_magnitude() {
        assert_eq!(wind_speed(3.0, 4.0), 5.0);
        assert_eq!(wind_speed(-3.0, -4.0), 5.0);
        assert_eq!(wind_speed(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_wind_speed_no_overflow() {
        let big = 1e200;
        assert!(wind_speed(big, big).is_finite());
    }

    #[test]
    fn test_typed_wind_speed() {
        let s = wind_speed_from_components(MetersPerSecond::new(0.0), MetersPerSecond::new(-2.5));
        assert_eq!(*s, 2.5);
    }
}
