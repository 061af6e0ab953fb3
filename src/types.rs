//! Core physical constants and shared value types.

use bevy::math::DVec3;

/// Cartesian position in the reference frame.
///
/// Length unit follows whatever unit the caller used for the orbit scale or
/// the reference sphere radius.
pub type CartesianVector = DVec3;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Astronomical unit in kilometers
pub const AU_TO_KM: f64 = AU_TO_METERS / 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Julian year in days
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Kilometers to meters
pub const KM_TO_M: f64 = 1000.0;

/// g/cm³ to kg/m³
pub const GCM3_TO_KGM3: f64 = 1000.0;

/// Energy released by one metric ton of TNT (J)
pub const TNT_JOULES_PER_TON: f64 = 4.184e9;

/// Mean Earth radius in kilometers (spherical model, no flattening)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's heliocentric orbit radius used for the circular reference track (AU)
pub const EARTH_ORBIT_RADIUS_AU: f64 = 1.0;

/// Earth's orbital period (days)
pub const EARTH_ORBITAL_PERIOD_DAYS: f64 = DAYS_PER_YEAR;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversions_round_trip() {
        let deg = 123.456;
        assert!((deg * DEG_TO_RAD * RAD_TO_DEG - deg).abs() < 1e-12);
        assert!((180.0 * DEG_TO_RAD - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_unit_conversions() {
        assert!((AU_TO_KM - 1.495978707e8).abs() < 1e-3);
        assert_eq!(TNT_JOULES_PER_TON / 1e9, 4.184);
    }
}
