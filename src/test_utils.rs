//! Test utilities for the orbit and impact kernels.
//!
//! Provides fixtures for reference bodies and assertions for comparing
//! vectors and checking orbit geometry.

use bevy::math::DVec3;

use crate::impact::AsteroidProperties;
use crate::orbit::OrbitalElements;

/// Fixtures for reference orbits and impactors.
pub mod fixtures {
    use super::*;

    /// 99942 Apophis heliocentric elements (AU, degrees converted to radians).
    pub fn apophis_elements() -> OrbitalElements {
        OrbitalElements::from_degrees(0.9224, 0.1911, 3.331, 204.4, 126.4)
            .and_then(|elements| elements.with_period_years(0.886))
            .expect("Apophis elements are valid")
    }

    /// Apophis as an impactor: 370 m, 3.2 g/cm³, 12.6 km/s at 45°.
    pub fn apophis_impactor() -> AsteroidProperties {
        AsteroidProperties::new(0.370, 3.2, 12.6, 45.0).expect("Apophis impactor is valid")
    }

    /// Small fast test body: 200 m, 3.0 g/cm³, 20 km/s at 45°.
    pub fn test_impactor() -> AsteroidProperties {
        AsteroidProperties::new(0.2, 3.0, 20.0, 45.0).expect("test impactor is valid")
    }

    /// Elliptical orbit in the reference plane with periapsis on +x.
    pub fn planar_orbit(semi_major_axis: f64, eccentricity: f64) -> OrbitalElements {
        OrbitalElements::new(semi_major_axis, eccentricity, 0.0, 0.0, 0.0)
            .expect("planar orbit elements are valid")
    }
}

/// Assertions for vectors and orbit geometry.
pub mod assertions {
    use super::*;

    /// Assert two vectors agree component-wise within an absolute tolerance.
    ///
    /// # Panics
    /// Panics if the distance between `actual` and `expected` exceeds `tolerance`.
    pub fn assert_vec_close(actual: DVec3, expected: DVec3, tolerance: f64) {
        let distance = actual.distance(expected);
        assert!(
            distance <= tolerance,
            "Vectors differ: actual={actual:?}, expected={expected:?}, distance={distance:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert every point lies within the periapsis/apoapsis shell of `elements`.
    ///
    /// # Panics
    /// Panics on the first point outside the shell.
    pub fn assert_within_orbit_shell(points: &[DVec3], elements: &OrbitalElements, tolerance: f64) {
        let (r_min, r_max) = (elements.periapsis_distance(), elements.apoapsis_distance());
        for (i, p) in points.iter().enumerate() {
            let r = p.length();
            assert!(
                r >= r_min - tolerance && r <= r_max + tolerance,
                "Point {i} at radius {r:.6e} outside [{r_min:.6e}, {r_max:.6e}]"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apophis_fixture_period() {
        let elements = fixtures::apophis_elements();
        assert_relative_eq!(elements.period(), 0.886 * 365.25, epsilon = 1e-9);
        assert!(elements.eccentricity < 0.2);
    }

    #[test]
    fn test_planar_orbit_stays_in_plane() {
        let elements = fixtures::planar_orbit(1.0, 0.5);
        assert_eq!(elements.inclination, 0.0);
        assert_relative_eq!(elements.periapsis_distance(), 0.5);
    }

    #[test]
    fn test_vec_close_accepts_equal() {
        assertions::assert_vec_close(DVec3::ONE, DVec3::ONE, 0.0);
    }

    #[test]
    #[should_panic(expected = "Vectors differ")]
    fn test_vec_close_rejects_distant() {
        assertions::assert_vec_close(DVec3::ZERO, DVec3::X, 0.5);
    }
}
