//! Property-based tests for the orbit kernel using proptest.
//!
//! These tests check solver accuracy and geometric consistency across the
//! whole elliptical range of elements.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::elements::OrbitalElements;
use super::frame::OrbitalFrameTransform;
use super::kepler::{Convergence, KeplerSolver};
use super::propagator::{OrbitPropagator, position_at_mean_anomaly, sample_orbit};
use crate::test_utils::assertions;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Solving M = E - e*sin(E) recovers the E that produced M.
    #[test]
    fn prop_kepler_round_trip(
        e_true in 0.0f64..TAU,
        eccentricity in 0.0f64..0.95,
    ) {
        let mean_anomaly = e_true - eccentricity * e_true.sin();
        let solution = KeplerSolver::default().solve(mean_anomaly, eccentricity).unwrap();

        prop_assert_eq!(solution.convergence, Convergence::Converged);
        prop_assert!(
            (solution.eccentric_anomaly - e_true).abs() < 1e-5,
            "M={}, e={}: E={} expected {}",
            mean_anomaly, eccentricity, solution.eccentric_anomaly, e_true
        );
        prop_assert!(solution.residual < 1e-9);
    }

    /// Circular orbits reduce to a uniform rotation in the orbital plane.
    #[test]
    fn prop_circular_orbit_is_uniform(
        radius in 0.1f64..50.0,
        inclination in 0.0f64..3.1,
        node in 0.0f64..TAU,
        peri in 0.0f64..TAU,
        mean_anomaly in 0.0f64..TAU,
    ) {
        let elements = OrbitalElements::new(radius, 0.0, inclination, node, peri).unwrap();
        let transform = OrbitalFrameTransform::from_elements(&elements);

        let p = position_at_mean_anomaly(&elements, mean_anomaly).unwrap();
        let expected = transform.apply(radius * mean_anomaly.cos(), radius * mean_anomaly.sin());
        prop_assert!((p - expected).length() < 1e-9 * radius);
    }

    /// Every sampled point lies between periapsis and apoapsis distance.
    #[test]
    fn prop_orbit_radius_bounded(
        a in 0.3f64..40.0,
        eccentricity in 0.0f64..0.95,
        inclination in 0.0f64..3.1,
        node in 0.0f64..TAU,
        peri in 0.0f64..TAU,
    ) {
        let elements = OrbitalElements::new(a, eccentricity, inclination, node, peri).unwrap();
        let path = sample_orbit(&elements, 64).unwrap();
        let (r_min, r_max) = (elements.periapsis_distance(), elements.apoapsis_distance());

        for p in path {
            let r = p.length();
            prop_assert!(r >= r_min * (1.0 - 1e-9) && r <= r_max * (1.0 + 1e-9));
        }
    }

    /// The path closes: the point just before M = 2π meets the first sample.
    #[test]
    fn prop_orbit_closes(
        a in 0.3f64..40.0,
        eccentricity in 0.0f64..0.9,
        inclination in 0.0f64..3.1,
        node in 0.0f64..TAU,
        peri in 0.0f64..TAU,
    ) {
        let elements = OrbitalElements::new(a, eccentricity, inclination, node, peri).unwrap();
        let path = sample_orbit(&elements, 128).unwrap();
        let end = OrbitPropagator::default().position_at_mean_anomaly(&elements, TAU).unwrap();

        assertions::assert_vec_close(path[0], end, 1e-9 * a);
    }

    /// The frame projection keeps its two columns orthonormal.
    #[test]
    fn prop_frame_is_orthonormal(
        inclination in 0.0f64..3.1,
        node in -TAU..TAU,
        peri in -TAU..TAU,
    ) {
        let transform = OrbitalFrameTransform::new(node, peri, inclination);
        let p = transform.periapsis_axis();
        let q = transform.transverse_axis();

        prop_assert!((p.length() - 1.0).abs() < 1e-12);
        prop_assert!((q.length() - 1.0).abs() < 1e-12);
        prop_assert!(p.dot(q).abs() < 1e-12);
        prop_assert!((transform.orbit_normal().z - inclination.cos()).abs() < 1e-12);
    }
}
