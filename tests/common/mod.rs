//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use impactor::config::{AsteroidRecord, ImpactSiteRecord, SimulationConfig, SimulationType};
use impactor::orbit::OrbitalElements;

/// Istanbul, the preset impact site (degrees).
pub const ISTANBUL: (f64, f64) = (41.0082, 28.9784);

/// 99942 Apophis heliocentric elements with its 0.886 year period.
pub fn apophis_elements() -> OrbitalElements {
    OrbitalElements::from_degrees(0.9224, 0.1911, 3.331, 204.4, 126.4)
        .and_then(|elements| elements.with_period_years(0.886))
        .unwrap()
}

/// Impact configuration for a single body striking Istanbul.
pub fn impact_config(diameter_km: f64, density_gcm3: f64, velocity_kms: f64, angle_deg: f64) -> SimulationConfig {
    SimulationConfig {
        simulation_type: SimulationType::Impact,
        output_id: Some("integration".to_string()),
        asteroid: AsteroidRecord {
            name: Some("Test Body".to_string()),
            diameter_km,
            density_gcm3,
            v_rel_kms: velocity_kms,
            impact_angle: angle_deg,
            spec_type: None,
        },
        impact_location: Some(ImpactSiteRecord {
            latitude: ISTANBUL.0,
            longitude: ISTANBUL.1,
        }),
        ..SimulationConfig::default()
    }
}

/// Relative error, falling back to absolute error near zero.
pub fn relative_error(got: f64, expected: f64) -> f64 {
    if expected.abs() > 1e-12 {
        ((got - expected) / expected).abs()
    } else {
        (got - expected).abs()
    }
}

/// Largest distance between consecutive points of a closed path,
/// including the wrap from last back to first.
pub fn max_closed_gap(points: &[DVec3]) -> f64 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.distance(*b))
        .fold(0.0, f64::max)
}
