//! Preset scenario definitions.

use super::{OrbitPreset, Scenario};

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[APOPHIS_IMPACT, TEST_IMPACTOR];

/// Impact site used by the presets: Istanbul.
pub const ISTANBUL: (f64, f64) = (41.0082, 28.9784);

/// Scenario 1: Apophis (Reference Case)
///
/// 99942 Apophis with its published heliocentric elements, striking at a
/// typical 45° with a 12.6 km/s closing speed.
pub static APOPHIS_IMPACT: Scenario = Scenario {
    id: "apophis_impact",
    name: "Apophis",
    description: "370 m stony asteroid on its real orbit. Reference impact case.",
    diameter_km: 0.370,
    density_gcm3: 3.2,
    velocity_kms: 12.6,
    impact_angle: 45.0,
    spectral_type: "Sq",
    orbit: Some(OrbitPreset {
        semi_major_axis: 0.9224,
        eccentricity: 0.1911,
        inclination: 3.331,
        longitude_ascending_node: 204.4,
        argument_periapsis: 126.4,
        orbital_period_years: 0.886,
    }),
    impact_site: ISTANBUL,
    simulation_duration_days: 365.0,
};

/// Scenario 2: Test Impactor
///
/// Small, fast body on the default orbit. Quick sanity run.
pub static TEST_IMPACTOR: Scenario = Scenario {
    id: "test_impactor",
    name: "Test Impactor",
    description: "200 m body at 20 km/s on the default orbit.",
    diameter_km: 0.2,
    density_gcm3: 3.0,
    velocity_kms: 20.0,
    impact_angle: 45.0,
    spectral_type: "S",
    orbit: None,
    impact_site: ISTANBUL,
    simulation_duration_days: 100.0,
};
