//! Predefined impact and orbit scenarios.
//!
//! Each preset bundles an impactor, its heliocentric orbit and an impact
//! site, and can be turned into a [`SimulationConfig`] for any run type.

pub mod presets;

use crate::config::{
    AsteroidRecord, ImpactSiteRecord, OrbitalElementsRecord, SimulationConfig, SimulationType,
};

pub use presets::SCENARIOS;

/// Heliocentric orbit of a preset (degrees, AU, years).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPreset {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub longitude_ascending_node: f64,
    pub argument_periapsis: f64,
    pub orbital_period_years: f64,
}

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name (also used as the asteroid name).
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Impactor diameter (km).
    pub diameter_km: f64,
    /// Bulk density (g/cm³).
    pub density_gcm3: f64,
    /// Closing velocity (km/s).
    pub velocity_kms: f64,
    /// Impact angle from horizontal (degrees).
    pub impact_angle: f64,
    /// Taxonomic designation.
    pub spectral_type: &'static str,
    /// Heliocentric orbit. None = configuration defaults.
    pub orbit: Option<OrbitPreset>,
    /// Impact site (latitude, longitude) in degrees.
    pub impact_site: (f64, f64),
    /// Orbital animation span (days).
    pub simulation_duration_days: f64,
}

impl Scenario {
    pub fn asteroid_record(&self) -> AsteroidRecord {
        AsteroidRecord {
            name: Some(self.name.to_string()),
            diameter_km: self.diameter_km,
            density_gcm3: self.density_gcm3,
            v_rel_kms: self.velocity_kms,
            impact_angle: self.impact_angle,
            spec_type: Some(self.spectral_type.to_string()),
        }
    }

    pub fn orbital_elements_record(&self) -> OrbitalElementsRecord {
        match self.orbit {
            Some(orbit) => OrbitalElementsRecord {
                semi_major_axis: orbit.semi_major_axis,
                eccentricity: orbit.eccentricity,
                inclination: orbit.inclination,
                longitude_ascending_node: orbit.longitude_ascending_node,
                argument_periapsis: orbit.argument_periapsis,
                orbital_period_years: Some(orbit.orbital_period_years),
            },
            None => OrbitalElementsRecord::default(),
        }
    }

    /// Build a configuration payload for this scenario.
    pub fn to_config(&self, simulation_type: SimulationType) -> SimulationConfig {
        let asteroid = self.asteroid_record();
        let asteroids = match simulation_type {
            SimulationType::Comparison => vec![asteroid.clone()],
            _ => Vec::new(),
        };
        SimulationConfig {
            simulation_type,
            output_id: Some(self.id.to_string()),
            asteroid,
            asteroids,
            orbital_elements: self.orbital_elements_record(),
            impact_location: Some(ImpactSiteRecord::new(self.impact_site.0, self.impact_site.1)),
            simulation_duration_days: self.simulation_duration_days,
            ..SimulationConfig::default()
        }
    }
}

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Comparison run over every preset, sharing the first preset's site.
pub fn comparison_config() -> SimulationConfig {
    let mut config = SCENARIOS[0].to_config(SimulationType::Comparison);
    config.output_id = Some("preset_comparison".to_string());
    config.asteroids = SCENARIOS.iter().map(Scenario::asteroid_record).collect();
    config
}
