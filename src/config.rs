//! Simulation configuration payload.
//!
//! JSON records with the same field names the scene layer already sends
//! (the impact site is read from `impact_coordinates` or `impact_location`).
//! Missing fields take the defaults below and unknown keys are ignored;
//! angles are degrees on the wire and radians once validated.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PhysicsError;
use crate::geodetic::GeodeticCoordinate;
use crate::impact::AsteroidProperties;
use crate::orbit::OrbitalElements;
use crate::spectral::SpectralType;
use crate::timeline::{DEFAULT_FRAME_CAP, Timeline};

/// Errors raised while loading a configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration is missing required section `{0}`")]
    MissingSection(&'static str),
}

/// Which report the runner should produce.
///
/// Any name other than the ones below selects [`SimulationType::Comprehensive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SimulationType {
    /// Energetics, impact site and approach for one asteroid
    #[default]
    Impact,
    /// Orbit path and animated tracks for one asteroid
    Orbital,
    /// Impact reports for several asteroids
    Comparison,
    /// Original impact plus the deflected orbit when the deflection succeeded
    Deflection,
    /// Short orbital approach followed by the impact
    Comprehensive,
}

impl SimulationType {
    pub const ALL: [SimulationType; 5] = [
        SimulationType::Impact,
        SimulationType::Orbital,
        SimulationType::Comparison,
        SimulationType::Deflection,
        SimulationType::Comprehensive,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SimulationType::Impact => "impact",
            SimulationType::Orbital => "orbital",
            SimulationType::Comparison => "comparison",
            SimulationType::Deflection => "deflection",
            SimulationType::Comprehensive => "comprehensive",
        }
    }

    /// Exact name match, `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl From<String> for SimulationType {
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or(SimulationType::Comprehensive)
    }
}

impl From<SimulationType> for String {
    fn from(simulation_type: SimulationType) -> Self {
        simulation_type.as_str().to_string()
    }
}

/// Physical impactor record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidRecord {
    pub name: Option<String>,
    pub diameter_km: f64,
    pub density_gcm3: f64,
    pub v_rel_kms: f64,
    /// Degrees from horizontal
    pub impact_angle: f64,
    #[serde(alias = "spectral_type")]
    pub spec_type: Option<String>,
}

impl Default for AsteroidRecord {
    fn default() -> Self {
        Self {
            name: None,
            diameter_km: 1.0,
            density_gcm3: 2.6,
            v_rel_kms: 20.0,
            impact_angle: 45.0,
            spec_type: None,
        }
    }
}

impl AsteroidRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn spectral_type(&self) -> SpectralType {
        self.spec_type
            .as_deref()
            .map(SpectralType::from_designation)
            .unwrap_or_default()
    }

    pub fn to_properties(&self) -> Result<AsteroidProperties, PhysicsError> {
        Ok(
            AsteroidProperties::new(self.diameter_km, self.density_gcm3, self.v_rel_kms, self.impact_angle)?
                .with_spectral_type(self.spectral_type()),
        )
    }
}

/// Orbital elements record (angles in degrees, period in years).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalElementsRecord {
    /// AU
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub longitude_ascending_node: f64,
    pub argument_periapsis: f64,
    pub orbital_period_years: Option<f64>,
}

impl Default for OrbitalElementsRecord {
    fn default() -> Self {
        Self {
            semi_major_axis: 2.0,
            eccentricity: 0.1,
            inclination: 5.0,
            longitude_ascending_node: 0.0,
            argument_periapsis: 0.0,
            orbital_period_years: Some(2.0),
        }
    }
}

impl OrbitalElementsRecord {
    pub fn to_elements(&self) -> Result<OrbitalElements, PhysicsError> {
        let elements = OrbitalElements::from_degrees(
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.longitude_ascending_node,
            self.argument_periapsis,
        )?;
        match self.orbital_period_years {
            Some(years) => elements.with_period_years(years),
            None => Ok(elements),
        }
    }
}

/// Impact site record (degrees).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactSiteRecord {
    pub latitude: f64,
    pub longitude: f64,
}

impl ImpactSiteRecord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn to_coordinate(&self) -> Result<GeodeticCoordinate, PhysicsError> {
        GeodeticCoordinate::new(self.latitude, self.longitude)
    }
}

/// Outcome of a deflection attempt, as reported by the mission planner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeflectionResults {
    #[serde(rename = "isSuccessful")]
    pub is_successful: bool,
}

/// Top-level configuration payload.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub simulation_type: SimulationType,
    pub output_id: Option<String>,
    pub asteroid: AsteroidRecord,
    /// Bodies for a comparison run
    pub asteroids: Vec<AsteroidRecord>,
    pub orbital_elements: OrbitalElementsRecord,
    #[serde(alias = "impact_coordinates")]
    pub impact_location: Option<ImpactSiteRecord>,
    /// Undeflected impact site of a deflection run
    pub original_impact: Option<ImpactSiteRecord>,
    pub deflection_results: Option<DeflectionResults>,
    pub simulation_duration_days: f64,
    /// Explicit frame budget; one frame per day (capped) when absent
    pub frame_count: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation_type: SimulationType::default(),
            output_id: None,
            asteroid: AsteroidRecord::default(),
            asteroids: Vec::new(),
            orbital_elements: OrbitalElementsRecord::default(),
            impact_location: None,
            original_impact: None,
            deflection_results: None,
            simulation_duration_days: 365.0,
            frame_count: None,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn simulation_id(&self) -> &str {
        self.output_id.as_deref().unwrap_or("unknown")
    }

    /// Impact site, required by impact and comparison runs.
    pub fn impact_site(&self) -> Result<ImpactSiteRecord, ConfigError> {
        self.impact_location.ok_or(ConfigError::MissingSection("impact_location"))
    }

    /// Site of the undeflected impact: `original_impact`, else the impact site.
    pub fn original_impact_site(&self) -> Result<ImpactSiteRecord, ConfigError> {
        self.original_impact
            .or(self.impact_location)
            .ok_or(ConfigError::MissingSection("original_impact"))
    }

    pub fn deflection_successful(&self) -> bool {
        self.deflection_results.is_some_and(|results| results.is_successful)
    }

    /// Timeline for the orbital animation, never above [`DEFAULT_FRAME_CAP`] frames.
    pub fn timeline(&self) -> Result<Timeline, PhysicsError> {
        match self.frame_count {
            Some(frames) => Timeline::capped(self.simulation_duration_days, frames, DEFAULT_FRAME_CAP),
            None => Timeline::daily(self.simulation_duration_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DAYS_PER_YEAR;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.simulation_type, SimulationType::Impact);
        assert_eq!(config.asteroid.diameter_km, 1.0);
        assert_eq!(config.asteroid.v_rel_kms, 20.0);
        assert_eq!(config.asteroid.density_gcm3, 2.6);
        assert_eq!(config.asteroid.impact_angle, 45.0);
        assert_eq!(config.orbital_elements.semi_major_axis, 2.0);
        assert_eq!(config.simulation_duration_days, 365.0);
        assert_eq!(config.simulation_id(), "unknown");
    }

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "simulation_type": "orbital",
            "output_id": "run-42",
            "asteroid": { "name": "Apophis", "diameter_km": 0.37, "spectral_type": "Sq" },
            "orbital_elements": {
                "semi_major_axis": 0.9224,
                "eccentricity": 0.1911,
                "inclination": 3.331,
                "longitude_ascending_node": 204.4,
                "argument_periapsis": 126.4,
                "orbital_period_years": 0.886
            },
            "simulation_duration_days": 100,
            "frame_count": 50
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();

        assert_eq!(config.simulation_type, SimulationType::Orbital);
        assert_eq!(config.simulation_id(), "run-42");
        assert_eq!(config.asteroid.display_name(), "Apophis");
        assert_eq!(config.asteroid.spectral_type(), SpectralType::S);
        // Unspecified asteroid fields keep their defaults
        assert_eq!(config.asteroid.v_rel_kms, 20.0);

        let elements = config.orbital_elements.to_elements().unwrap();
        assert!((elements.inclination - 3.331_f64.to_radians()).abs() < 1e-12);
        assert!((elements.period() - 0.886 * DAYS_PER_YEAR).abs() < 1e-9);

        let timeline = config.timeline().unwrap();
        assert_eq!(timeline.frame_count(), 50);
        assert_eq!(timeline.duration(), 100.0);
    }

    #[test]
    fn test_missing_period_falls_back_to_third_law() {
        let json = r#"{ "orbital_elements": { "semi_major_axis": 4.0, "orbital_period_years": null } }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        let elements = config.orbital_elements.to_elements().unwrap();
        assert!((elements.period() - 8.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_records_surface_physics_errors() {
        let record = AsteroidRecord {
            diameter_km: -1.0,
            ..AsteroidRecord::default()
        };
        assert_eq!(record.to_properties().unwrap_err().parameter(), "diameter_km");

        let orbit = OrbitalElementsRecord {
            eccentricity: 1.3,
            ..OrbitalElementsRecord::default()
        };
        assert_eq!(orbit.to_elements().unwrap_err().parameter(), "eccentricity");
    }

    #[test]
    fn test_missing_impact_location() {
        let config = SimulationConfig::default();
        assert!(matches!(
            config.impact_site(),
            Err(ConfigError::MissingSection("impact_location"))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json(r#"{ "simulation_type": 7 }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_type_runs_comprehensive() {
        let config = SimulationConfig::from_json(r#"{ "simulation_type": "rocket" }"#).unwrap();
        assert_eq!(config.simulation_type, SimulationType::Comprehensive);

        for simulation_type in SimulationType::ALL {
            let json = serde_json::to_string(&simulation_type).unwrap();
            assert_eq!(json, format!("\"{}\"", simulation_type.as_str()));
            assert_eq!(serde_json::from_str::<SimulationType>(&json).unwrap(), simulation_type);
        }
        // Names are matched exactly
        assert_eq!(SimulationType::from_name("Impact"), None);
    }

    #[test]
    fn test_scene_layer_test_payload() {
        let json = r#"{
            "simulation_type": "impact",
            "asteroid": {
                "name": "Test_Asteroid",
                "diameter_km": 0.2,
                "v_rel_kms": 20.0,
                "density_gcm3": 3.0,
                "spectral_type": "S"
            },
            "impact_coordinates": {
                "latitude": 41.0082,
                "longitude": 28.9784,
                "location_name": "Istanbul"
            },
            "render_settings": {
                "engine": "EEVEE",
                "resolution_x": 1280,
                "resolution_y": 720,
                "samples": 64,
                "frame_end": 120
            },
            "output_id": "test_simulation"
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();

        assert_eq!(config.simulation_id(), "test_simulation");
        assert_eq!(config.impact_site().unwrap(), ImpactSiteRecord::new(41.0082, 28.9784));
        assert_eq!(config.asteroid.impact_angle, 45.0);
        assert_eq!(config.asteroid.spectral_type(), SpectralType::S);
    }

    #[test]
    fn test_deflection_sections() {
        let json = r#"{
            "simulation_type": "deflection",
            "original_impact": { "latitude": 40.7, "longitude": -74.0 },
            "deflection_results": { "isSuccessful": true, "missDistanceKm": 12000 }
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.simulation_type, SimulationType::Deflection);
        assert!(config.deflection_successful());
        assert_eq!(config.original_impact_site().unwrap(), ImpactSiteRecord::new(40.7, -74.0));

        // Falls back to the regular impact site, then reports the missing section
        let fallback = SimulationConfig {
            impact_location: Some(ImpactSiteRecord::new(1.0, 2.0)),
            ..SimulationConfig::default()
        };
        assert!(!fallback.deflection_successful());
        assert_eq!(fallback.original_impact_site().unwrap(), ImpactSiteRecord::new(1.0, 2.0));
        assert!(matches!(
            SimulationConfig::default().original_impact_site(),
            Err(ConfigError::MissingSection("original_impact"))
        ));
    }

    #[test]
    fn test_explicit_frame_count_is_capped() {
        let config = SimulationConfig::from_json(r#"{ "simulation_type": "orbital", "frame_count": 50000 }"#).unwrap();
        let timeline = config.timeline().unwrap();
        assert_eq!(timeline.frame_count(), DEFAULT_FRAME_CAP);
        assert_eq!(timeline.duration(), 365.0);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            SimulationConfig::load("/nonexistent/impactor/config.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig {
            simulation_type: SimulationType::Comparison,
            impact_location: Some(ImpactSiteRecord {
                latitude: 41.0,
                longitude: 29.0,
            }),
            ..SimulationConfig::default()
        };
        let parsed = SimulationConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
