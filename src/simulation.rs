//! Scenario runner: turns a configuration payload into kernel outputs.
//!
//! Produces everything the scene layer needs (position sequences, scalar
//! energetics, frame schedules) so it never has to compute physics itself.

use bevy::log::info;
use bevy::prelude::Resource;

use crate::approach::{ApproachPath, DEFAULT_APPROACH_DISTANCE_KM, ImpactPhases};
use crate::config::{
    AsteroidRecord, ConfigError, ImpactSiteRecord, OrbitalElementsRecord, SimulationConfig, SimulationType,
};
use crate::error::PhysicsError;
use crate::geodetic::GeodeticCoordinate;
use crate::impact::{AsteroidProperties, ImpactEnergetics};
use crate::orbit::{OrbitPropagator, OrbitalElements, apoapsis_position, periapsis_position};
use crate::spectral::{SpectralAppearance, SpectralType};
use crate::timeline::Timeline;
use crate::types::{AU_TO_KM, CartesianVector, EARTH_ORBIT_RADIUS_AU, EARTH_ORBITAL_PERIOD_DAYS, EARTH_RADIUS_KM};

/// Samples in the static orbit path.
pub const ORBIT_PATH_POINTS: usize = 128;

/// Orbital approach phase of a comprehensive run (days, one frame per day).
pub const COMPREHENSIVE_APPROACH_DAYS: f64 = 100.0;

/// Inclination change (degrees) shown for a successful deflection.
pub const DEFLECTION_INCLINATION_DELTA_DEG: f64 = 0.5;

/// Last animation frame of a deflection run.
pub const DEFLECTION_FRAME_END: u32 = 500;

/// Last animation frame of a comprehensive run.
pub const COMPREHENSIVE_FRAME_END: u32 = 600;

/// Errors raised by [`simulate`].
#[derive(thiserror::Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Physics(#[from] PhysicsError),

    #[error("comparison run has no asteroids")]
    EmptyComparison,
}

/// Everything computed for one impact.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactReport {
    pub name: String,
    pub properties: AsteroidProperties,
    pub spectral_type: SpectralType,
    pub energetics: ImpactEnergetics,
    pub site: GeodeticCoordinate,
    /// Impact site on the Earth sphere (km)
    pub site_position: CartesianVector,
    /// Incoming straight-line path (km)
    pub approach: ApproachPath,
    pub phases: ImpactPhases,
}

impl ImpactReport {
    /// Surface look of the impactor for the scene layer.
    pub fn appearance(&self) -> SpectralAppearance {
        self.spectral_type.appearance()
    }
}

/// Everything computed for one heliocentric orbit (lengths in AU).
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalReport {
    pub name: String,
    pub elements: OrbitalElements,
    pub timeline: Timeline,
    /// One closed revolution, `ORBIT_PATH_POINTS` samples
    pub orbit_path: Vec<CartesianVector>,
    /// Asteroid position at every timeline frame
    pub asteroid_track: Vec<CartesianVector>,
    /// Earth reference position at every timeline frame
    pub earth_track: Vec<CartesianVector>,
    pub periapsis: CartesianVector,
    pub apoapsis: CartesianVector,
}

impl OrbitalReport {
    /// Frame and distance (AU) of the closest asteroid–Earth approach
    /// among the sampled frames.
    pub fn closest_approach(&self) -> Option<(usize, f64)> {
        self.asteroid_track
            .iter()
            .zip(&self.earth_track)
            .map(|(asteroid, earth)| asteroid.distance(*earth))
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Result payload of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportBody {
    Impact(ImpactReport),
    Orbital(OrbitalReport),
    Comparison(Vec<ImpactReport>),
    /// Undeflected impact and, when the deflection succeeded, the nudged orbit
    Deflection {
        original: ImpactReport,
        deflected: Option<OrbitalReport>,
    },
    /// Approach orbit followed by the impact
    Comprehensive {
        orbital: OrbitalReport,
        impact: ImpactReport,
    },
}

/// Output of [`simulate`], also inserted as a resource by the plugin.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationReport {
    pub simulation_id: String,
    pub body: ReportBody,
}

impl SimulationReport {
    pub fn simulation_type(&self) -> SimulationType {
        match self.body {
            ReportBody::Impact(_) => SimulationType::Impact,
            ReportBody::Orbital(_) => SimulationType::Orbital,
            ReportBody::Comparison(_) => SimulationType::Comparison,
            ReportBody::Deflection { .. } => SimulationType::Deflection,
            ReportBody::Comprehensive { .. } => SimulationType::Comprehensive,
        }
    }

    /// Frame span the consumer should animate over.
    pub fn animation_frames(&self) -> (u32, u32) {
        match &self.body {
            ReportBody::Impact(report) => (report.phases.approach_start, report.phases.simulation_end),
            ReportBody::Orbital(report) => (1, report.timeline.frame_count() as u32),
            ReportBody::Comparison(reports) => {
                let end = reports
                    .iter()
                    .map(|r| r.phases.simulation_end)
                    .max()
                    .unwrap_or(ImpactPhases::default().simulation_end);
                (1, end)
            }
            ReportBody::Deflection { .. } => (1, DEFLECTION_FRAME_END),
            ReportBody::Comprehensive { .. } => (1, COMPREHENSIVE_FRAME_END),
        }
    }
}

/// Run the kernel for a configuration.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    let body = match config.simulation_type {
        SimulationType::Impact => {
            let site = config.impact_site()?;
            ReportBody::Impact(impact_report(&config.asteroid, &site)?)
        }
        SimulationType::Orbital => ReportBody::Orbital(orbital_report(config)?),
        SimulationType::Comparison => {
            let site = config.impact_site()?;
            if config.asteroids.is_empty() {
                return Err(SimulationError::EmptyComparison);
            }
            let reports = config
                .asteroids
                .iter()
                .map(|record| impact_report(record, &site))
                .collect::<Result<Vec<_>, _>>()?;
            ReportBody::Comparison(reports)
        }
        SimulationType::Deflection => {
            let original = impact_report(&config.asteroid, &config.original_impact_site()?)?;
            let deflected = if config.deflection_successful() {
                let record = OrbitalElementsRecord {
                    inclination: config.orbital_elements.inclination + DEFLECTION_INCLINATION_DELTA_DEG,
                    ..config.orbital_elements.clone()
                };
                Some(orbit_report(config.asteroid.display_name(), &record, config.timeline()?)?)
            } else {
                None
            };
            ReportBody::Deflection { original, deflected }
        }
        SimulationType::Comprehensive => {
            let site = config.impact_site()?;
            let orbital = orbit_report(
                config.asteroid.display_name(),
                &config.orbital_elements,
                Timeline::daily(COMPREHENSIVE_APPROACH_DAYS)?,
            )?;
            let impact = impact_report(&config.asteroid, &site)?;
            ReportBody::Comprehensive { orbital, impact }
        }
    };

    Ok(SimulationReport {
        simulation_id: config.simulation_id().to_string(),
        body,
    })
}

/// Energetics, impact site and approach for one asteroid.
pub fn impact_report(
    record: &AsteroidRecord,
    site: &ImpactSiteRecord,
) -> Result<ImpactReport, PhysicsError> {
    let properties = record.to_properties()?;
    let energetics = ImpactEnergetics::from_properties(&properties)?;

    let site = site.to_coordinate()?;
    let site_position = site.to_cartesian(EARTH_RADIUS_KM)?;
    let approach = ApproachPath::new(site_position, properties.impact_angle_deg, DEFAULT_APPROACH_DISTANCE_KM)?;

    info!(
        "Impact {}: mass {:.3e} kg, energy {:.3e} J, {:.3e} t TNT, crater {:.2} km",
        record.display_name(),
        energetics.mass_kg(),
        energetics.kinetic_energy_j(),
        energetics.tnt_equivalent_tons(),
        energetics.crater_diameter_km()
    );

    Ok(ImpactReport {
        name: record.display_name().to_string(),
        properties,
        spectral_type: record.spectral_type(),
        energetics,
        site,
        site_position,
        approach,
        phases: ImpactPhases::default(),
    })
}

/// Orbit path and animated tracks for the configured asteroid.
pub fn orbital_report(config: &SimulationConfig) -> Result<OrbitalReport, PhysicsError> {
    orbit_report(config.asteroid.display_name(), &config.orbital_elements, config.timeline()?)
}

fn orbit_report(
    name: &str,
    record: &OrbitalElementsRecord,
    timeline: Timeline,
) -> Result<OrbitalReport, PhysicsError> {
    let elements = record.to_elements()?;
    let propagator = OrbitPropagator::default();

    let orbit_path = propagator.sample_orbit(&elements, ORBIT_PATH_POINTS)?;
    let asteroid_track = propagator.track(&elements, &timeline)?;

    let earth = OrbitalElements::circular(EARTH_ORBIT_RADIUS_AU, EARTH_ORBITAL_PERIOD_DAYS)?;
    let earth_track = propagator.track(&earth, &timeline)?;

    info!(
        "Orbit {}: a={:.4} AU, e={:.4}, period {:.1} d, {} frames over {:.1} d",
        name,
        elements.semi_major_axis,
        elements.eccentricity,
        elements.period(),
        timeline.frame_count(),
        timeline.duration()
    );

    let report = OrbitalReport {
        name: name.to_string(),
        periapsis: periapsis_position(&elements),
        apoapsis: apoapsis_position(&elements),
        elements,
        timeline,
        orbit_path,
        asteroid_track,
        earth_track,
    };

    if let Some((frame, distance)) = report.closest_approach() {
        let day = report.timeline.elapsed(frame).unwrap_or_default();
        info!(
            "Closest sampled approach to Earth: {:.4} AU ({:.3e} km) on day {:.1}",
            distance,
            distance * AU_TO_KM,
            day
        );
    }

    Ok(report)
}
