//! Run status records written next to the rendered output.
//!
//! One `status_<simulation_id>.json` per run, rewritten as the run moves from
//! `running` to `completed` or `failed`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::simulation::{ImpactReport, OrbitalReport, ReportBody, SimulationReport};

/// Errors while writing or reading a status record.
#[derive(thiserror::Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid status JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lifecycle stage of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
}

/// Contents of a status file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub simulation_id: String,
    pub status: RunStatus,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    pub kernel_version: String,
    pub data: Value,
}

impl StatusRecord {
    fn new(simulation_id: &str, status: RunStatus, data: Value) -> Self {
        Self {
            simulation_id: simulation_id.to_string(),
            status,
            timestamp: unix_now(),
            kernel_version: env!("CARGO_PKG_VERSION").to_string(),
            data,
        }
    }

    /// Configuration accepted, kernel about to run.
    pub fn running(simulation_id: &str) -> Self {
        Self::new(simulation_id, RunStatus::Running, json!({ "config_loaded": true }))
    }

    pub fn completed(report: &SimulationReport) -> Self {
        Self::new(&report.simulation_id, RunStatus::Completed, report_summary(report))
    }

    pub fn failed(simulation_id: &str, message: &str) -> Self {
        Self::new(simulation_id, RunStatus::Failed, json!({ "error": message }))
    }

    pub fn file_name(&self) -> String {
        format!("status_{}.json", self.simulation_id)
    }

    /// Write the record as pretty JSON into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, StatusError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StatusError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Scalar summary of a finished report for the status file.
pub fn report_summary(report: &SimulationReport) -> Value {
    let (frame_start, frame_end) = report.animation_frames();
    let body = match &report.body {
        ReportBody::Impact(impact) => json!({ "impact": impact_summary(impact) }),
        ReportBody::Orbital(orbit) => json!({ "orbit": orbit_summary(orbit) }),
        ReportBody::Comparison(impacts) => {
            json!({ "impacts": impacts.iter().map(impact_summary).collect::<Vec<_>>() })
        }
        ReportBody::Deflection { original, deflected } => json!({
            "original": impact_summary(original),
            "deflection_successful": deflected.is_some(),
            "deflected": deflected.as_ref().map(orbit_summary),
        }),
        ReportBody::Comprehensive { orbital, impact } => json!({
            "orbit": orbit_summary(orbital),
            "impact": impact_summary(impact),
        }),
    };

    json!({
        "simulation_type": report.simulation_type(),
        "animation_frames": [frame_start, frame_end],
        "report": body,
    })
}

fn impact_summary(impact: &ImpactReport) -> Value {
    json!({
        "name": impact.name,
        "spectral_type": impact.spectral_type.letter(),
        "latitude": impact.site.latitude_deg,
        "longitude": impact.site.longitude_deg,
        "mass_kg": impact.energetics.mass_kg(),
        "kinetic_energy_j": impact.energetics.kinetic_energy_j(),
        "tnt_equivalent_tons": impact.energetics.tnt_equivalent_tons(),
        "crater_diameter_km": impact.energetics.crater_diameter_km(),
    })
}

fn orbit_summary(orbit: &OrbitalReport) -> Value {
    let closest = orbit.closest_approach();
    json!({
        "name": orbit.name,
        "semi_major_axis_au": orbit.elements.semi_major_axis,
        "eccentricity": orbit.elements.eccentricity,
        "inclination_deg": orbit.elements.inclination.to_degrees(),
        "period_days": orbit.elements.period(),
        "frame_count": orbit.timeline.frame_count(),
        "duration_days": orbit.timeline.duration(),
        "closest_approach_frame": closest.map(|(frame, _)| frame),
        "closest_approach_au": closest.map(|(_, distance)| distance),
    })
}
