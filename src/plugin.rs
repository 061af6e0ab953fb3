//! Headless Bevy integration for the kernel.
//!
//! Runs the configured simulation once at startup and publishes the result
//! as a resource for the scene layer.

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::simulation::{SimulationReport, simulate};

/// Plugin running the kernel on the `SimulationConfig` resource.
///
/// Inserts a [`SimulationReport`] on success or a [`SimulationFailure`]
/// when the configuration is rejected.
pub struct KernelPlugin;

impl Plugin for KernelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, run_configured_simulation);
    }
}

/// Error message of a rejected run.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct SimulationFailure {
    pub message: String,
}

fn run_configured_simulation(mut commands: Commands, config: Option<Res<SimulationConfig>>) {
    let Some(config) = config else {
        warn!("No SimulationConfig resource; kernel has nothing to run");
        return;
    };

    match simulate(&config) {
        Ok(report) => {
            info!(
                "Simulation {} ({:?}) ready",
                report.simulation_id,
                report.simulation_type()
            );
            commands.insert_resource(report);
        }
        Err(err) => {
            warn!("Simulation {} failed: {}", config.simulation_id(), err);
            commands.insert_resource(SimulationFailure {
                message: err.to_string(),
            });
        }
    }
}

/// Convenience accessor for systems that only care about a finished report.
pub fn report_ready(report: Option<Res<SimulationReport>>) -> bool {
    report.is_some()
}
