//! Impactor - Orbital & Impact Physics Kernel
//!
//! Headless runner: loads a simulation configuration, runs the kernel in a
//! minimal Bevy app, logs the resulting report and records the run status.

use std::path::Path;
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use impactor::cli::{self, Command};
use impactor::plugin::{KernelPlugin, SimulationFailure};
use impactor::scenarios::SCENARIOS;
use impactor::simulation::{ReportBody, SimulationReport};
use impactor::status::StatusRecord;

fn main() -> ExitCode {
    let command = match Command::parse() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("Error: {err}\n\n{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    let (config_path, scenario, simulation_type, output_id, status_dir) = match command {
        Command::Run {
            config_path,
            scenario,
            simulation_type,
            output_id,
            status_dir,
        } => (config_path, scenario, simulation_type, output_id, status_dir),
        Command::ListScenarios => {
            for s in SCENARIOS {
                println!("{:<16} {}", s.id, s.description);
            }
            return ExitCode::SUCCESS;
        }
        Command::Help => {
            println!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("impactor {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
    };

    let config = match cli::resolve_config(
        config_path.as_ref(),
        scenario.as_deref(),
        simulation_type,
        output_id.as_deref(),
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            let simulation_id = output_id.as_deref().unwrap_or("unknown");
            write_status(&status_dir, &StatusRecord::failed(simulation_id, &err.to_string()));
            return ExitCode::FAILURE;
        }
    };
    let simulation_id = config.simulation_id().to_string();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), KernelPlugin))
        .insert_resource(config);
    write_status(&status_dir, &StatusRecord::running(&simulation_id));
    app.update();

    if let Some(report) = app.world().get_resource::<SimulationReport>() {
        log_summary(report);
        write_status(&status_dir, &StatusRecord::completed(report));
        ExitCode::SUCCESS
    } else {
        let message = app
            .world()
            .get_resource::<SimulationFailure>()
            .map(|failure| failure.message.clone())
            .unwrap_or_else(|| "kernel produced no report".to_string());
        error!("{}", message);
        write_status(&status_dir, &StatusRecord::failed(&simulation_id, &message));
        ExitCode::FAILURE
    }
}

fn write_status(dir: &Path, record: &StatusRecord) {
    match record.write_to(dir) {
        Ok(path) => info!("Status {:?} written to {}", record.status, path.display()),
        Err(err) => warn!("Could not write status for {}: {}", record.simulation_id, err),
    }
}

fn log_summary(report: &SimulationReport) {
    match &report.body {
        ReportBody::Impact(impact) => {
            info!(
                "{}: {:.2} Mt TNT, crater {:.2} km at ({:.4}, {:.4})",
                impact.name,
                impact.energetics.tnt_equivalent_megatons(),
                impact.energetics.crater_diameter_km(),
                impact.site.latitude_deg,
                impact.site.longitude_deg
            );
        }
        ReportBody::Orbital(orbit) => {
            let (first, last) = report.animation_frames();
            info!(
                "{}: {} path points, periapsis {:.4} AU, frames {}..={}",
                orbit.name,
                orbit.orbit_path.len(),
                orbit.periapsis.length(),
                first,
                last
            );
        }
        ReportBody::Comparison(impacts) => {
            for impact in impacts {
                info!(
                    "{:<16} {:>12.2} Mt TNT  crater {:>8.2} km",
                    impact.name,
                    impact.energetics.tnt_equivalent_megatons(),
                    impact.energetics.crater_diameter_km()
                );
            }
        }
        ReportBody::Deflection { original, deflected } => {
            info!(
                "{}: undeflected impact {:.2} Mt TNT at ({:.4}, {:.4})",
                original.name,
                original.energetics.tnt_equivalent_megatons(),
                original.site.latitude_deg,
                original.site.longitude_deg
            );
            match deflected {
                Some(orbit) => info!(
                    "Deflection succeeded: inclination now {:.3} deg",
                    orbit.elements.inclination.to_degrees()
                ),
                None => info!("Deflection unsuccessful; original impact stands"),
            }
        }
        ReportBody::Comprehensive { orbital, impact } => {
            info!(
                "{}: {} approach frames, then {:.2} Mt TNT, crater {:.2} km",
                impact.name,
                orbital.timeline.frame_count(),
                impact.energetics.tnt_equivalent_megatons(),
                impact.energetics.crater_diameter_km()
            );
        }
    }
}
