//! Command-line argument parsing for the `impactor` binary.
//!
//! Accepts any iterator of strings so parsing can be tested without a
//! process environment.

use std::path::PathBuf;

use crate::config::{ConfigError, SimulationConfig, SimulationType};
use crate::scenarios;

/// Directory receiving `status_<id>.json` when `--status-dir` is not given.
pub const DEFAULT_STATUS_DIR: &str = "output";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a simulation.
    Run {
        /// JSON configuration file; the default preset when absent.
        config_path: Option<PathBuf>,
        /// Preset scenario id, used when no config file is given.
        scenario: Option<String>,
        /// Run type override for presets.
        simulation_type: Option<SimulationType>,
        /// Overrides `output_id` from the configuration.
        output_id: Option<String>,
        /// Where the run status record is written.
        status_dir: PathBuf,
    },
    /// List the preset scenarios.
    ListScenarios,
    Help,
    Version,
}

/// Errors in the argument list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("option `{0}` requires a value")]
    MissingValue(String),

    #[error("unknown argument `{0}`")]
    Unknown(String),

    #[error("unknown simulation type `{0}` (expected impact, orbital, comparison, deflection or comprehensive)")]
    SimulationType(String),

    #[error("unknown scenario `{0}`")]
    Scenario(String),
}

impl Command {
    /// Parse arguments, the first item being the program name.
    pub fn parse_from<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().skip(1).map(|s| s.as_ref().to_string()).collect();

        let mut config_path = None;
        let mut scenario = None;
        let mut simulation_type = None;
        let mut output_id = None;
        let mut status_dir = PathBuf::from(DEFAULT_STATUS_DIR);

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let mut value = || iter.next().cloned().ok_or_else(|| ArgsError::MissingValue(arg.clone()));
            match arg.as_str() {
                "-c" | "--config" => config_path = Some(PathBuf::from(value()?)),
                "-s" | "--scenario" => {
                    let id = value()?;
                    if scenarios::find(&id).is_none() {
                        return Err(ArgsError::Scenario(id));
                    }
                    scenario = Some(id);
                }
                "-t" | "--type" => {
                    let name = value()?;
                    simulation_type = Some(parse_simulation_type(&name)?);
                }
                "-o" | "--output-id" => output_id = Some(value()?),
                "--status-dir" => status_dir = PathBuf::from(value()?),
                "-l" | "--list" => return Ok(Command::ListScenarios),
                "-h" | "--help" => return Ok(Command::Help),
                "-V" | "--version" => return Ok(Command::Version),
                unknown => return Err(ArgsError::Unknown(unknown.to_string())),
            }
        }

        Ok(Command::Run {
            config_path,
            scenario,
            simulation_type,
            output_id,
            status_dir,
        })
    }

    /// Parse the process arguments.
    pub fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(std::env::args())
    }
}

fn parse_simulation_type(name: &str) -> Result<SimulationType, ArgsError> {
    SimulationType::from_name(name).ok_or_else(|| ArgsError::SimulationType(name.to_string()))
}

/// Resolve the configuration a `Run` command asks for.
///
/// A config file wins over a preset; with neither, the first preset is used.
/// A comparison run over a preset compares every preset.
pub fn resolve_config(
    config_path: Option<&PathBuf>,
    scenario: Option<&str>,
    simulation_type: Option<SimulationType>,
    output_id: Option<&str>,
) -> Result<SimulationConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => {
            let mut config = SimulationConfig::load(path)?;
            if let Some(simulation_type) = simulation_type {
                config.simulation_type = simulation_type;
            }
            config
        }
        None => {
            let simulation_type = simulation_type.unwrap_or_default();
            match (simulation_type, scenario.and_then(scenarios::find)) {
                (SimulationType::Comparison, _) => scenarios::comparison_config(),
                (_, Some(preset)) => preset.to_config(simulation_type),
                (_, None) => scenarios::SCENARIOS[0].to_config(simulation_type),
            }
        }
    };

    if let Some(id) = output_id {
        config.output_id = Some(id.to_string());
    }
    Ok(config)
}

pub const USAGE: &str = "\
Usage: impactor [OPTIONS]

Options:
  -c, --config <PATH>      JSON simulation configuration
  -s, --scenario <ID>      Preset scenario (when no config is given)
  -t, --type <TYPE>        impact | orbital | comparison | deflection | comprehensive
  -o, --output-id <ID>     Override the simulation id
      --status-dir <DIR>   Where status_<id>.json is written [default: output]
  -l, --list               List preset scenarios
  -h, --help               Show this help
  -V, --version            Show version";
