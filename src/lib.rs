//! Impactor - Orbital & Impact Physics Kernel
//!
//! Keplerian orbit propagation, geodetic conversion, impact energetics and
//! frame scheduling for asteroid impact visualizations. The kernel is pure;
//! the Bevy plugin and binary only move configurations in and reports out.

pub mod approach;
pub mod cli;
pub mod config;
pub mod error;
pub mod geodetic;
pub mod impact;
pub mod orbit;
pub mod plugin;
pub mod scenarios;
pub mod simulation;
pub mod spectral;
pub mod status;
pub mod timeline;
pub mod types;

#[cfg(test)]
pub mod test_utils;
