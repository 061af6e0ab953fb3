//! Keplerian orbit kernel.
//!
//! Solves Kepler's equation, rotates orbital-plane points into the
//! reference frame and samples positions along an orbit or a timeline.
//!
//! Coordinate frame:
//! - 3D heliocentric (Sun at the focus), ecliptic reference plane.
//! - Lengths in the unit of the semi-major axis (AU for scenario runs).

pub mod elements;
pub mod frame;
pub mod kepler;
pub mod propagator;

#[cfg(test)]
mod proptest_orbit;

pub use elements::OrbitalElements;
pub use frame::{OrbitalFrameTransform, transform_to_reference};
pub use kepler::{Convergence, KeplerSolution, KeplerSolver, eccentric_to_true_anomaly, solve_kepler};
pub use propagator::{
    OrbitPoint, OrbitPropagator, apoapsis_position, circular_position, mean_anomaly_at,
    periapsis_position, position_at_mean_anomaly, sample_orbit,
};
