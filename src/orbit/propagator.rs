//! Analytic position propagation for Keplerian orbits.
//!
//! Every position in this module goes through
//! [`OrbitPropagator::state_at_mean_anomaly`], so the static orbit path and
//! the animated body can never disagree.

use bevy::math::DVec3;
use std::f64::consts::TAU;

use super::elements::OrbitalElements;
use super::frame::OrbitalFrameTransform;
use super::kepler::{KeplerSolution, KeplerSolver, eccentric_to_true_anomaly};
use crate::error::{PhysicsError, require_finite, require_positive};
use crate::timeline::Timeline;

/// Full state of a body at one mean anomaly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPoint {
    /// Position in the reference frame
    pub position: DVec3,
    /// True anomaly ν in radians
    pub true_anomaly: f64,
    /// Distance from the focus
    pub radius: f64,
    /// Kepler solve that produced this point
    pub solution: KeplerSolution,
}

/// Position propagator with a configurable Kepler solver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitPropagator {
    pub solver: KeplerSolver,
}

impl OrbitPropagator {
    pub fn new(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    /// Compute the full orbit state at a mean anomaly.
    ///
    /// # Errors
    /// `InvalidPhysicalParameter` for invalid elements or a non-finite mean
    /// anomaly.
    pub fn state_at_mean_anomaly(
        &self,
        elements: &OrbitalElements,
        mean_anomaly: f64,
    ) -> Result<OrbitPoint, PhysicsError> {
        elements.validate()?;
        require_finite("mean_anomaly", mean_anomaly)?;
        Ok(self.state_unchecked(elements, mean_anomaly))
    }

    /// Position in the reference frame at a mean anomaly.
    pub fn position_at_mean_anomaly(
        &self,
        elements: &OrbitalElements,
        mean_anomaly: f64,
    ) -> Result<DVec3, PhysicsError> {
        self.state_at_mean_anomaly(elements, mean_anomaly)
            .map(|state| state.position)
    }

    /// Orbit state for elements the caller has already validated.
    fn state_unchecked(&self, elements: &OrbitalElements, mean_anomaly: f64) -> OrbitPoint {
        let e = elements.eccentricity;

        let solution = self.solver.iterate(mean_anomaly, e);
        let e_anomaly = solution.eccentric_anomaly;

        let true_anomaly = eccentric_to_true_anomaly(e_anomaly, e);
        let radius = elements.semi_major_axis * (1.0 - e * e_anomaly.cos());

        let (sin_nu, cos_nu) = true_anomaly.sin_cos();
        let position = OrbitalFrameTransform::from_elements(elements).apply(radius * cos_nu, radius * sin_nu);

        OrbitPoint {
            position,
            true_anomaly,
            radius,
            solution,
        }
    }

    /// Position after `elapsed_days` measured from periapsis passage.
    pub fn position_at_time(
        &self,
        elements: &OrbitalElements,
        elapsed_days: f64,
    ) -> Result<DVec3, PhysicsError> {
        elements.validate()?;
        let m = mean_anomaly_at(elapsed_days, elements.period())?;
        Ok(self.state_unchecked(elements, m).position)
    }

    /// Sample one closed revolution at `n_points` evenly spaced mean anomalies.
    ///
    /// Mean anomalies run over `[0, 2π)`, so the first and last samples are
    /// neighbours under wraparound rather than duplicates.
    pub fn sample_orbit(
        &self,
        elements: &OrbitalElements,
        n_points: usize,
    ) -> Result<Vec<DVec3>, PhysicsError> {
        elements.validate()?;
        if n_points < 1 {
            return Err(PhysicsError::invalid(
                "n_points",
                n_points as f64,
                "at least one sample is required",
            ));
        }

        let step = TAU / n_points as f64;
        Ok((0..n_points)
            .map(|k| self.state_unchecked(elements, k as f64 * step).position)
            .collect())
    }

    /// Positions at every frame of a timeline (elapsed time in days).
    pub fn track(
        &self,
        elements: &OrbitalElements,
        timeline: &Timeline,
    ) -> Result<Vec<DVec3>, PhysicsError> {
        elements.validate()?;
        let period = elements.period();
        timeline
            .samples()
            .map(|(_, elapsed_days)| {
                let m = mean_anomaly_at(elapsed_days, period)?;
                Ok(self.state_unchecked(elements, m).position)
            })
            .collect()
    }
}

/// Mean anomaly after `elapsed` time units on an orbit of period `period`
/// (same unit): `M = 2π * (t mod T) / T`, in `[0, 2π)`.
pub fn mean_anomaly_at(elapsed: f64, period: f64) -> Result<f64, PhysicsError> {
    require_finite("elapsed", elapsed)?;
    require_positive("period", period)?;
    Ok(TAU * elapsed.rem_euclid(period) / period)
}

/// Position at a mean anomaly using the default solver.
pub fn position_at_mean_anomaly(
    elements: &OrbitalElements,
    mean_anomaly: f64,
) -> Result<DVec3, PhysicsError> {
    OrbitPropagator::default().position_at_mean_anomaly(elements, mean_anomaly)
}

/// Sample one closed revolution using the default solver.
pub fn sample_orbit(elements: &OrbitalElements, n_points: usize) -> Result<Vec<DVec3>, PhysicsError> {
    OrbitPropagator::default().sample_orbit(elements, n_points)
}

/// Point on a circular, equatorial orbit: `(r cos θ, r sin θ, 0)`.
pub fn circular_position(radius: f64, angle: f64) -> DVec3 {
    let (sin_a, cos_a) = angle.sin_cos();
    DVec3::new(radius * cos_a, radius * sin_a, 0.0)
}

/// Periapsis location in the reference frame.
pub fn periapsis_position(elements: &OrbitalElements) -> DVec3 {
    OrbitalFrameTransform::from_elements(elements).apply(elements.periapsis_distance(), 0.0)
}

/// Apoapsis location in the reference frame.
pub fn apoapsis_position(elements: &OrbitalElements) -> DVec3 {
    OrbitalFrameTransform::from_elements(elements).apply(-elements.apoapsis_distance(), 0.0)
}
