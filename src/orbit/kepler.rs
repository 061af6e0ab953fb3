//! Kepler equation solver using Newton's method.

use bevy::log::debug;

use crate::error::{PhysicsError, require_elliptical, require_finite};

/// Default absolute tolerance on the eccentric anomaly step (radians).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// How a solve terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convergence {
    /// Newton step fell below the tolerance.
    Converged,
    /// Iteration cap reached before the step met the tolerance.
    IterationCap,
    /// `|f'(E)|` dropped below the tolerance (near-parabolic degeneracy).
    /// The estimate from before the would-be division is returned.
    DegenerateDerivative,
}

/// Result of a Kepler solve.
///
/// Non-convergence is not an error: the best available estimate is always
/// returned together with the achieved residual so callers can decide
/// whether it is good enough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in radians
    pub eccentric_anomaly: f64,
    /// |E - e*sin(E) - M| at the returned estimate
    pub residual: f64,
    /// Newton steps actually taken
    pub iterations: usize,
    pub convergence: Convergence,
}

impl KeplerSolution {
    /// Returns true if the step tolerance was met.
    pub fn is_converged(&self) -> bool {
        self.convergence == Convergence::Converged
    }
}

/// Newton–Raphson inverter for Kepler's equation `M = E - e*sin(E)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    /// Absolute tolerance on successive estimates, also used as the
    /// derivative guard threshold.
    pub tolerance: f64,
    /// Maximum number of Newton steps.
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Solve Kepler's equation for the eccentric anomaly.
    ///
    /// # Arguments
    /// * `mean_anomaly` - Mean anomaly M in radians (any real value)
    /// * `eccentricity` - Orbital eccentricity, `0 ≤ e < 1`
    ///
    /// # Errors
    /// `InvalidPhysicalParameter` for a non-finite mean anomaly or an
    /// eccentricity outside `[0, 1)`. Hitting the iteration cap or the
    /// derivative guard is reported in [`KeplerSolution::convergence`].
    pub fn solve(
        &self,
        mean_anomaly: f64,
        eccentricity: f64,
    ) -> Result<KeplerSolution, PhysicsError> {
        require_finite("mean_anomaly", mean_anomaly)?;
        require_elliptical(eccentricity)?;
        Ok(self.iterate(mean_anomaly, eccentricity))
    }

    /// Newton iteration without argument validation.
    ///
    /// Callers must already hold a validated eccentricity.
    pub(crate) fn iterate(&self, mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
        let m = mean_anomaly;
        let e = eccentricity;

        // Initial guess: E = M
        let mut e_anomaly = m;
        let mut iterations = 0;
        let mut convergence = Convergence::IterationCap;

        while iterations < self.max_iterations {
            // f(E) = E - e*sin(E) - M
            let f = e_anomaly - e * e_anomaly.sin() - m;
            // f'(E) = 1 - e*cos(E)
            let f_prime = 1.0 - e * e_anomaly.cos();

            if f_prime.abs() < self.tolerance {
                convergence = Convergence::DegenerateDerivative;
                break;
            }

            let next = e_anomaly - f / f_prime;
            let step = (next - e_anomaly).abs();
            e_anomaly = next;
            iterations += 1;

            if step < self.tolerance {
                convergence = Convergence::Converged;
                break;
            }
        }

        let residual = (e_anomaly - e * e_anomaly.sin() - m).abs();
        if convergence != Convergence::Converged {
            debug!(
                "Kepler solve stopped early ({:?}) for M={}, e={}: residual {:.3e} after {} steps",
                convergence, m, e, residual, iterations
            );
        }

        KeplerSolution {
            eccentric_anomaly: e_anomaly,
            residual,
            iterations,
            convergence,
        }
    }
}

/// Solve Kepler's equation with the default tolerance and iteration cap.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<f64, PhysicsError> {
    KeplerSolver::default()
        .solve(mean_anomaly, eccentricity)
        .map(|solution| solution.eccentric_anomaly)
}

/// Compute true anomaly from eccentric anomaly.
///
/// Uses atan2 for full quadrant coverage:
/// ν = 2 * atan2(sqrt(1+e) * sin(E/2), sqrt(1-e) * cos(E/2))
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}
