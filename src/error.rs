//! Error taxonomy shared by the physics kernel.
//!
//! Only invalid inputs are errors. Numerical non-convergence is reported
//! alongside the result (see [`crate::orbit::kepler::KeplerSolution`]) and
//! degenerate-but-valid inputs such as a zero impact angle or a polar
//! latitude always produce a value.

/// Invalid input to a kernel function.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("invalid physical parameter `{name}` = {value}: {reason}")]
    InvalidPhysicalParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl PhysicsError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PhysicsError::InvalidPhysicalParameter { name, value, reason }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            PhysicsError::InvalidPhysicalParameter { name, .. } => name,
        }
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, PhysicsError> {
    if !value.is_finite() {
        return Err(PhysicsError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PhysicsError::invalid(name, value, "must be positive"));
    }
    Ok(value)
}

/// Require a finite value (angles, anomalies).
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, PhysicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::invalid(name, value, "must be finite"))
    }
}

/// Require an eccentricity on the bound-orbit range `[0, 1)`.
pub(crate) fn require_elliptical(value: f64) -> Result<f64, PhysicsError> {
    if !(0.0..1.0).contains(&value) {
        return Err(PhysicsError::invalid(
            "eccentricity",
            value,
            "must lie in [0, 1) for elliptical propagation",
        ));
    }
    Ok(value)
}
