//! Classical Keplerian orbital elements.

use crate::error::{PhysicsError, require_elliptical, require_finite, require_positive};
use crate::types::{DAYS_PER_YEAR, DEG_TO_RAD};

/// Keplerian orbital elements for a bound (elliptical) orbit.
/// All angular values in radians. The length unit of `semi_major_axis`
/// sets the length unit of every propagated position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU unless the caller rescales)
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,
    /// Inclination in radians
    pub inclination: f64,
    /// Longitude of ascending node in radians
    pub longitude_ascending_node: f64,
    /// Argument of periapsis in radians
    pub argument_of_periapsis: f64,
    /// Orbital period in days, if known
    pub period_days: Option<f64>,
}

impl OrbitalElements {
    /// Create validated orbital elements.
    ///
    /// # Arguments
    /// * `semi_major_axis` - Semi-major axis (positive)
    /// * `eccentricity` - Orbital eccentricity, `0 ≤ e < 1`
    /// * `inclination` - Inclination in radians
    /// * `longitude_ascending_node` - Longitude of ascending node in radians
    /// * `argument_of_periapsis` - Argument of periapsis in radians
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_ascending_node: f64,
        argument_of_periapsis: f64,
    ) -> Result<Self, PhysicsError> {
        let elements = Self {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_ascending_node,
            argument_of_periapsis,
            period_days: None,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Create validated orbital elements with angles given in degrees.
    pub fn from_degrees(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        longitude_ascending_node_deg: f64,
        argument_of_periapsis_deg: f64,
    ) -> Result<Self, PhysicsError> {
        Self::new(
            semi_major_axis,
            eccentricity,
            inclination_deg * DEG_TO_RAD,
            longitude_ascending_node_deg * DEG_TO_RAD,
            argument_of_periapsis_deg * DEG_TO_RAD,
        )
    }

    /// Circular, equatorial orbit of the given radius (e.g. a reference planet).
    pub fn circular(radius: f64, period_days: f64) -> Result<Self, PhysicsError> {
        Self::new(radius, 0.0, 0.0, 0.0, 0.0)?.with_period_days(period_days)
    }

    /// Attach an orbital period in days.
    pub fn with_period_days(mut self, period_days: f64) -> Result<Self, PhysicsError> {
        self.period_days = Some(require_positive("period_days", period_days)?);
        Ok(self)
    }

    /// Attach an orbital period in (Julian) years.
    pub fn with_period_years(self, period_years: f64) -> Result<Self, PhysicsError> {
        require_positive("orbital_period_years", period_years)?;
        self.with_period_days(period_years * DAYS_PER_YEAR)
    }

    /// Check every invariant the propagator relies on.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        require_positive("semi_major_axis", self.semi_major_axis)?;
        require_elliptical(self.eccentricity)?;
        require_finite("inclination", self.inclination)?;
        require_finite("longitude_ascending_node", self.longitude_ascending_node)?;
        require_finite("argument_of_periapsis", self.argument_of_periapsis)?;
        if let Some(period) = self.period_days {
            require_positive("period_days", period)?;
        }
        Ok(())
    }

    /// Same orbit with the semi-major axis multiplied by `factor`.
    ///
    /// The period is kept: this rescales lengths into a scene unit, it does
    /// not describe a different physical orbit.
    pub fn scaled(&self, factor: f64) -> Result<Self, PhysicsError> {
        require_positive("scale_factor", factor)?;
        Ok(Self {
            semi_major_axis: self.semi_major_axis * factor,
            ..*self
        })
    }

    /// Orbital period in days.
    ///
    /// Falls back to Kepler's third law for a solar-mass primary
    /// (`T[yr] = a[AU]^1.5`) when no period was supplied.
    pub fn period(&self) -> f64 {
        self.period_days
            .unwrap_or_else(|| self.semi_major_axis.powf(1.5) * DAYS_PER_YEAR)
    }

    /// Periapsis distance (closest approach to the focus).
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance (farthest from the focus).
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Returns true for the degenerate circular case.
    pub fn is_circular(&self) -> bool {
        self.eccentricity == 0.0
    }
}
