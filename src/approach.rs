//! Impact sequence schedule and incoming-body geometry.

use bevy::math::DVec3;

use crate::error::{PhysicsError, require_finite, require_positive};
use crate::types::DEG_TO_RAD;

/// Distance from the impact site at which the approach starts (km),
/// roughly a quarter of the Earth–Moon distance.
pub const DEFAULT_APPROACH_DISTANCE_KM: f64 = 100_000.0;

/// Frame numbers of the phases of an impact sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactPhases {
    pub approach_start: u32,
    pub impact_moment: u32,
    pub crater_formation: u32,
    pub shockwave_start: u32,
    pub debris_peak: u32,
    pub simulation_end: u32,
}

impl Default for ImpactPhases {
    fn default() -> Self {
        Self {
            approach_start: 1,
            impact_moment: 120,
            crater_formation: 150,
            shockwave_start: 160,
            debris_peak: 200,
            simulation_end: 300,
        }
    }
}

impl ImpactPhases {
    /// Phases must be non-decreasing from approach to end.
    pub fn is_ordered(&self) -> bool {
        let frames = [
            self.approach_start,
            self.impact_moment,
            self.crater_formation,
            self.shockwave_start,
            self.debris_peak,
            self.simulation_end,
        ];
        frames.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Frames from approach start to impact, inclusive of both ends.
    pub fn approach_frames(&self) -> u32 {
        self.impact_moment.saturating_sub(self.approach_start) + 1
    }
}

/// Straight-line approach of the impactor onto the impact site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproachPath {
    pub start: DVec3,
    pub impact_site: DVec3,
}

impl ApproachPath {
    /// Build the approach for an impact at `impact_site`.
    ///
    /// The start point is offset from the site by `distance` along
    /// `(cos θ, 0, sin θ)`, θ being the impact angle from horizontal.
    pub fn new(impact_site: DVec3, impact_angle_deg: f64, distance: f64) -> Result<Self, PhysicsError> {
        require_finite("impact_angle", impact_angle_deg)?;
        require_positive("approach_distance", distance)?;
        if !impact_site.is_finite() {
            return Err(PhysicsError::invalid("impact_site", f64::NAN, "must be finite"));
        }

        let (sin_a, cos_a) = (impact_angle_deg * DEG_TO_RAD).sin_cos();
        let start = impact_site + DVec3::new(distance * cos_a, 0.0, distance * sin_a);
        Ok(Self { start, impact_site })
    }

    /// Position at fraction `t` of the approach (0 = start, 1 = impact),
    /// clamped to the segment.
    pub fn position_at(&self, t: f64) -> DVec3 {
        self.start.lerp(self.impact_site, t.clamp(0.0, 1.0))
    }

    /// Position at a frame of the schedule; before approach start the body
    /// sits at the start point, from impact on it sits at the site.
    pub fn position_at_frame(&self, phases: &ImpactPhases, frame: u32) -> DVec3 {
        let span = phases.impact_moment.saturating_sub(phases.approach_start);
        if span == 0 {
            return if frame >= phases.impact_moment { self.impact_site } else { self.start };
        }
        let t = (frame as f64 - phases.approach_start as f64) / span as f64;
        self.position_at(t)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.impact_site)
    }
}
