//! Mapping between continuous physical time and discrete animation frames.
//!
//! A [`Timeline`] never changes the physics: it only decides at which
//! elapsed times the consumer samples the kernel.

use crate::error::{PhysicsError, require_finite};
use crate::types::SECONDS_PER_DAY;

/// Frame budget applied when a duration is turned into one frame per day.
pub const DEFAULT_FRAME_CAP: usize = 1000;

/// Evenly spaced samples over a physical duration.
///
/// `duration` is in days for orbital timelines; the mapping itself is
/// unit-agnostic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    duration: f64,
    frame_count: usize,
}

impl Timeline {
    /// Create a timeline of `frame_count` samples spanning `duration`.
    ///
    /// # Errors
    /// `InvalidPhysicalParameter` for a negative or non-finite duration, or
    /// a frame count below one.
    pub fn new(duration: f64, frame_count: usize) -> Result<Self, PhysicsError> {
        require_finite("duration", duration)?;
        if duration < 0.0 {
            return Err(PhysicsError::invalid("duration", duration, "must not be negative"));
        }
        if frame_count < 1 {
            return Err(PhysicsError::invalid(
                "frame_count",
                frame_count as f64,
                "at least one sample is required",
            ));
        }
        Ok(Self {
            duration,
            frame_count,
        })
    }

    /// Like [`Timeline::new`], with the frame count limited to `cap`.
    pub fn capped(duration: f64, frame_count: usize, cap: usize) -> Result<Self, PhysicsError> {
        Self::new(duration, frame_count.min(cap.max(1)))
    }

    /// One frame per simulated day, capped at [`DEFAULT_FRAME_CAP`].
    pub fn daily(duration_days: f64) -> Result<Self, PhysicsError> {
        require_finite("duration", duration_days)?;
        let frames = duration_days.round().max(1.0) as usize;
        Self::capped(duration_days, frames, DEFAULT_FRAME_CAP)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn last_frame(&self) -> usize {
        self.frame_count - 1
    }

    /// Elapsed time between consecutive frames (zero for a single sample).
    pub fn step(&self) -> f64 {
        if self.frame_count == 1 {
            0.0
        } else {
            self.duration / (self.frame_count - 1) as f64
        }
    }

    /// Elapsed time at `frame`, or `None` past the last frame.
    pub fn elapsed(&self, frame: usize) -> Option<f64> {
        (frame < self.frame_count).then(|| frame as f64 * self.step())
    }

    /// Elapsed seconds at `frame`, treating the duration as days.
    pub fn elapsed_seconds(&self, frame: usize) -> Option<f64> {
        self.elapsed(frame).map(|days| days * SECONDS_PER_DAY)
    }

    /// Nearest frame to a physical instant, clamped into `[0, last_frame]`.
    pub fn frame_at(&self, elapsed: f64) -> usize {
        let step = self.step();
        if step == 0.0 || !elapsed.is_finite() || elapsed <= 0.0 {
            return if elapsed == f64::INFINITY { self.last_frame() } else { 0 };
        }
        let frame = (elapsed / step).round();
        if frame >= self.last_frame() as f64 {
            self.last_frame()
        } else {
            frame as usize
        }
    }

    /// `(frame, elapsed)` pairs for every frame in order.
    pub fn samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let step = self.step();
        (0..self.frame_count).map(move |frame| (frame, frame as f64 * step))
    }
}
