//! Rotation from the orbital plane into the reference frame.
//!
//! Composes rotation by ω about the orbit normal, by i about the line of
//! nodes and by Ω about the reference pole. Only the first two columns of
//! the full rotation are needed because orbital-plane points have z = 0.

use bevy::math::DVec3;

use super::elements::OrbitalElements;

/// Closed-form 3×2 projection from perifocal `(x, y)` to reference `(X, Y, Z)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalFrameTransform {
    p11: f64,
    p12: f64,
    p21: f64,
    p22: f64,
    p31: f64,
    p32: f64,
}

impl OrbitalFrameTransform {
    /// Build the projection from the three orientation angles (radians).
    pub fn new(longitude_ascending_node: f64, argument_of_periapsis: f64, inclination: f64) -> Self {
        let (sin_node, cos_node) = longitude_ascending_node.sin_cos();
        let (sin_peri, cos_peri) = argument_of_periapsis.sin_cos();
        let (sin_i, cos_i) = inclination.sin_cos();

        Self {
            p11: cos_node * cos_peri - sin_node * sin_peri * cos_i,
            p12: -cos_node * sin_peri - sin_node * cos_peri * cos_i,
            p21: sin_node * cos_peri + cos_node * sin_peri * cos_i,
            p22: -sin_node * sin_peri + cos_node * cos_peri * cos_i,
            p31: sin_peri * sin_i,
            p32: cos_peri * sin_i,
        }
    }

    pub fn from_elements(elements: &OrbitalElements) -> Self {
        Self::new(
            elements.longitude_ascending_node,
            elements.argument_of_periapsis,
            elements.inclination,
        )
    }

    /// Map an orbital-plane point `(x, y, 0)` into the reference frame.
    pub fn apply(&self, x: f64, y: f64) -> DVec3 {
        DVec3::new(
            self.p11 * x + self.p12 * y,
            self.p21 * x + self.p22 * y,
            self.p31 * x + self.p32 * y,
        )
    }

    /// Unit vector pointing at periapsis.
    pub fn periapsis_axis(&self) -> DVec3 {
        DVec3::new(self.p11, self.p21, self.p31)
    }

    /// Unit vector 90° ahead of periapsis in the direction of motion.
    pub fn transverse_axis(&self) -> DVec3 {
        DVec3::new(self.p12, self.p22, self.p32)
    }

    /// Orbit normal (angular momentum direction).
    pub fn orbit_normal(&self) -> DVec3 {
        self.periapsis_axis().cross(self.transverse_axis())
    }
}

/// One-shot transform of an orbital-plane point.
pub fn transform_to_reference(
    x: f64,
    y: f64,
    longitude_ascending_node: f64,
    argument_of_periapsis: f64,
    inclination: f64,
) -> DVec3 {
    OrbitalFrameTransform::new(longitude_ascending_node, argument_of_periapsis, inclination).apply(x, y)
}
