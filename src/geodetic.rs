//! Latitude/longitude ↔ Cartesian conversion on a spherical body.
//!
//! Frame: z points at the north pole, x at (lat 0°, lon 0°), y at
//! (lat 0°, lon 90°). No ellipsoidal flattening.
//!
//! At the exact poles longitude is undefined. [`to_geodetic`] then returns
//! whatever `atan2(y, x)` yields for the residual rounding noise (usually
//! 0° or ±180°); this is expected and is not an error.

use bevy::math::DVec3;

use crate::error::{PhysicsError, require_finite, require_positive};
use crate::types::{CartesianVector, DEG_TO_RAD, RAD_TO_DEG};

/// A point on the sphere in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoordinate {
    /// Latitude in degrees, [-90, 90]
    pub latitude_deg: f64,
    /// Longitude in degrees, (-180, 180]
    pub longitude_deg: f64,
}

impl GeodeticCoordinate {
    /// Validated coordinate; longitude is normalized into (-180°, 180°].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, PhysicsError> {
        require_finite("latitude", latitude_deg)?;
        require_finite("longitude", longitude_deg)?;
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(PhysicsError::invalid(
                "latitude",
                latitude_deg,
                "must lie in [-90, 90] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg: normalize_longitude(longitude_deg),
        })
    }

    /// Cartesian position on a sphere of `radius`.
    pub fn to_cartesian(&self, radius: f64) -> Result<CartesianVector, PhysicsError> {
        to_cartesian(self.latitude_deg, self.longitude_deg, radius)
    }

    /// Returns true at either pole, where longitude carries no information.
    pub fn is_pole(&self) -> bool {
        self.latitude_deg.abs() == 90.0
    }
}

/// Convert latitude/longitude (degrees) to Cartesian coordinates:
/// `x = r cos(lat) cos(lon)`, `y = r cos(lat) sin(lon)`, `z = r sin(lat)`.
pub fn to_cartesian(latitude_deg: f64, longitude_deg: f64, radius: f64) -> Result<CartesianVector, PhysicsError> {
    require_positive("radius", radius)?;
    let coord = GeodeticCoordinate::new(latitude_deg, longitude_deg)?;
    Ok(surface_normal(&coord) * radius)
}

/// Convert a Cartesian point back to latitude/longitude on a sphere of `radius`.
///
/// `lat = asin(z / radius)`, `lon = atan2(y, x)`. The asin argument is
/// clamped to [-1, 1] so points a rounding error off the sphere still map.
pub fn to_geodetic(vector: CartesianVector, radius: f64) -> Result<GeodeticCoordinate, PhysicsError> {
    require_positive("radius", radius)?;
    if !vector.is_finite() {
        return Err(PhysicsError::invalid("vector", f64::NAN, "must be finite"));
    }

    let sin_lat = (vector.z / radius).clamp(-1.0, 1.0);
    let latitude_deg = sin_lat.asin() * RAD_TO_DEG;
    let longitude_deg = vector.y.atan2(vector.x) * RAD_TO_DEG;

    Ok(GeodeticCoordinate {
        latitude_deg,
        longitude_deg: normalize_longitude(longitude_deg),
    })
}

/// Outward unit normal at a surface point.
pub fn surface_normal(coord: &GeodeticCoordinate) -> DVec3 {
    let (sin_lat, cos_lat) = (coord.latitude_deg * DEG_TO_RAD).sin_cos();
    let (sin_lon, cos_lon) = (coord.longitude_deg * DEG_TO_RAD).sin_cos();
    DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Wrap a longitude into (-180°, 180°].
pub fn normalize_longitude(longitude_deg: f64) -> f64 {
    let wrapped = (longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}
