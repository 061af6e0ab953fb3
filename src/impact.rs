//! Impact energetics from asteroid physical parameters.
//!
//! Spherical-body mass, kinetic energy, TNT-equivalent yield and a
//! Collins/Melosh-style simple-crater scaling law. The scaling law is an
//! empirical fit and is applied uniformly regardless of target material or
//! atmosphere.

use std::f64::consts::PI;

use crate::error::{PhysicsError, require_finite, require_positive};
use crate::spectral::SpectralType;
use crate::types::{DEG_TO_RAD, GCM3_TO_KGM3, KM_TO_M, TNT_JOULES_PER_TON};

/// Crater scaling coefficient (km per ton^0.22)
pub const CRATER_SCALING_COEFFICIENT: f64 = 1.161;

/// Crater scaling exponent applied to the TNT yield
pub const CRATER_YIELD_EXPONENT: f64 = 0.22;

/// Physical description of an impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidProperties {
    /// Diameter in kilometers
    pub diameter_km: f64,
    /// Bulk density in g/cm³
    pub density_gcm3: f64,
    /// Closing velocity in km/s
    pub velocity_kms: f64,
    /// Impact angle from the local horizontal in degrees, [0, 90]
    pub impact_angle_deg: f64,
    /// Presentation-only classification
    pub spectral_type: Option<SpectralType>,
}

impl AsteroidProperties {
    pub fn new(
        diameter_km: f64,
        density_gcm3: f64,
        velocity_kms: f64,
        impact_angle_deg: f64,
    ) -> Result<Self, PhysicsError> {
        let properties = Self {
            diameter_km,
            density_gcm3,
            velocity_kms,
            impact_angle_deg,
            spectral_type: None,
        };
        properties.validate()?;
        Ok(properties)
    }

    pub fn with_spectral_type(mut self, spectral_type: SpectralType) -> Self {
        self.spectral_type = Some(spectral_type);
        self
    }

    /// Reject non-positive sizes, densities and velocities and angles
    /// outside [0°, 90°]. A zero angle is valid.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        require_positive("diameter_km", self.diameter_km)?;
        require_positive("density_gcm3", self.density_gcm3)?;
        require_positive("velocity_kms", self.velocity_kms)?;
        require_finite("impact_angle", self.impact_angle_deg)?;
        if !(0.0..=90.0).contains(&self.impact_angle_deg) {
            return Err(PhysicsError::invalid(
                "impact_angle",
                self.impact_angle_deg,
                "must lie in [0, 90] degrees from horizontal",
            ));
        }
        Ok(())
    }

    /// Radius in meters.
    pub fn radius_m(&self) -> f64 {
        self.diameter_km * KM_TO_M / 2.0
    }

    /// Closing velocity in m/s.
    pub fn velocity_ms(&self) -> f64 {
        self.velocity_kms * KM_TO_M
    }
}

/// Derived impact quantities. Immutable: recompute from new properties to
/// change them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactEnergetics {
    mass_kg: f64,
    kinetic_energy_j: f64,
    tnt_equivalent_tons: f64,
    crater_diameter_km: f64,
}

impl ImpactEnergetics {
    /// Compute energetics for validated properties.
    pub fn from_properties(properties: &AsteroidProperties) -> Result<Self, PhysicsError> {
        properties.validate()?;

        let mass_kg = spherical_mass_kg(properties.diameter_km, properties.density_gcm3);
        let kinetic_energy_j = 0.5 * mass_kg * properties.velocity_ms().powi(2);
        let tnt_equivalent_tons = kinetic_energy_j / TNT_JOULES_PER_TON;
        let crater_diameter_km = crater_diameter_km(tnt_equivalent_tons, properties.impact_angle_deg);

        Ok(Self {
            mass_kg,
            kinetic_energy_j,
            tnt_equivalent_tons,
            crater_diameter_km,
        })
    }

    /// Convenience entry point taking raw parameters.
    ///
    /// # Arguments
    /// * `diameter_km` - Impactor diameter (km)
    /// * `density_gcm3` - Bulk density (g/cm³)
    /// * `velocity_kms` - Closing velocity (km/s)
    /// * `impact_angle_deg` - Angle from horizontal (degrees)
    pub fn compute(
        diameter_km: f64,
        density_gcm3: f64,
        velocity_kms: f64,
        impact_angle_deg: f64,
    ) -> Result<Self, PhysicsError> {
        let properties = AsteroidProperties::new(diameter_km, density_gcm3, velocity_kms, impact_angle_deg)?;
        Self::from_properties(&properties)
    }

    /// Impactor mass (kg)
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Kinetic energy at impact (J)
    pub fn kinetic_energy_j(&self) -> f64 {
        self.kinetic_energy_j
    }

    /// TNT-equivalent yield (metric tons)
    pub fn tnt_equivalent_tons(&self) -> f64 {
        self.tnt_equivalent_tons
    }

    /// TNT-equivalent yield (megatons)
    pub fn tnt_equivalent_megatons(&self) -> f64 {
        self.tnt_equivalent_tons / 1e6
    }

    /// Final crater diameter (km)
    pub fn crater_diameter_km(&self) -> f64 {
        self.crater_diameter_km
    }

    /// Final crater radius (km)
    pub fn crater_radius_km(&self) -> f64 {
        self.crater_diameter_km / 2.0
    }
}

/// Mass of a homogeneous sphere: `ρ * (4/3) π (d/2)³`, in kg.
pub fn spherical_mass_kg(diameter_km: f64, density_gcm3: f64) -> f64 {
    let radius_m = diameter_km * KM_TO_M / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    volume_m3 * density_gcm3 * GCM3_TO_KGM3
}

/// Crater diameter (km): `1.161 * W^0.22 * sin(θ)^(1/3)`, W in tons TNT.
///
/// A grazing impact (θ = 0) gives a zero-diameter crater.
pub fn crater_diameter_km(tnt_equivalent_tons: f64, impact_angle_deg: f64) -> f64 {
    let angle_term = (impact_angle_deg * DEG_TO_RAD).sin().max(0.0).cbrt();
    CRATER_SCALING_COEFFICIENT * tnt_equivalent_tons.powf(CRATER_YIELD_EXPONENT) * angle_term
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use proptest::prelude::*;

    fn rel_err(got: f64, expected: f64) -> f64 {
        ((got - expected) / expected).abs()
    }

    #[test]
    fn test_apophis_energetics() {
        let energetics = ImpactEnergetics::from_properties(&fixtures::apophis_impactor()).unwrap();

        assert!(rel_err(energetics.mass_kg(), 8.487e10) < 5e-3, "mass {}", energetics.mass_kg());
        assert!(rel_err(energetics.kinetic_energy_j(), 6.737e18) < 5e-3);
        assert!(rel_err(energetics.tnt_equivalent_tons(), 1.610e9) < 5e-3);
        assert!(rel_err(energetics.crater_diameter_km(), 109.69) < 5e-3);
        assert!((energetics.crater_radius_km() * 2.0 - energetics.crater_diameter_km()).abs() < 1e-12);
    }

    #[test]
    fn test_energy_chain_is_consistent() {
        let properties = fixtures::test_impactor();
        assert_eq!(properties.radius_m(), 100.0);
        let energetics = ImpactEnergetics::from_properties(&properties).unwrap();
        let expected_ke = 0.5 * energetics.mass_kg() * 20_000.0_f64.powi(2);
        assert!(rel_err(energetics.kinetic_energy_j(), expected_ke) < 1e-12);
        assert!(
            rel_err(energetics.tnt_equivalent_tons() * TNT_JOULES_PER_TON, energetics.kinetic_energy_j())
                < 1e-12
        );
        assert!(rel_err(energetics.tnt_equivalent_megatons(), 600.687) < 1e-3);
    }

    #[test]
    fn test_zero_angle_collapses_crater() {
        let energetics = ImpactEnergetics::compute(0.370, 3.2, 12.6, 0.0).unwrap();
        assert_eq!(energetics.crater_diameter_km(), 0.0);
        // Energy is unaffected by the angle
        assert!(energetics.kinetic_energy_j() > 0.0);
    }

    #[test]
    fn test_vertical_impact_has_full_angle_term() {
        let tnt: f64 = 1.0e6;
        let expected = CRATER_SCALING_COEFFICIENT * tnt.powf(CRATER_YIELD_EXPONENT);
        assert!((crater_diameter_km(tnt, 90.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            ((0.0, 3.2, 12.6, 45.0), "diameter_km"),
            ((-0.1, 3.2, 12.6, 45.0), "diameter_km"),
            ((0.37, 0.0, 12.6, 45.0), "density_gcm3"),
            ((0.37, 3.2, -1.0, 45.0), "velocity_kms"),
            ((0.37, 3.2, 12.6, -5.0), "impact_angle"),
            ((0.37, 3.2, 12.6, 95.0), "impact_angle"),
            ((0.37, 3.2, 12.6, f64::NAN), "impact_angle"),
        ];
        for ((d, rho, v, angle), name) in cases {
            let err = ImpactEnergetics::compute(d, rho, v, angle).unwrap_err();
            assert_eq!(err.parameter(), name);
        }
    }

    #[test]
    fn test_spectral_type_does_not_affect_physics() {
        let plain = AsteroidProperties::new(0.5, 2.6, 20.0, 45.0).unwrap();
        let metallic = plain.with_spectral_type(SpectralType::M);
        assert_eq!(
            ImpactEnergetics::from_properties(&plain).unwrap(),
            ImpactEnergetics::from_properties(&metallic).unwrap()
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Larger yields always dig larger craters at a fixed angle.
        #[test]
        fn prop_crater_monotonic_in_yield(
            log_tnt in 0.0f64..12.0,
            factor in 1.001f64..100.0,
            angle in 1.0f64..=90.0,
        ) {
            let small = 10f64.powf(log_tnt);
            let large = small * factor;
            prop_assert!(crater_diameter_km(large, angle) > crater_diameter_km(small, angle));
        }

        /// Mass scales with the cube of the diameter.
        #[test]
        fn prop_mass_cubic_in_diameter(
            diameter in 0.01f64..10.0,
            density in 0.5f64..8.0,
        ) {
            let ratio = spherical_mass_kg(2.0 * diameter, density) / spherical_mass_kg(diameter, density);
            prop_assert!((ratio - 8.0).abs() < 1e-9);
        }
    }
}
