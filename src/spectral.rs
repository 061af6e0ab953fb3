//! Asteroid spectral classes and their presentation lookup.
//!
//! Spectral type only selects how a body looks. Nothing in the physics
//! kernel reads it.

use bevy::color::Color;

/// Broad asteroid taxonomic class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpectralType {
    /// Carbonaceous
    C,
    /// Stony (silicaceous)
    #[default]
    S,
    /// Metallic
    M,
    /// Unclassified / degenerate
    X,
    /// Very dark, bluish
    B,
}

/// Presentation attributes for one spectral class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectralAppearance {
    pub base_color: Color,
    pub metallic: bool,
}

impl SpectralType {
    pub const ALL: [SpectralType; 5] = [
        SpectralType::C,
        SpectralType::S,
        SpectralType::M,
        SpectralType::X,
        SpectralType::B,
    ];

    /// Parse from a taxonomy string using its leading letter (`"Sq"` → `S`).
    ///
    /// Unknown or empty strings fall back to `S`.
    pub fn from_designation(designation: &str) -> Self {
        match designation.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => SpectralType::C,
            Some('M') => SpectralType::M,
            Some('X') => SpectralType::X,
            Some('B') => SpectralType::B,
            _ => SpectralType::S,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            SpectralType::C => 'C',
            SpectralType::S => 'S',
            SpectralType::M => 'M',
            SpectralType::X => 'X',
            SpectralType::B => 'B',
        }
    }

    /// Lookup table for surface appearance (linear RGBA).
    pub fn appearance(&self) -> SpectralAppearance {
        let (r, g, b) = match self {
            SpectralType::C => (0.15, 0.15, 0.2),
            SpectralType::S => (0.4, 0.35, 0.25),
            SpectralType::M => (0.5, 0.45, 0.4),
            SpectralType::X => (0.3, 0.3, 0.3),
            SpectralType::B => (0.1, 0.1, 0.15),
        };
        SpectralAppearance {
            base_color: Color::linear_rgba(r, g, b, 1.0),
            metallic: *self == SpectralType::M,
        }
    }
}
