//! Stellar classification records as they appear in the frequency table.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spectral designation: class letter, numeric subclass and luminosity class (e.g. G2 V).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectralClass {
    pub class: String,
    pub subclass: u8,
    pub luminosity_class: String,
}

impl SpectralClass {
    pub fn new(class: impl Into<String>, subclass: u8, luminosity_class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            subclass,
            luminosity_class: luminosity_class.into(),
        }
    }
}

impl fmt::Display for SpectralClass {
    /// Compact catalog form, `G2(V)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}({})", self.class, self.subclass, self.luminosity_class)
    }
}

/// Physical attributes of a classification. Generation never reads these.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicalAttributes {
    /// Mass in solar units.
    pub mass: f32,
    /// Radius in solar units.
    pub radius: f32,
    /// Effective temperature in kelvin.
    pub temperature: f32,
    /// Luminosity in solar units.
    pub luminosity: f32,
}

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub spectral: SpectralClass,
    pub physical: PhysicalAttributes,
    /// Display color, RGB in 0..1.
    pub color: Vec3,
    /// Descriptive color name from the table, if it has one.
    #[serde(default)]
    pub color_name: Option<String>,
    /// Relative occurrence in percent.
    pub frequency: f64,
}

impl ClassificationRecord {
    pub fn new(spectral: SpectralClass, color: Vec3, frequency: f64) -> Self {
        Self {
            spectral,
            physical: PhysicalAttributes::default(),
            color,
            color_name: None,
            frequency,
        }
    }

    pub fn with_physical(mut self, physical: PhysicalAttributes) -> Self {
        self.physical = physical;
        self
    }

    pub fn with_color_name(mut self, name: impl Into<String>) -> Self {
        self.color_name = Some(name.into());
        self
    }

    /// The fixed classification of the home star. Never drawn from a table.
    pub fn sol() -> Self {
        Self::new(SpectralClass::new("G", 2, "V"), Vec3::new(1.0, 0.92, 0.016), 0.0)
            .with_physical(PhysicalAttributes {
                mass: 1.0,
                radius: 1.0,
                temperature: 5778.0,
                luminosity: 1.0,
            })
            .with_color_name("yellow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectral_class_catalog_form() {
        let s = SpectralClass::new("M", 4, "V");
        assert_eq!(s.to_string(), "M4(V)");
    }

    #[test]
    fn sol_is_g2_main_sequence() {
        let sol = ClassificationRecord::sol();
        assert_eq!(sol.spectral.class, "G");
        assert_eq!(sol.spectral.subclass, 2);
        assert_eq!(sol.spectral.luminosity_class, "V");
        assert_eq!(sol.physical.mass, 1.0);
    }
}
