//! Generator tunables. Every field has a serde default so partial config files load.

use crate::orbits::{belt_body_count, MAX_BELT_BODIES};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use starmap_core::{GenerationError, GenerationResult};

/// Tunables for catalog placement and per-system orbit layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Catalog size target, home star included. Skipped slots make the real count smaller.
    #[serde(default = "default_num_stars")]
    pub num_stars: usize,
    /// Outer bound of the radial distribution around the origin.
    #[serde(default = "default_sphere_radius")]
    pub sphere_radius: f64,
    /// Minimum distance between any two systems; also the inner radial bound.
    #[serde(default = "default_min_separation")]
    pub min_separation: f64,
    /// Exponent `p` of the `r^-p` radial density. Larger values pull systems toward the center.
    #[serde(default = "default_power_law_exponent")]
    pub power_law_exponent: f64,
    /// Home star position.
    #[serde(default = "default_origin")]
    pub origin: DVec3,
    /// Candidate draws per slot before the slot is skipped.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Innermost orbit radius of a system layout.
    #[serde(default = "default_min_orbit")]
    pub min_orbit: f64,
    /// Outermost orbit radius of a system layout.
    #[serde(default = "default_max_orbit")]
    pub max_orbit: f64,
    /// Planet count is drawn uniformly from `min_planets..=max_planets`.
    #[serde(default = "default_min_planets")]
    pub min_planets: usize,
    #[serde(default = "default_max_planets")]
    pub max_planets: usize,
    /// Orbit jitter as a fraction of the nominal spacing.
    #[serde(default = "default_orbit_jitter")]
    pub orbit_jitter: f64,
    /// Chance that a slot becomes a belt while the belt cap is not reached.
    #[serde(default = "default_belt_probability")]
    pub belt_probability: f64,
    #[serde(default = "default_belt_angle_jitter")]
    pub belt_angle_jitter_deg: f64,
    #[serde(default = "default_belt_radius_jitter")]
    pub belt_radius_jitter: f64,
}

fn default_num_stars() -> usize {
    50
}
fn default_sphere_radius() -> f64 {
    995.0
}
fn default_min_separation() -> f64 {
    220.0
}
fn default_power_law_exponent() -> f64 {
    2.0
}
fn default_origin() -> DVec3 {
    DVec3::splat(2000.0)
}
fn default_max_attempts() -> usize {
    1000
}
fn default_min_orbit() -> f64 {
    100.0
}
fn default_max_orbit() -> f64 {
    950.0
}
fn default_min_planets() -> usize {
    3
}
fn default_max_planets() -> usize {
    9
}
fn default_orbit_jitter() -> f64 {
    0.3
}
fn default_belt_probability() -> f64 {
    0.3
}
fn default_belt_angle_jitter() -> f64 {
    5.0
}
fn default_belt_radius_jitter() -> f64 {
    5.0
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_stars: default_num_stars(),
            sphere_radius: default_sphere_radius(),
            min_separation: default_min_separation(),
            power_law_exponent: default_power_law_exponent(),
            origin: default_origin(),
            max_attempts: default_max_attempts(),
            min_orbit: default_min_orbit(),
            max_orbit: default_max_orbit(),
            min_planets: default_min_planets(),
            max_planets: default_max_planets(),
            orbit_jitter: default_orbit_jitter(),
            belt_probability: default_belt_probability(),
            belt_angle_jitter_deg: default_belt_angle_jitter(),
            belt_radius_jitter: default_belt_radius_jitter(),
        }
    }
}

impl GeneratorConfig {
    /// Check every tunable. Called before any sampling starts.
    pub fn validate(&self) -> GenerationResult<()> {
        self.validate_placement()?;
        self.validate_orbits()
    }

    pub(crate) fn validate_placement(&self) -> GenerationResult<()> {
        if self.num_stars == 0 {
            return Err(GenerationError::invalid("num_stars", "must be at least 1"));
        }
        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(GenerationError::invalid(
                "min_separation",
                format!("must be positive, got {}", self.min_separation),
            ));
        }
        if !self.sphere_radius.is_finite() || self.sphere_radius < self.min_separation {
            return Err(GenerationError::invalid(
                "sphere_radius",
                format!(
                    "must be at least min_separation ({}), got {}",
                    self.min_separation, self.sphere_radius
                ),
            ));
        }
        if !self.power_law_exponent.is_finite() {
            return Err(GenerationError::invalid("power_law_exponent", "must be finite"));
        }
        if !self.origin.is_finite() {
            return Err(GenerationError::invalid("origin", "must be finite"));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::invalid("max_attempts", "must be at least 1"));
        }
        Ok(())
    }

    pub(crate) fn validate_orbits(&self) -> GenerationResult<()> {
        validate_orbit_bounds(self.min_orbit, self.max_orbit)?;
        if self.min_planets == 0 {
            return Err(GenerationError::invalid("min_planets", "must be at least 1"));
        }
        if self.max_planets < self.min_planets {
            return Err(GenerationError::invalid(
                "max_planets",
                format!("must be at least min_planets ({})", self.min_planets),
            ));
        }
        if !(0.0..=1.0).contains(&self.orbit_jitter) {
            return Err(GenerationError::invalid("orbit_jitter", "must lie in 0..=1"));
        }
        if !(0.0..=1.0).contains(&self.belt_probability) {
            return Err(GenerationError::invalid("belt_probability", "must lie in 0..=1"));
        }
        if !(self.belt_angle_jitter_deg.is_finite() && self.belt_angle_jitter_deg >= 0.0) {
            return Err(GenerationError::invalid("belt_angle_jitter_deg", "must be non-negative"));
        }
        if !(self.belt_radius_jitter.is_finite() && self.belt_radius_jitter >= 0.0) {
            return Err(GenerationError::invalid("belt_radius_jitter", "must be non-negative"));
        }
        Ok(())
    }
}

pub(crate) fn validate_orbit_bounds(min_orbit: f64, max_orbit: f64) -> GenerationResult<()> {
    if !(min_orbit.is_finite() && min_orbit >= 0.0) {
        return Err(GenerationError::invalid(
            "min_orbit",
            format!("must be non-negative, got {}", min_orbit),
        ));
    }
    if !max_orbit.is_finite() || min_orbit > max_orbit {
        return Err(GenerationError::invalid(
            "max_orbit",
            format!("must be at least min_orbit ({}), got {}", min_orbit, max_orbit),
        ));
    }
    // Belts are clamped inside the bounds, so the outer bound sizes the largest one.
    if belt_body_count(max_orbit).is_err() {
        return Err(GenerationError::invalid(
            "max_orbit",
            format!("{} would need more than {} belt asteroids", max_orbit, MAX_BELT_BODIES),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_stars_rejected() {
        let config = GeneratorConfig {
            num_stars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidParameter { name: "num_stars", .. })
        ));
    }

    #[test]
    fn inverted_orbit_bounds_rejected() {
        let config = GeneratorConfig {
            min_orbit: 900.0,
            max_orbit: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidParameter { name: "max_orbit", .. })
        ));
    }

    #[test]
    fn oversized_orbit_bound_rejected() {
        let config = GeneratorConfig {
            min_orbit: 0.0,
            max_orbit: 1.0e30,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidParameter { name: "max_orbit", .. })
        ));
    }

    #[test]
    fn sphere_smaller_than_separation_rejected() {
        let config = GeneratorConfig {
            sphere_radius: 100.0,
            min_separation: 220.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
