//! Planetary layout of a single system: orbit radii, planets and asteroid belts.
//!
//! Orbits sit at even spacing between the bounds with a bounded jitter and are clamped back
//! inside. Each slot is greedily turned into a belt with a fixed chance until the belt cap for
//! the system size is reached, so inner slots are likelier belts than outer ones.

use crate::config::{validate_orbit_bounds, GeneratorConfig};
use rand::Rng;
use starmap_core::{BeltBody, GenerationError, GenerationResult, OrbitKind, OrbitSlot, PLANET_PRESETS};

/// Systems with fewer planets than this get a single belt at most.
pub const LARGE_SYSTEM_PLANETS: usize = 5;

/// Most belts a layout of `planet_count` slots may hold.
pub fn max_belts(planet_count: usize) -> usize {
    if planet_count < LARGE_SYSTEM_PLANETS {
        1
    } else {
        2
    }
}

/// Largest belt a layout may produce. Reached at an orbit radius of about 2.5 million units.
pub const MAX_BELT_BODIES: usize = 100_000;

/// Number of asteroids in a belt at `radius`: `round(10 + 4 * radius / 100)`.
pub fn belt_body_count(radius: f64) -> GenerationResult<usize> {
    let count = (10.0 + 4.0 * radius / 100.0).round();
    if !count.is_finite() || count < 1.0 {
        return Err(GenerationError::invalid(
            "belt radius",
            format!("radius {} yields no asteroids", radius),
        ));
    }
    if count > MAX_BELT_BODIES as f64 {
        return Err(GenerationError::invalid(
            "belt radius",
            format!("radius {} yields more than {} asteroids", radius, MAX_BELT_BODIES),
        ));
    }
    Ok(count as usize)
}

/// Spread `count` asteroids evenly around the ring with independent angle and radius jitter.
pub fn scatter_belt<R: Rng + ?Sized>(
    radius: f64,
    count: usize,
    angle_jitter_deg: f64,
    radius_jitter: f64,
    rng: &mut R,
) -> Vec<BeltBody> {
    let step = 360.0 / count as f64;
    (0..count)
        .map(|i| {
            let body_radius = radius + rng.gen_range(-radius_jitter..=radius_jitter);
            let angle_deg = step * i as f64 + rng.gen_range(-angle_jitter_deg..=angle_jitter_deg);
            BeltBody {
                angle_deg,
                radius: body_radius,
            }
        })
        .collect()
}

/// Orbit and belt layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitLayout {
    pub min_orbit: f64,
    pub max_orbit: f64,
    pub min_planets: usize,
    pub max_planets: usize,
    pub jitter: f64,
    pub belt_probability: f64,
    pub belt_angle_jitter_deg: f64,
    pub belt_radius_jitter: f64,
}

impl OrbitLayout {
    pub fn new(config: &GeneratorConfig) -> GenerationResult<Self> {
        config.validate_orbits()?;
        Ok(Self {
            min_orbit: config.min_orbit,
            max_orbit: config.max_orbit,
            min_planets: config.min_planets,
            max_planets: config.max_planets,
            jitter: config.orbit_jitter,
            belt_probability: config.belt_probability,
            belt_angle_jitter_deg: config.belt_angle_jitter_deg,
            belt_radius_jitter: config.belt_radius_jitter,
        })
    }

    /// Same engine with different orbit bounds.
    pub fn with_bounds(&self, min_orbit: f64, max_orbit: f64) -> GenerationResult<Self> {
        validate_orbit_bounds(min_orbit, max_orbit)?;
        Ok(Self {
            min_orbit,
            max_orbit,
            ..self.clone()
        })
    }

    /// Draw a planet count and lay out that many slots.
    pub fn layout<R: Rng + ?Sized>(&self, rng: &mut R) -> GenerationResult<Vec<OrbitSlot>> {
        let planet_count = rng.gen_range(self.min_planets..=self.max_planets);
        self.layout_with_count(planet_count, rng)
    }

    /// Lay out exactly `planet_count` slots, innermost first.
    pub fn layout_with_count<R: Rng + ?Sized>(
        &self,
        planet_count: usize,
        rng: &mut R,
    ) -> GenerationResult<Vec<OrbitSlot>> {
        if planet_count == 0 {
            return Err(GenerationError::invalid("planet_count", "must be at least 1"));
        }

        let spacing = (self.max_orbit - self.min_orbit) / (planet_count as f64 + 1.0);
        let jitter = spacing * self.jitter;
        let belt_cap = max_belts(planet_count);
        let mut belts = 0;

        let mut slots = Vec::with_capacity(planet_count);
        for slot in 0..planet_count {
            let base = self.min_orbit + (slot as f64 + 1.0) * spacing;
            let radius = (base + rng.gen_range(-jitter..=jitter)).clamp(self.min_orbit, self.max_orbit);

            let kind = if belts < belt_cap && rng.gen_bool(self.belt_probability) {
                belts += 1;
                let count = belt_body_count(radius)?;
                OrbitKind::AsteroidBelt {
                    bodies: scatter_belt(
                        radius,
                        count,
                        self.belt_angle_jitter_deg,
                        self.belt_radius_jitter,
                        rng,
                    ),
                }
            } else {
                OrbitKind::Planet {
                    preset: slot % PLANET_PRESETS.len(),
                    phase_deg: rng.gen_range(0.0..360.0),
                }
            };
            slots.push(OrbitSlot { radius, kind });
        }

        log::debug!(
            "Laid out {} orbits between {} and {} ({} belts)",
            planet_count,
            self.min_orbit,
            self.max_orbit,
            belts
        );
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> OrbitLayout {
        OrbitLayout::new(&GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn belt_counts_follow_radius() {
        assert_eq!(belt_body_count(0.0).unwrap(), 10);
        assert_eq!(belt_body_count(100.0).unwrap(), 14);
        assert_eq!(belt_body_count(950.0).unwrap(), 48);
        assert_eq!(belt_body_count(512.0).unwrap(), 30);
    }

    #[test]
    fn oversized_belt_rejected() {
        assert!(belt_body_count(1.0e30).is_err());
        assert!(belt_body_count(f64::MAX).is_err());
        assert_eq!(belt_body_count(2_499_750.0).unwrap(), MAX_BELT_BODIES);
    }

    /// Outer bound far beyond the belt limit is an error, whether set through bounds or directly.
    #[test]
    fn huge_outer_bound_rejected() {
        let config = GeneratorConfig {
            belt_probability: 1.0,
            ..Default::default()
        };
        let engine = OrbitLayout::new(&config).unwrap();
        assert!(matches!(
            engine.with_bounds(0.0, 1.0e30),
            Err(GenerationError::InvalidParameter { .. })
        ));
        let oversized = OrbitLayout {
            max_orbit: 1.0e30,
            ..engine
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(oversized.layout_with_count(3, &mut rng).is_err());
    }

    #[test]
    fn belt_cap_by_system_size() {
        assert_eq!(max_belts(1), 1);
        assert_eq!(max_belts(4), 1);
        assert_eq!(max_belts(5), 2);
        assert_eq!(max_belts(9), 2);
    }

    #[test]
    fn radii_within_bounds_for_every_count() {
        let engine = engine();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for count in 1..=12 {
                let slots = engine.layout_with_count(count, &mut rng).unwrap();
                assert_eq!(slots.len(), count);
                for slot in &slots {
                    assert!(
                        slot.radius >= engine.min_orbit && slot.radius <= engine.max_orbit,
                        "radius {} outside bounds",
                        slot.radius
                    );
                }
            }
        }
    }

    /// Each orbit lands within the jitter band around its nominal radius, clamped to the bounds.
    #[test]
    fn jittered_orbits_near_nominal_radius() {
        let engine = engine();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for count in 1..=12 {
                let slots = engine.layout_with_count(count, &mut rng).unwrap();
                let spacing = (engine.max_orbit - engine.min_orbit) / (count as f64 + 1.0);
                let band = spacing * engine.jitter;
                for (i, slot) in slots.iter().enumerate() {
                    let nominal = engine.min_orbit + (i as f64 + 1.0) * spacing;
                    let low = (nominal - band).max(engine.min_orbit) - 1e-9;
                    let high = (nominal + band).min(engine.max_orbit) + 1e-9;
                    assert!(
                        (low..=high).contains(&slot.radius),
                        "seed {} count {} slot {}: radius {} outside {}..={}",
                        seed,
                        count,
                        i,
                        slot.radius,
                        low,
                        high
                    );
                }
            }
        }
    }

    /// Full jitter with collapsed bounds still clamps every orbit onto the single radius.
    #[test]
    fn full_jitter_clamped() {
        let config = GeneratorConfig {
            orbit_jitter: 1.0,
            ..Default::default()
        };
        let engine = OrbitLayout::new(&config).unwrap().with_bounds(400.0, 400.0).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let slots = engine.layout_with_count(6, &mut rng).unwrap();
        assert!(slots.iter().all(|s| s.radius == 400.0));
    }

    #[test]
    fn belt_cap_never_exceeded() {
        let engine = engine();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            for count in 1..=10 {
                let slots = engine.layout_with_count(count, &mut rng).unwrap();
                let belts = slots.iter().filter(|s| s.is_belt()).count();
                assert!(belts <= max_belts(count), "{} belts for {} planets", belts, count);
            }
        }
    }

    #[test]
    fn unjittered_orbits_evenly_spaced() {
        let config = GeneratorConfig {
            orbit_jitter: 0.0,
            belt_probability: 0.0,
            ..Default::default()
        };
        let engine = OrbitLayout::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let slots = engine.layout_with_count(4, &mut rng).unwrap();
        let radii: Vec<f64> = slots.iter().map(|s| s.radius).collect();
        assert_eq!(radii, vec![270.0, 440.0, 610.0, 780.0]);
    }

    #[test]
    fn planet_presets_round_robin() {
        let config = GeneratorConfig {
            belt_probability: 0.0,
            ..Default::default()
        };
        let engine = OrbitLayout::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let slots = engine.layout_with_count(7, &mut rng).unwrap();
        for (i, slot) in slots.iter().enumerate() {
            match slot.kind {
                OrbitKind::Planet { preset, phase_deg } => {
                    assert_eq!(preset, i % 3);
                    assert!((0.0..360.0).contains(&phase_deg));
                }
                OrbitKind::AsteroidBelt { .. } => panic!("belt with zero probability"),
            }
        }
        assert_eq!(slots[0].preset().map(|p| p.name), Some("gas giant"));
    }

    #[test]
    fn certain_belts_fill_earliest_slots() {
        let config = GeneratorConfig {
            belt_probability: 1.0,
            ..Default::default()
        };
        let engine = OrbitLayout::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let slots = engine.layout_with_count(6, &mut rng).unwrap();
        let kinds: Vec<bool> = slots.iter().map(|s| s.is_belt()).collect();
        assert_eq!(kinds, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn belt_bodies_near_their_nominal_place() {
        let mut rng = StdRng::seed_from_u64(21);
        let bodies = scatter_belt(500.0, 30, 5.0, 5.0, &mut rng);
        assert_eq!(bodies.len(), 30);
        for (i, body) in bodies.iter().enumerate() {
            let nominal = 12.0 * i as f64;
            assert!((body.angle_deg - nominal).abs() <= 5.0);
            assert!((body.radius - 500.0).abs() <= 5.0);
        }
    }

    #[test]
    fn belt_slot_body_count_matches_radius() {
        let config = GeneratorConfig {
            belt_probability: 1.0,
            ..Default::default()
        };
        let engine = OrbitLayout::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(30);
        let slots = engine.layout_with_count(3, &mut rng).unwrap();
        let belt = &slots[0];
        assert_eq!(belt.body_count(), Some(belt_body_count(belt.radius).unwrap()));
    }

    #[test]
    fn drawn_planet_count_in_range() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..500 {
            let n = engine.layout(&mut rng).unwrap().len();
            assert!((3..=9).contains(&n));
        }
    }

    #[test]
    fn zero_planets_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(engine().layout_with_count(0, &mut rng).is_err());
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(engine().with_bounds(800.0, 200.0).is_err());
        assert!(engine().with_bounds(-10.0, 200.0).is_err());
    }
}
