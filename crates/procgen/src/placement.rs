//! Spatial placement of star systems around the home star.
//!
//! Radii follow a power-law density `r^-p` between the minimum separation and the sphere radius,
//! sampled by inverse transform. Directions are uniform over the unit sphere. A candidate is kept
//! only if it clears every accepted position by the minimum separation; a slot whose attempt
//! budget runs out is skipped, so a run can return fewer systems than requested.

use crate::config::GeneratorConfig;
use crate::sampler::ClassificationSampler;
use glam::DVec3;
use rand::Rng;
use starmap_core::{GenerationResult, StarSystem};

/// Exponents this close to 1 use the logarithmic transform.
const LOG_TRANSFORM_BAND: f64 = 1e-9;

/// Inverse-CDF sampler for a density proportional to `r^-exponent` on `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialDistribution {
    pub min: f64,
    pub max: f64,
    pub exponent: f64,
}

impl RadialDistribution {
    pub fn new(min: f64, max: f64, exponent: f64) -> Self {
        Self { min, max, exponent }
    }

    /// Map `u` in `[0, 1)` to a radius in `[min, max]`.
    pub fn radius_at(&self, u: f64) -> f64 {
        let one_minus_p = 1.0 - self.exponent;
        if one_minus_p.abs() < LOG_TRANSFORM_BAND {
            // p = 1: density 1/r integrates to a logarithm.
            return (self.min * (self.max / self.min).powf(u)).clamp(self.min, self.max);
        }
        let outer = self.max.powf(one_minus_p);
        let inner = self.min.powf(one_minus_p);
        // Rounding in the power terms can step just past either bound.
        (outer - (outer - inner) * u)
            .powf(1.0 / one_minus_p)
            .clamp(self.min, self.max)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.radius_at(rng.gen::<f64>())
    }
}

/// Uniformly distributed direction on the unit sphere.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let ring = (1.0 - z * z).max(0.0).sqrt();
    DVec3::new(ring * theta.cos(), ring * theta.sin(), z)
}

/// Outcome counters of one placement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementReport {
    /// Systems asked for, home star included.
    pub requested: usize,
    /// Systems in the catalog, home star included.
    pub accepted: usize,
    /// Slots abandoned after exhausting the attempt budget.
    pub skipped: usize,
    /// Candidates drawn over the whole run.
    pub attempts: usize,
}

impl PlacementReport {
    pub fn is_short(&self) -> bool {
        self.accepted < self.requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Idle,
    Placing,
}

/// Places systems by rejection sampling. Owns the working set of accepted positions.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    origin: DVec3,
    min_separation: f64,
    radial: RadialDistribution,
    max_attempts: usize,
    state: PlacementState,
    accepted: Vec<DVec3>,
}

impl PlacementEngine {
    pub fn new(config: &GeneratorConfig) -> GenerationResult<Self> {
        config.validate_placement()?;
        Ok(Self {
            origin: config.origin,
            min_separation: config.min_separation,
            radial: RadialDistribution::new(
                config.min_separation,
                config.sphere_radius,
                config.power_law_exponent,
            ),
            max_attempts: config.max_attempts,
            state: PlacementState::Idle,
            accepted: Vec::new(),
        })
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn radial(&self) -> &RadialDistribution {
        &self.radial
    }

    /// Place the home star plus up to `count - 1` further systems, drawing a classification for
    /// each accepted one. Indices are dense (the n-th accepted system gets index n) while names
    /// carry the slot number, so a skipped slot shows up as a gap in the names.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        sampler: &ClassificationSampler,
        rng: &mut R,
    ) -> (Vec<StarSystem>, PlacementReport) {
        self.state = PlacementState::Placing;
        self.accepted.clear();

        let mut systems = Vec::with_capacity(count.max(1));
        let mut report = PlacementReport {
            requested: count.max(1),
            ..Default::default()
        };

        systems.push(StarSystem::home(self.origin));
        self.accepted.push(self.origin);

        for slot in 1..count {
            let (position, attempts) = self.find_position(rng);
            report.attempts += attempts;
            let Some(position) = position else {
                log::debug!("Slot {} skipped after {} attempts", slot, attempts);
                report.skipped += 1;
                continue;
            };

            self.accepted.push(position);
            let record = sampler.draw(rng);
            systems.push(StarSystem::from_record(systems.len(), slot, position, record));
        }

        report.accepted = systems.len();
        self.accepted.clear();
        self.state = PlacementState::Idle;

        if report.is_short() {
            log::info!(
                "Placed {}/{} systems ({} slots skipped)",
                report.accepted,
                report.requested,
                report.skipped
            );
        } else {
            log::info!("Placed {} systems", report.accepted);
        }
        (systems, report)
    }

    /// Draw candidates until one clears every accepted position or the budget runs out.
    fn find_position<R: Rng + ?Sized>(&self, rng: &mut R) -> (Option<DVec3>, usize) {
        for attempt in 1..=self.max_attempts {
            let r = self.radial.sample(rng);
            let candidate = self.origin + random_unit_vector(rng) * r;
            if self.is_clear(candidate) {
                return (Some(candidate), attempt);
            }
        }
        (None, self.max_attempts)
    }

    fn is_clear(&self, candidate: DVec3) -> bool {
        self.accepted
            .iter()
            .all(|existing| existing.distance(candidate) >= self.min_separation)
    }
}
