//! The star catalog: generated systems plus the layout of whichever system is open.
//!
//! The catalog adds no randomness of its own. Every run takes the caller's random source and
//! hands it to the placement and orbit engines. A run builds its systems in a fresh buffer and
//! only replaces the previous catalog once it has completed.

use crate::config::GeneratorConfig;
use crate::frequency_table::FrequencyTable;
use crate::orbits::OrbitLayout;
use crate::placement::{PlacementEngine, PlacementReport};
use crate::sampler::ClassificationSampler;
use glam::DVec3;
use rand::Rng;
use starmap_core::{GenerationError, GenerationResult, StarSystem, SystemLayout};

#[derive(Debug, Clone)]
pub struct Catalog {
    config: GeneratorConfig,
    sampler: ClassificationSampler,
    placement: PlacementEngine,
    orbits: OrbitLayout,
    systems: Vec<StarSystem>,
    report: Option<PlacementReport>,
    /// Count used by the last `generate`, reused by `regenerate`.
    requested: usize,
    /// Layout of the currently open (highlighted) system.
    open: Option<SystemLayout>,
}

impl Catalog {
    /// Validate the configuration and build the sampler. Nothing is generated yet.
    pub fn new(config: GeneratorConfig, table: &FrequencyTable) -> GenerationResult<Self> {
        config.validate()?;
        let sampler = ClassificationSampler::new(table);
        let placement = PlacementEngine::new(&config)?;
        let orbits = OrbitLayout::new(&config)?;
        Ok(Self {
            requested: config.num_stars,
            config,
            sampler,
            placement,
            orbits,
            systems: Vec::new(),
            report: None,
            open: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sampler(&self) -> &ClassificationSampler {
        &self.sampler
    }

    /// Discard the current catalog and place `count` systems (home star included).
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> GenerationResult<&[StarSystem]> {
        if count == 0 {
            return Err(GenerationError::invalid("count", "must be at least 1"));
        }

        let (systems, report) = self.placement.place(count, &self.sampler, rng);
        let open_index = self.open.as_ref().map(|layout| layout.system_index);
        let open = match open_index {
            Some(index) if index < systems.len() => {
                Some(self.build_layout(&systems[index], &self.orbits, rng)?)
            }
            _ => None,
        };

        self.requested = count;
        self.systems = systems;
        self.report = Some(report);
        self.open = open;
        Ok(&self.systems)
    }

    /// Rerun placement with the last requested count (the configured `num_stars` at first).
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GenerationResult<&[StarSystem]> {
        log::info!("Regenerating catalog of {} systems", self.requested);
        self.generate(self.requested, rng)
    }

    /// Systems of the last run, home star first. Empty before the first run.
    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn get(&self, index: usize) -> Option<&StarSystem> {
        self.systems.get(index)
    }

    pub fn home(&self) -> Option<&StarSystem> {
        self.systems.first()
    }

    /// Counters of the last run; `None` before the first run.
    pub fn last_report(&self) -> Option<&PlacementReport> {
        self.report.as_ref()
    }

    /// Lay out orbits for system `index` between custom bounds without opening it.
    pub fn layout_orbits<R: Rng + ?Sized>(
        &self,
        index: usize,
        min_orbit: f64,
        max_orbit: f64,
        rng: &mut R,
    ) -> GenerationResult<SystemLayout> {
        let system = self
            .systems
            .get(index)
            .ok_or(GenerationError::SystemNotFound { index })?;
        let orbits = self.orbits.with_bounds(min_orbit, max_orbit)?;
        self.build_layout(system, &orbits, rng)
    }

    /// Lay out system `index` with the configured bounds and make it the open system.
    pub fn open_system<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> GenerationResult<&SystemLayout> {
        let system = self
            .systems
            .get(index)
            .ok_or(GenerationError::SystemNotFound { index })?;
        let layout = self.build_layout(system, &self.orbits, rng)?;
        Ok(self.open.insert(layout))
    }

    /// Lay out the open system again. `Ok(None)` when nothing is open.
    pub fn reroll_open_system<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> GenerationResult<Option<&SystemLayout>> {
        match self.open.as_ref().map(|layout| layout.system_index) {
            Some(index) => self.open_system(index, rng).map(Some),
            None => Ok(None),
        }
    }

    pub fn open_layout(&self) -> Option<&SystemLayout> {
        self.open.as_ref()
    }

    pub fn close_system(&mut self) {
        self.open = None;
    }

    /// Find the system nearest to a map-space position.
    pub fn nearest_system(&self, pos: DVec3) -> Option<(usize, f64)> {
        self.systems
            .iter()
            .enumerate()
            .map(|(i, system)| (i, system.distance_to(pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Systems within `radius` of a position, in catalog order.
    pub fn systems_near(&self, pos: DVec3, radius: f64) -> Vec<(usize, &StarSystem, f64)> {
        self.systems
            .iter()
            .enumerate()
            .filter_map(|(i, system)| {
                let dist = system.distance_to(pos);
                (dist <= radius).then_some((i, system, dist))
            })
            .collect()
    }

    /// Straight-line distance from the home star to system `index`.
    pub fn distance_from_home(&self, index: usize) -> Option<f64> {
        let home = self.home()?;
        self.systems.get(index).map(|s| s.distance_to(home.position))
    }

    fn build_layout<R: Rng + ?Sized>(
        &self,
        system: &StarSystem,
        orbits: &OrbitLayout,
        rng: &mut R,
    ) -> GenerationResult<SystemLayout> {
        let slots = orbits.layout(rng)?;
        let layout = SystemLayout {
            system_index: system.index,
            star_name: system.name.clone(),
            star_color: system.color,
            slots,
        };
        log::info!(
            "Opened {}: {} planets, {} belts",
            layout.star_name,
            layout.planet_count(),
            layout.belt_count()
        );
        Ok(layout)
    }
}
