//! Star map generator: builds a procedural star catalog from a frequency table, exports it,
//! and lays out the planets of one system.

mod config;
mod export;
mod table;

use anyhow::{Context, Result};
use config::StarmapConfig;
use procgen::Catalog;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StarmapConfig::load();
    if !StarmapConfig::exists() {
        config.save();
    }

    let table = table::load_table(&config.table_path)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Generating star map (seed {})", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut catalog =
        Catalog::new(config.generator.clone(), &table).context("invalid generator settings")?;
    catalog.generate(config.generator.num_stars, &mut rng)?;
    for system in catalog.systems() {
        log::debug!(
            "{} at {:.1} ({:.1} from home)",
            system.name,
            system.position,
            catalog.distance_from_home(system.index).unwrap_or_default()
        );
    }

    let paths = export::export_catalog(&config.output_dir, &catalog, seed)?;
    log::info!("Summary written to {:?}", paths.summary);

    if let Some(index) = config.open_system {
        match catalog.open_system(index, &mut rng) {
            Ok(layout) => println!("{}", export::layout_listing(layout)),
            Err(e) => log::warn!("Could not open system {}: {}", index, e),
        }
    }

    Ok(())
}
