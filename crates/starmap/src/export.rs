//! Catalog export: a RON record of every system plus plain-text distance and summary files.

use anyhow::{Context, Result};
use glam::DVec3;
use procgen::{Catalog, PlacementReport};
use serde::{Deserialize, Serialize};
use starmap_core::{OrbitKind, StarSystem, SystemLayout};
use std::path::{Path, PathBuf};

pub const CATALOG_FILE: &str = "star_systems.ron";
pub const DISTANCES_FILE: &str = "star_distances.txt";
pub const SUMMARY_FILE: &str = "star_systems_summary.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Persisted catalog (export file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub seed: u64,
    pub star_systems: Vec<CatalogEntry>,
}

impl CatalogRecord {
    pub fn new(seed: u64, systems: &[StarSystem]) -> Self {
        Self {
            seed,
            star_systems: systems
                .iter()
                .map(|s| CatalogEntry {
                    name: s.name.clone(),
                    x: s.position.x,
                    y: s.position.y,
                    z: s.position.z,
                })
                .collect(),
        }
    }
}

/// One `Distance: <d>` line per system, measured from `origin`.
pub fn distance_listing(systems: &[StarSystem], origin: DVec3) -> String {
    systems
        .iter()
        .map(|system| format!("Distance: {}\n", system.distance_to(origin)))
        .collect()
}

pub fn summary(systems: &[StarSystem], report: Option<&PlacementReport>) -> String {
    let mut out = format!("Total Systems: {}\n", systems.len());
    if let Some(report) = report {
        out.push_str(&format!("Requested: {}\n", report.requested));
        out.push_str(&format!("Skipped Slots: {}\n", report.skipped));
    }
    out
}

/// Human-readable listing of a system layout, innermost orbit first.
pub fn layout_listing(layout: &SystemLayout) -> String {
    let mut out = format!("{}\n", layout.star_name);
    for (i, slot) in layout.slots.iter().enumerate() {
        let line = match &slot.kind {
            OrbitKind::Planet { .. } => format!(
                "  {}: {} at {:.1}\n",
                i + 1,
                slot.preset().map_or("planet", |p| p.name),
                slot.radius
            ),
            OrbitKind::AsteroidBelt { bodies } => format!(
                "  {}: asteroid belt at {:.1} ({} bodies)\n",
                i + 1,
                slot.radius,
                bodies.len()
            ),
        };
        out.push_str(&line);
    }
    out
}

#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub catalog: PathBuf,
    pub distances: PathBuf,
    pub summary: PathBuf,
}

/// Write the catalog, distance listing and summary into `dir`, creating it if needed.
pub fn export_catalog(dir: &Path, catalog: &Catalog, seed: u64) -> Result<ExportPaths> {
    std::fs::create_dir_all(dir).with_context(|| format!("could not create {:?}", dir))?;
    let paths = ExportPaths {
        catalog: dir.join(CATALOG_FILE),
        distances: dir.join(DISTANCES_FILE),
        summary: dir.join(SUMMARY_FILE),
    };

    let record = CatalogRecord::new(seed, catalog.systems());
    let ron_text = ron::ser::to_string_pretty(&record, ron::ser::PrettyConfig::default())
        .context("could not serialize catalog")?;
    write_file(&paths.catalog, &ron_text)?;
    write_file(
        &paths.distances,
        &distance_listing(catalog.systems(), catalog.config().origin),
    )?;
    write_file(
        &paths.summary,
        &summary(catalog.systems(), catalog.last_report()),
    )?;

    log::info!("Catalog exported to {:?}", dir);
    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("could not write {:?}", path))
}
