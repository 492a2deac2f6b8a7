//! Star systems as placed in the catalog.

use crate::classification::{ClassificationRecord, SpectralClass};
use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Display name of the home star.
pub const HOME_NAME: &str = "Sol";

/// One entry of the generated catalog. Read-only once the run that produced it completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    /// Position in the catalog; 0 is always the home star.
    pub index: usize,
    /// Placement slot that produced this system. Skipped slots leave gaps, so `slot >= index`.
    pub slot: usize,
    pub name: String,
    pub spectral: SpectralClass,
    /// Position in map space (the home star sits at the configured origin).
    pub position: DVec3,
    /// Color assigned at generation time.
    pub color: Vec3,
}

impl StarSystem {
    /// The home star at `origin`, with its fixed classification.
    pub fn home(origin: DVec3) -> Self {
        let sol = ClassificationRecord::sol();
        Self {
            index: 0,
            slot: 0,
            name: format!("[0] {}", HOME_NAME),
            spectral: sol.spectral,
            position: origin,
            color: sol.color,
        }
    }

    /// A generated system named `[slot] <class><subclass>(<luminosity>)`.
    pub fn from_record(
        index: usize,
        slot: usize,
        position: DVec3,
        record: &ClassificationRecord,
    ) -> Self {
        Self {
            index,
            slot,
            name: format!("[{}] {}", slot, record.spectral),
            spectral: record.spectral.clone(),
            position,
            color: record.color,
        }
    }

    pub fn is_home(&self) -> bool {
        self.index == 0
    }

    pub fn distance_to(&self, pos: DVec3) -> f64 {
        (self.position - pos).length()
    }
}
