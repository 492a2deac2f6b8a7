//! Orbit slots and planetary layouts. Orbits are static rings; nothing here moves over time.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Visual preset a planet slot selects by type index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPreset {
    pub name: &'static str,
    /// Display scale in system-map units.
    pub scale: f32,
    pub color: Vec3,
}

/// Type 0 is the gas giant, types 1 and 2 are rocky worlds.
pub const PLANET_PRESETS: [PlanetPreset; 3] = [
    PlanetPreset {
        name: "gas giant",
        scale: 50.0,
        color: Vec3::new(1.0, 0.0, 1.0),
    },
    PlanetPreset {
        name: "rocky",
        scale: 25.0,
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    PlanetPreset {
        name: "rocky",
        scale: 25.0,
        color: Vec3::new(0.0, 1.0, 0.0),
    },
];

/// One asteroid of a belt, in polar coordinates around the system star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeltBody {
    pub angle_deg: f64,
    pub radius: f64,
}

impl BeltBody {
    /// Position on the system's orbital (XZ) plane, relative to the star.
    pub fn position(&self) -> DVec3 {
        let rad = self.angle_deg.to_radians();
        DVec3::new(rad.cos() * self.radius, 0.0, rad.sin() * self.radius)
    }
}

/// What occupies an orbit slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrbitKind {
    Planet {
        /// Index into [`PLANET_PRESETS`].
        preset: usize,
        /// Static position along the orbit, degrees.
        phase_deg: f64,
    },
    AsteroidBelt { bodies: Vec<BeltBody> },
}

/// One ring of a planetary layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSlot {
    pub radius: f64,
    pub kind: OrbitKind,
}

impl OrbitSlot {
    pub fn is_belt(&self) -> bool {
        matches!(self.kind, OrbitKind::AsteroidBelt { .. })
    }

    /// Number of bodies if this slot is a belt.
    pub fn body_count(&self) -> Option<usize> {
        match &self.kind {
            OrbitKind::AsteroidBelt { bodies } => Some(bodies.len()),
            OrbitKind::Planet { .. } => None,
        }
    }

    pub fn preset(&self) -> Option<&'static PlanetPreset> {
        match self.kind {
            OrbitKind::Planet { preset, .. } => PLANET_PRESETS.get(preset),
            OrbitKind::AsteroidBelt { .. } => None,
        }
    }

    /// Planet position on the orbital plane. `None` for belts.
    pub fn planet_position(&self) -> Option<DVec3> {
        match self.kind {
            OrbitKind::Planet { phase_deg, .. } => {
                let rad = phase_deg.to_radians();
                Some(DVec3::new(rad.cos() * self.radius, 0.0, rad.sin() * self.radius))
            }
            OrbitKind::AsteroidBelt { .. } => None,
        }
    }
}

/// Planetary layout of one catalog system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemLayout {
    pub system_index: usize,
    pub star_name: String,
    pub star_color: Vec3,
    /// Ordered innermost slot first.
    pub slots: Vec<OrbitSlot>,
}

impl SystemLayout {
    pub fn belt_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_belt()).count()
    }

    pub fn planet_count(&self) -> usize {
        self.slots.len() - self.belt_count()
    }
}
