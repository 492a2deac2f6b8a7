//! Core types for the star map generator.
//!
//! This crate provides the records every other part of the workspace passes around:
//! - Stellar classification rows from the frequency table
//! - Star systems placed in the catalog
//! - Orbit slots and planetary layouts
//! - The generation error taxonomy

pub mod classification;
pub mod error;
pub mod orbit;
pub mod star;

pub use classification::*;
pub use error::*;
pub use orbit::*;
pub use star::*;

// Re-export commonly used types
pub use glam::{DVec3, Vec3};
