//! Procedural generation for the star map: classification sampling, system placement,
//! and per-system orbit layout.

pub mod catalog;
pub mod config;
pub mod frequency_table;
pub mod orbits;
pub mod placement;
pub mod sampler;

pub use catalog::*;
pub use config::*;
pub use frequency_table::*;
pub use orbits::*;
pub use placement::*;
pub use sampler::*;
