//! Heightmap terrain meshing and distance-based chunk streaming.
//!
//! [`terrain::generator::MeshGenerator`] turns a [`terrain::HeightField`] into
//! a centered grid mesh at a chosen level of detail. [`terrain::ChunkStore`]
//! keeps the chunks around a moving viewer built and toggles their visibility
//! once per tick.

pub mod config;
pub mod terrain;

pub use config::TerrainConfig;
