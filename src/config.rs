use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::terrain::{
    coords::chunks_in_distance,
    error::{Result, TerrainError},
    generator::simplification_increment,
    heightmap::KeyframeCurve,
};

/// Side length, in samples, of the height field generated for each chunk.
pub const DEFAULT_MAP_CHUNK_SIZE: usize = 241;
pub const DEFAULT_MAX_VIEW_DISTANCE: f32 = 450.0;
/// Upper bound on chunks walked in each direction per tick; the sweep covers
/// `(2k+1)²` chunks.
pub const MAX_CHUNKS_VISIBLE_IN_DISTANCE: i32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    pub seed: u32,
    pub scale: f64,
    pub octaves: usize,
    pub persistence: f64,
    pub lacunarity: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            scale: 100.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub map_chunk_size: usize,
    pub max_view_distance: f32,
    pub height_multiplier: f32,
    pub height_curve: KeyframeCurve,
    pub detail_level: u32,
    /// Chunks kept in memory before the least recently seen are evicted.
    /// `None` keeps every chunk ever built.
    pub max_retained_chunks: Option<usize>,
    pub noise: NoiseSettings,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            map_chunk_size: DEFAULT_MAP_CHUNK_SIZE,
            max_view_distance: DEFAULT_MAX_VIEW_DISTANCE,
            height_multiplier: 10.0,
            height_curve: KeyframeCurve::linear(),
            detail_level: 0,
            max_retained_chunks: None,
            noise: NoiseSettings::default(),
        }
    }
}

impl TerrainConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// World units covered by one chunk.
    pub fn chunk_size(&self) -> usize {
        self.map_chunk_size.saturating_sub(1)
    }

    pub fn chunks_visible_in_distance(&self) -> i32 {
        chunks_in_distance(self.max_view_distance, self.chunk_size())
    }

    pub fn validate(&self) -> Result<()> {
        if self.map_chunk_size < 2 {
            return Err(TerrainError::InvalidMapChunkSize(self.map_chunk_size));
        }
        if !self.max_view_distance.is_finite() || self.max_view_distance <= 0.0 {
            return Err(TerrainError::InvalidViewDistance(self.max_view_distance));
        }
        let chunks = self.chunks_visible_in_distance();
        if chunks > MAX_CHUNKS_VISIBLE_IN_DISTANCE {
            return Err(TerrainError::ViewDistanceTooLarge {
                max_view_distance: self.max_view_distance,
                chunks,
                max: MAX_CHUNKS_VISIBLE_IN_DISTANCE,
            });
        }
        if self.chunk_size() % simplification_increment(self.detail_level) != 0 {
            return Err(TerrainError::UnsupportedDetailLevel {
                detail_level: self.detail_level,
                chunk_size: self.chunk_size(),
            });
        }
        self.height_curve.validate()
    }
}
