// src/terrain/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("Map chunk size must be at least 2, got {0}")]
    InvalidMapChunkSize(usize),

    #[error("Max view distance must be positive and finite, got {0}")]
    InvalidViewDistance(f32),

    #[error("Max view distance {max_view_distance} spans {chunks} chunks in each direction, limit is {max}")]
    ViewDistanceTooLarge { max_view_distance: f32, chunks: i32, max: i32 },

    #[error("Detail level {detail_level} does not evenly divide chunk size {chunk_size}")]
    UnsupportedDetailLevel { detail_level: u32, chunk_size: usize },

    #[error("Invalid height curve: {0}")]
    InvalidCurve(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
