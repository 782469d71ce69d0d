pub mod coords;
pub mod chunk;
pub mod error;
pub mod generator;
pub mod heightmap;
pub mod mesh;
pub mod scene;
pub mod store;

pub use chunk::{ChunkBounds, TerrainChunk, Visibility};
pub use coords::ChunkCoords;
pub use error::{Result, TerrainError};
pub use heightmap::{HeightCurve, HeightField, Keyframe, KeyframeCurve};
pub use mesh::{MeshData, RenderableMesh};
pub use scene::{HeadlessScene, SceneHost};
pub use store::{ChunkStore, UpdateSummary};

#[cfg(test)]
mod tests;
