// src/terrain/coords.rs

use nalgebra::{Vector2, Vector3};

/// Chunk indices on the XZ plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoords {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoords {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk containing `viewer`, rounding to the nearest chunk center.
    pub fn from_viewer(viewer: Vector2<f32>, chunk_size: usize) -> Self {
        let size = chunk_size as f32;
        Self {
            x: round_to_int(viewer.x / size),
            z: round_to_int(viewer.y / size),
        }
    }

    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            z: self.z.saturating_add(dz),
        }
    }

    /// Center of the chunk on the XZ plane, packed as (x, z).
    pub fn to_world_pos(&self, chunk_size: usize) -> Vector2<f32> {
        Vector2::new(
            self.x as f32 * chunk_size as f32,
            self.z as f32 * chunk_size as f32,
        )
    }

    /// Where the chunk's mesh object sits in the scene.
    pub fn to_scene_pos(&self, chunk_size: usize) -> Vector3<f32> {
        let pos = self.to_world_pos(chunk_size);
        Vector3::new(pos.x, 0.0, pos.y)
    }
}

/// Rounds half-way cases to the even integer.
pub fn round_to_int(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// How many chunks `max_view_distance` spans in each direction.
pub fn chunks_in_distance(max_view_distance: f32, chunk_size: usize) -> i32 {
    round_to_int(max_view_distance / chunk_size as f32)
}
