// src/terrain/chunk.rs

use log::debug;
use nalgebra::Vector2;

use crate::terrain::{
    coords::ChunkCoords,
    generator::{HeightSource, MeshGenerator},
    heightmap::HeightCurve,
    mesh::RenderableMesh,
    scene::SceneHost,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Axis-aligned square on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkBounds {
    center: Vector2<f32>,
    extent: f32,
}

impl ChunkBounds {
    pub fn new(center: Vector2<f32>, size: f32) -> Self {
        Self {
            center,
            extent: size / 2.0,
        }
    }

    pub fn center(&self) -> Vector2<f32> {
        self.center
    }

    pub fn size(&self) -> f32 {
        self.extent * 2.0
    }

    /// Squared distance from `point` to the nearest point of the square; zero inside.
    pub fn sqr_distance(&self, point: Vector2<f32>) -> f32 {
        let dx = ((point.x - self.center.x).abs() - self.extent).max(0.0);
        let dz = ((point.y - self.center.y).abs() - self.extent).max(0.0);
        dx * dx + dz * dz
    }

    pub fn distance(&self, point: Vector2<f32>) -> f32 {
        self.sqr_distance(point).sqrt()
    }
}

/// Everything needed to turn a chunk coordinate into a finished mesh.
pub struct ChunkMeshSettings<'a> {
    pub map_chunk_size: usize,
    pub height_multiplier: f32,
    pub height_curve: &'a dyn HeightCurve,
    pub detail_level: u32,
}

impl ChunkMeshSettings<'_> {
    pub fn build(&self, coord: ChunkCoords, source: &dyn HeightSource) -> RenderableMesh {
        let height_field = source.height_field(coord, self.map_chunk_size);
        MeshGenerator::new()
            .generate_terrain_mesh(&height_field, self.height_multiplier, self.height_curve, self.detail_level)
            .finalize()
    }
}

/// One streamed terrain tile and the scene object that draws it.
#[derive(Debug)]
pub struct TerrainChunk<H> {
    coord: ChunkCoords,
    position: Vector2<f32>,
    bounds: ChunkBounds,
    visibility: Visibility,
    handle: H,
    last_seen_tick: u64,
}

impl<H> TerrainChunk<H> {
    /// Builds the chunk's mesh, hands it to `scene` and starts out hidden.
    pub fn new<S>(
        coord: ChunkCoords,
        chunk_size: usize,
        settings: &ChunkMeshSettings<'_>,
        source: &dyn HeightSource,
        scene: &mut S,
        tick: u64,
    ) -> Self
    where
        S: SceneHost<Handle = H>,
    {
        let position = coord.to_world_pos(chunk_size);
        let mesh = settings.build(coord, source);
        debug!(
            "Built chunk {:?}: {} vertices, {} triangles",
            coord,
            mesh.vertices().len(),
            mesh.triangle_count()
        );
        let handle = scene.spawn(coord, coord.to_scene_pos(chunk_size), mesh);

        let mut chunk = Self {
            coord,
            position,
            bounds: ChunkBounds::new(position, chunk_size as f32),
            visibility: Visibility::Hidden,
            handle,
            last_seen_tick: tick,
        };
        chunk.set_visible(false, scene);
        chunk
    }

    pub fn coord(&self) -> ChunkCoords {
        self.coord
    }

    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    pub fn bounds(&self) -> &ChunkBounds {
        &self.bounds
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Last tick this chunk was created or found visible.
    pub fn last_seen_tick(&self) -> u64 {
        self.last_seen_tick
    }

    /// Shows the chunk when its bounds are within `max_view_distance` of `viewer`.
    pub fn update_terrain_chunk<S>(
        &mut self,
        viewer: Vector2<f32>,
        max_view_distance: f32,
        scene: &mut S,
        tick: u64,
    ) -> Visibility
    where
        S: SceneHost<Handle = H>,
    {
        let viewer_distance_from_nearest_edge = self.bounds.distance(viewer);
        let visible = viewer_distance_from_nearest_edge <= max_view_distance;
        self.set_visible(visible, scene);
        if visible {
            self.last_seen_tick = tick;
        }
        self.visibility
    }

    pub fn set_visible<S>(&mut self, visible: bool, scene: &mut S)
    where
        S: SceneHost<Handle = H>,
    {
        self.visibility = if visible { Visibility::Visible } else { Visibility::Hidden };
        scene.set_active(&self.handle, visible);
    }

    pub fn into_handle(self) -> H {
        self.handle
    }
}
