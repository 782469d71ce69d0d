// src/terrain/store.rs

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, info, trace};
use nalgebra::Vector2;

use crate::config::TerrainConfig;
use crate::terrain::{
    chunk::{ChunkMeshSettings, TerrainChunk},
    coords::ChunkCoords,
    error::Result,
    generator::HeightSource,
    heightmap::HeightCurve,
    scene::SceneHost,
};

/// What one call to [`ChunkStore::update_visible_chunks`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub viewer_chunk: ChunkCoords,
    pub created: usize,
    pub visible: usize,
    pub evicted: usize,
}

/// Streams terrain chunks around a moving viewer.
///
/// Call [`update_visible_chunks`](Self::update_visible_chunks) once per tick.
/// Chunks inside the square neighborhood around the viewer are built the first
/// time they are seen and shown or hidden by their distance to the viewer on
/// every later tick.
pub struct ChunkStore<S: SceneHost> {
    config: TerrainConfig,
    chunk_size: usize,
    chunks_visible_in_distance: i32,
    source: Box<dyn HeightSource>,
    height_curve: Box<dyn HeightCurve>,
    scene: S,
    chunks: HashMap<ChunkCoords, TerrainChunk<S::Handle>>,
    visible_last_update: Vec<ChunkCoords>,
    tick: u64,
}

impl<S: SceneHost> ChunkStore<S> {
    pub fn new(config: TerrainConfig, source: impl HeightSource + 'static, scene: S) -> Result<Self> {
        config.validate()?;

        let chunk_size = config.chunk_size();
        let chunks_visible_in_distance = config.chunks_visible_in_distance();
        info!(
            "Chunk store ready: chunk size {}, view distance {}, {} chunks in each direction",
            chunk_size, config.max_view_distance, chunks_visible_in_distance
        );

        Ok(Self {
            height_curve: Box::new(config.height_curve.clone()),
            config,
            chunk_size,
            chunks_visible_in_distance,
            source: Box::new(source),
            scene,
            chunks: HashMap::new(),
            visible_last_update: Vec::new(),
            tick: 0,
        })
    }

    /// Replaces the configured keyframe curve for chunks built from now on.
    pub fn with_height_curve(mut self, curve: impl HeightCurve + 'static) -> Self {
        self.height_curve = Box::new(curve);
        self
    }

    /// Runs one tick. `viewer` is the viewer's world position as (x, z).
    pub fn update_visible_chunks(&mut self, viewer: Vector2<f32>) -> UpdateSummary {
        self.tick += 1;
        let tick = self.tick;
        let viewer_chunk = ChunkCoords::from_viewer(viewer, self.chunk_size);
        let mut summary = UpdateSummary {
            viewer_chunk,
            ..UpdateSummary::default()
        };

        for coord in self.visible_last_update.drain(..) {
            if let Some(chunk) = self.chunks.get_mut(&coord) {
                chunk.set_visible(false, &mut self.scene);
            }
        }

        let settings = ChunkMeshSettings {
            map_chunk_size: self.config.map_chunk_size,
            height_multiplier: self.config.height_multiplier,
            height_curve: self.height_curve.as_ref(),
            detail_level: self.config.detail_level,
        };

        let k = self.chunks_visible_in_distance;
        for z_offset in -k..=k {
            for x_offset in -k..=k {
                let coord = viewer_chunk.offset(x_offset, z_offset);

                match self.chunks.entry(coord) {
                    Entry::Occupied(mut entry) => {
                        let visibility = entry.get_mut().update_terrain_chunk(
                            viewer,
                            self.config.max_view_distance,
                            &mut self.scene,
                            tick,
                        );
                        if visibility.is_visible() {
                            self.visible_last_update.push(coord);
                        }
                    }
                    Entry::Vacant(entry) => {
                        // new chunks only become eligible for display next tick
                        entry.insert(TerrainChunk::new(
                            coord,
                            self.chunk_size,
                            &settings,
                            self.source.as_ref(),
                            &mut self.scene,
                            tick,
                        ));
                        summary.created += 1;
                    }
                }
            }
        }

        if let Some(limit) = self.config.max_retained_chunks {
            summary.evicted = self.evict_stale_chunks(viewer_chunk, limit);
        }

        summary.visible = self.visible_last_update.len();
        trace!("Tick {}: {:?}, {} chunks retained", tick, summary, self.chunks.len());
        summary
    }

    // drops chunks outside the current neighborhood, least recently seen first
    fn evict_stale_chunks(&mut self, viewer_chunk: ChunkCoords, limit: usize) -> usize {
        if self.chunks.len() <= limit {
            return 0;
        }

        let k = self.chunks_visible_in_distance;
        let mut stale: Vec<(u64, ChunkCoords)> = self
            .chunks
            .iter()
            .filter(|(coord, _)| {
                coord.x.abs_diff(viewer_chunk.x) > k.unsigned_abs()
                    || coord.z.abs_diff(viewer_chunk.z) > k.unsigned_abs()
            })
            .map(|(coord, chunk)| (chunk.last_seen_tick(), *coord))
            .collect();
        stale.sort_by_key(|&(tick, coord)| (tick, coord.x, coord.z));

        let excess = self.chunks.len() - limit;
        let mut evicted = 0;
        for (_, coord) in stale.into_iter().take(excess) {
            if let Some(chunk) = self.chunks.remove(&coord) {
                debug!("Evicting chunk {:?}", coord);
                self.scene.despawn(chunk.into_handle());
                evicted += 1;
            }
        }
        evicted
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunks_visible_in_distance(&self) -> i32 {
        self.chunks_visible_in_distance
    }

    pub fn chunk(&self, coord: ChunkCoords) -> Option<&TerrainChunk<S::Handle>> {
        self.chunks.get(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoords> + '_ {
        self.chunks.keys().copied()
    }

    /// Chunks shown by the most recent update.
    pub fn visible_chunks(&self) -> &[ChunkCoords] {
        &self.visible_last_update
    }

    pub fn is_visible(&self, coord: ChunkCoords) -> bool {
        self.chunks.get(&coord).is_some_and(|chunk| chunk.is_visible())
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}
