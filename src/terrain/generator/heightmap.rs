use noise::{NoiseFn, Perlin};

use crate::config::NoiseSettings;
use crate::terrain::{
    coords::ChunkCoords,
    heightmap::HeightField,
};

/// Supplies the height samples for a chunk.
///
/// Implementations must return a `map_chunk_size` x `map_chunk_size` field with
/// samples normalized to `[0, 1]`.
pub trait HeightSource {
    fn height_field(&self, coord: ChunkCoords, map_chunk_size: usize) -> HeightField;
}

impl<F> HeightSource for F
where
    F: Fn(ChunkCoords, usize) -> HeightField,
{
    fn height_field(&self, coord: ChunkCoords, map_chunk_size: usize) -> HeightField {
        self(coord, map_chunk_size)
    }
}

pub struct HeightmapGenerator {
    noise: Perlin,
    scale: f64,
    octaves: usize,
    persistence: f64,
    lacunarity: f64,
}

impl HeightmapGenerator {
    pub fn new(seed: u32) -> Self {
        Self::from_settings(&NoiseSettings {
            seed,
            ..NoiseSettings::default()
        })
    }

    pub fn from_settings(settings: &NoiseSettings) -> Self {
        Self {
            noise: Perlin::new(settings.seed),
            scale: settings.scale.max(f64::EPSILON),
            octaves: settings.octaves.max(1),
            persistence: settings.persistence,
            lacunarity: settings.lacunarity,
        }
    }

    // samples world positions so that the shared edge of two neighbouring
    // chunks reads the same noise
    pub fn generate_chunk(&self, coord: ChunkCoords, map_chunk_size: usize) -> HeightField {
        let chunk_size = (map_chunk_size - 1) as f64;
        let half = chunk_size / 2.0;
        let origin_x = coord.x as f64 * chunk_size - half;
        let origin_z = coord.z as f64 * chunk_size + half;

        HeightField::from_fn(map_chunk_size, map_chunk_size, |x, y| {
            self.sample_height(origin_x + x as f64, origin_z - y as f64)
        })
    }

    // octave i: frequency lacunarity^i / scale, weight persistence^i
    fn sample_height(&self, x: f64, z: f64) -> f32 {
        let octaves = (0..self.octaves).map(|i| {
            let i = i as i32;
            (self.lacunarity.powi(i) / self.scale, self.persistence.powi(i))
        });
        let (sum, total_amplitude) = octaves.fold((0.0, 0.0), |(sum, total), (freq, amp)| {
            (sum + amp * self.noise.get([x * freq, z * freq]), total + amp)
        });

        if total_amplitude <= 0.0 {
            return 0.5;
        }
        (0.5 + 0.5 * (sum / total_amplitude) as f32).clamp(0.0, 1.0)
    }
}

impl HeightSource for HeightmapGenerator {
    fn height_field(&self, coord: ChunkCoords, map_chunk_size: usize) -> HeightField {
        self.generate_chunk(coord, map_chunk_size)
    }
}
