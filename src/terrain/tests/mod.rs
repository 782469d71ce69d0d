use crate::terrain::{coords::ChunkCoords, heightmap::HeightField};

mod mesh_data_tests;

fn flat_source(_coord: ChunkCoords, size: usize) -> HeightField {
    HeightField::filled(size, size, 0.0)
}
