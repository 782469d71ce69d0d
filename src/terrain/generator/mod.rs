mod heightmap;
mod mesh;

pub use mesh::{
    MeshGenerator,
    simplification_increment,
    vertices_per_line,
};
pub use heightmap::{
    HeightmapGenerator,
    HeightSource,
};
