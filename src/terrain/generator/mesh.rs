use nalgebra::{Vector2, Vector3};
use crate::terrain::{
    heightmap::{HeightCurve, HeightField},
    mesh::MeshData,
};

/// Sampling stride for a level of detail: every vertex at 0, then every 2nd, 4th, 6th...
pub fn simplification_increment(detail_level: u32) -> usize {
    if detail_level == 0 {
        1
    } else {
        detail_level as usize * 2
    }
}

/// Vertices along one edge of a mesh built from `width` samples at `detail_level`.
pub fn vertices_per_line(width: usize, detail_level: u32) -> usize {
    (width - 1) / simplification_increment(detail_level) + 1
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MeshGenerator {
}

impl MeshGenerator {
    pub fn new() -> Self {
        Self {}
    }

    // builds a grid mesh centered on the local origin, one vertex per sampled point.
    // triangles are wound clockwise when seen from above.
    pub fn generate_terrain_mesh(
        &self,
        height_field: &HeightField,
        height_multiplier: f32,
        height_curve: &dyn HeightCurve,
        detail_level: u32,
    ) -> MeshData {
        let width = height_field.width();
        let height = height_field.height();

        let top_left_x = (width - 1) as f32 / -2.0;
        let top_left_z = (height - 1) as f32 / 2.0;

        let increment = simplification_increment(detail_level);
        debug_assert_eq!((width - 1) % increment, 0, "stride must divide width - 1");
        debug_assert_eq!((height - 1) % increment, 0, "stride must divide height - 1");
        let verts_per_line = vertices_per_line(width, detail_level);

        let mut mesh = MeshData::new(verts_per_line, verts_per_line);
        let row = verts_per_line as u32;
        let mut vertex_index: u32 = 0;

        for y in (0..height).step_by(increment) {
            for x in (0..width).step_by(increment) {
                let sample = height_curve.evaluate(height_field.get(x, y));
                mesh.set_vertex(
                    vertex_index as usize,
                    Vector3::new(top_left_x + x as f32, sample * height_multiplier, top_left_z - y as f32),
                );
                mesh.set_uv(
                    vertex_index as usize,
                    Vector2::new(x as f32 / width as f32, y as f32 / height as f32),
                );

                // skip the right column and bottom row, they have no quad of their own
                if x < width - 1 && y < height - 1 {
                    mesh.add_triangle(vertex_index, vertex_index + row + 1, vertex_index + row);
                    mesh.add_triangle(vertex_index + row + 1, vertex_index, vertex_index + 1);
                }

                vertex_index += 1;
            }
        }

        mesh
    }
}
