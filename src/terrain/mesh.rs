// src/terrain/mesh.rs

use nalgebra::{Vector2, Vector3};

/// Pre-sized, append-only buffers for one terrain mesh.
///
/// Vertices and uvs are written by absolute index; triangles are appended at a
/// cursor. Call [`MeshData::finalize`] to freeze the buffers into a
/// [`RenderableMesh`].
#[derive(Clone, Debug)]
pub struct MeshData {
    vertices: Vec<Vector3<f32>>,
    uvs: Vec<Vector2<f32>>,
    indices: Vec<u32>,
    triangle_index: usize,
}

impl MeshData {
    pub fn new(mesh_width: usize, mesh_height: usize) -> Self {
        debug_assert!(mesh_width >= 2 && mesh_height >= 2, "mesh must be at least 2x2 vertices");
        let vertex_count = mesh_width * mesh_height;
        Self {
            vertices: vec![Vector3::zeros(); vertex_count],
            uvs: vec![Vector2::zeros(); vertex_count],
            indices: vec![0; (mesh_width - 1) * (mesh_height - 1) * 6],
            triangle_index: 0,
        }
    }

    pub fn set_vertex(&mut self, index: usize, position: Vector3<f32>) {
        self.vertices[index] = position;
    }

    pub fn set_uv(&mut self, index: usize, uv: Vector2<f32>) {
        self.uvs[index] = uv;
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert!(
            self.triangle_index + 3 <= self.indices.len(),
            "triangle buffer is full"
        );
        self.indices[self.triangle_index] = a;
        self.indices[self.triangle_index + 1] = b;
        self.indices[self.triangle_index + 2] = c;
        self.triangle_index += 3;
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    pub fn uvs(&self) -> &[Vector2<f32>] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of indices written so far.
    pub fn written_indices(&self) -> usize {
        self.triangle_index
    }

    pub fn finalize(self) -> RenderableMesh {
        debug_assert_eq!(
            self.triangle_index,
            self.indices.len(),
            "mesh finalized before every triangle was written"
        );
        let normals = compute_normals(&self.vertices, &self.indices);
        RenderableMesh {
            vertices: self.vertices,
            uvs: self.uvs,
            indices: self.indices,
            normals,
        }
    }
}

/// Immutable mesh handed to the scene host.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableMesh {
    vertices: Vec<Vector3<f32>>,
    uvs: Vec<Vector2<f32>>,
    indices: Vec<u32>,
    normals: Vec<Vector3<f32>>,
}

impl RenderableMesh {
    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    pub fn uvs(&self) -> &[Vector2<f32>] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// Sums unnormalized face normals so larger faces weigh more.
fn compute_normals(vertices: &[Vector3<f32>], indices: &[u32]) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zeros(); vertices.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (vertices[b] - vertices[a]).cross(&(vertices[c] - vertices[a]));
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals
        .into_iter()
        .map(|n| n.try_normalize(f32::EPSILON).unwrap_or_else(|| Vector3::new(0.0, 1.0, 0.0)))
        .collect()
}
