//! Mesh buffers produced for one chunk.
//!
//! The four buffers are parallel: vertex `n` has `positions[n]`, `normals[n]`
//! and `uvs[n]`. Every face contributes four vertices and six indices.

use super::face::Face;

/// Surface geometry of one chunk, in chunk-local space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals, constant across each face
    pub normals: Vec<[f32; 3]>,
    /// Atlas UV coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list, two triangles per face
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad.
    ///
    /// Indices come from the face's winding table offset by the number of
    /// vertices already in the mesh.
    pub fn add_face(&mut self, face: &Face, uvs: [[f32; 2]; 4]) {
        let base = self.positions.len() as u32;
        let normal = face.block_side.normal();

        self.positions.extend_from_slice(&face.corners);
        self.normals.extend_from_slice(&[normal; 4]);
        self.uvs.extend_from_slice(&uvs);
        self.indices
            .extend(face.block_side.winding().iter().map(|index| base + index));
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of quads.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Whether the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Raw bytes of the position buffer, for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the normal buffer.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Raw bytes of the UV buffer.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Raw bytes of the index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
