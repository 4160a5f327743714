use std::cell::Ref;

use cgmath::Point3;

use crate::core::StResource;

use super::mesh::ChunkMesh;

/// Opaque handle to a chunk's renderable mesh, as seen by the presentation layer.
///
/// Clones share the same geometry cell. When the chunk is remeshed the buffers
/// inside the cell are swapped, so a handle attached once keeps showing the
/// latest geometry without being attached again.
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Shared geometry, replaced in place on every rebuild
    geometry: StResource<ChunkMesh>,
    /// Chunk coordinate of the owning chunk
    chunk_position: Point3<i32>,
    /// World-space translation to apply to the chunk-local geometry
    origin: Point3<i32>,
}

impl MeshHandle {
    /// Wraps freshly built geometry.
    pub fn new(chunk_position: Point3<i32>, origin: Point3<i32>, geometry: ChunkMesh) -> Self {
        Self {
            geometry: StResource::new(geometry),
            chunk_position,
            origin,
        }
    }

    /// Read access to the current buffers.
    pub fn geometry(&self) -> Ref<'_, ChunkMesh> {
        self.geometry.get()
    }

    /// Swaps the buffers for every clone of this handle.
    ///
    /// Fails, handing the new buffers back, while any clone holds a
    /// [`MeshHandle::geometry`] guard.
    pub fn replace_geometry(&self, geometry: ChunkMesh) -> Result<(), ChunkMesh> {
        self.geometry.try_replace(geometry).map(|_| ())
    }

    /// Chunk coordinate of the owning chunk.
    pub fn chunk_position(&self) -> Point3<i32> {
        self.chunk_position
    }

    /// World-space origin of the chunk, the mesh's transform.
    pub fn origin(&self) -> Point3<i32> {
        self.origin
    }

    /// Whether two handles refer to the same mesh object.
    pub fn same_mesh(&self, other: &MeshHandle) -> bool {
        self.geometry.ptr_eq(&other.geometry)
    }
}
