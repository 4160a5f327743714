//! Mesh generation and hand-off for voxel rendering.
//!
//! Chunks are meshed with a per-face culling pass and the result is published
//! to the presentation layer through a [`MeshHandle`]. The handle is created
//! on a chunk's first build and updated in place on every rebuild after that.
//!
//! # Architecture
//! - `mesh/`: buffers, faces, handles and the culling algorithm
//!
//! # Performance Considerations
//! - A rebuild is O(chunk volume) and always recomputes the whole chunk
//! - Neighbors inside the chunk are read from the block array directly; only
//!   border voxels pay for a lookup through the world

mod mesh;

pub use mesh::*;
