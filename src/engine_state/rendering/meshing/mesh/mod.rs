//! Mesh generation for voxel rendering.
//!
//! This module converts chunk block data into GPU-friendly buffers using
//! per-face culling: a face is emitted only when the block it looks at is
//! not solid.
//!
//! # Architecture
//! - [`ChunkMesh`]: the parallel position/normal/UV/index buffers of one chunk
//! - [`Face`]: one quad of one voxel, before it is appended to a mesh
//! - [`MeshHandle`]: shared, in-place updatable handle given to the presentation layer
//! - [`mesh_chunk`]: the culling algorithm
//!
//! # Usage
//! ```
//! use cgmath::Point3;
//! use voxel_world::{BlockRegistry, ChunkDimensions, mesh_chunk};
//!
//! let dims = ChunkDimensions::new(2, 2, 2).unwrap();
//! let mut blocks = vec![0; dims.volume()];
//! blocks[0] = 3;
//! let mesh = mesh_chunk(&blocks, dims, Point3::new(0, 0, 0), &BlockRegistry::default(), |_| 0);
//! assert_eq!(mesh.face_count(), 6);
//! ```

mod culled;
mod face;
mod handle;
mod mesh;

pub use culled::mesh_chunk;
pub use face::Face;
pub use handle::MeshHandle;
pub use mesh::ChunkMesh;
