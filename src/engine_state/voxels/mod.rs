//! # Voxel Engine Core
//!
//! This module contains the voxel data model: what a block is, how blocks are
//! grouped into chunks, and how chunks are addressed and kept meshed.
//!
//! ## Architecture
//!
//! * **Block**: Block ids, faces, descriptors and the registry
//! * **Coordinates**: Chunk extents and world/chunk/local conversions
//! * **Terrain**: Deterministic, seed-driven block placement
//! * **Chunk**: A fixed-size 3D block array plus its mesh handle
//! * **World**: The chunk directory, edit routing and the dirty set
//!
//! ## Data Flow
//!
//! 1. The world is asked for a chunk and generates it from the terrain function
//! 2. Edits go through the world, which dirties the owning chunk and any neighbor
//!    sharing the edited border
//! 3. Once per tick the dirty set is flushed and each dirty chunk is remeshed
//! 4. Newly created meshes are handed to the presentation layer exactly once
//!
//! ## Thread Safety
//!
//! The world is single-threaded. Mesh handles are `Rc`-based and stay on the
//! thread that owns the world.

pub mod block;
pub mod chunk;
pub mod coordinates;
pub mod terrain;
pub mod world;
