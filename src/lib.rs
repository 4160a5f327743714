#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! The data and geometry core of a block-based voxel engine: a data-driven
//! block registry, deterministic noise terrain, chunk storage, a face-culling
//! mesher and a world that keeps chunk meshes consistent across edits.
//!
//! ## Key Modules
//!
//! * `config` - Bootstrap configuration loaded from JSON
//! * `core` - Core utilities and data structures used throughout the engine
//! * `engine_state` - The engine driver plus its voxel and meshing subsystems
//! * `error` - The crate error type
//!
//! ## Architecture
//!
//! The crate stops at the presentation boundary. Chunks are meshed into plain
//! buffers wrapped in a [`MeshHandle`]; drawing those buffers, input and the
//! window are left to whatever embeds the engine.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_world::{EngineConfig, EngineState};
//!
//! voxel_world::init_logger();
//!
//! let mut engine = EngineState::new(&EngineConfig::default()).unwrap();
//! engine.load_area(Point3::new(0, 0, 0), 1).unwrap();
//!
//! let mut scene = Vec::new();
//! engine.tick(|mesh| scene.push(mesh));
//!
//! engine.world_mut().set_block_at(Point3::new(0, 80, 0), 3);
//! engine.tick(|mesh| scene.push(mesh));
//! ```
//!
//! ## Performance Considerations
//!
//! * Chunk-based voxel storage with a flat, Y-major block array
//! * Hidden faces are culled, including across chunk seams
//! * Edits are batched: each dirty chunk is rebuilt at most once per tick

use log::info;

pub mod config;
pub mod core;
pub mod engine_state;
pub mod error;

pub use config::EngineConfig;
pub use engine_state::{
    rendering::{
        meshing::{mesh_chunk, ChunkMesh, MeshHandle},
        texture::AtlasConfig,
    },
    voxels::{
        block::{
            block_side::BlockSide, block_type::BlockType, BlockDescriptor, BlockId,
            BlockRegistry, FaceTextures,
        },
        chunk::Chunk,
        coordinates::ChunkDimensions,
        terrain::{GenerationMethod, TerrainGenerator, TerrainParams},
        world::World,
    },
    EngineState,
};
pub use error::{Result, VoxelError};

/// Installs the stdout logger, filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs a logger.
pub fn init_logger() {
    let mut log_builder = env_logger::Builder::new();
    let installed = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok();

    if installed {
        info!("Logger initialized");
    }
}
