//! Error type shared by the fallible parts of the engine.
//!
//! Only bootstrap (config, registry, world construction) and chunk creation can
//! fail. Reads, edits and remeshing are total and resolve bad input to defaults.

use std::path::PathBuf;

use cgmath::Point3;
use thiserror::Error;

use crate::engine_state::voxels::block::BlockId;

/// Errors raised while bootstrapping the engine or creating chunks.
#[derive(Debug, Error)]
pub enum VoxelError {
    /// A config or block table file could not be read.
    #[error("failed to read {path}: {source}")]
    ConfigRead {
        /// The file that was requested
        path: PathBuf,
        /// The underlying io failure
        #[source]
        source: std::io::Error,
    },

    /// A config or block table file is not valid JSON for the expected schema.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Chunk dimensions must all be strictly positive.
    #[error("invalid chunk dimensions {width}x{height}x{depth}")]
    InvalidDimensions {
        /// Requested width (X)
        width: i32,
        /// Requested height (Y)
        height: i32,
        /// Requested depth (Z)
        depth: i32,
    },

    /// The block descriptor table is malformed.
    #[error("invalid block registry: {0}")]
    InvalidRegistry(String),

    /// The chunk coordinate has no origin inside the `i32` world.
    #[error("chunk {position:?} lies outside the world coordinate range")]
    ChunkOutOfRange {
        /// The requested chunk coordinate
        position: Point3<i32>,
    },

    /// The terrain generator produced an id the registry does not know.
    #[error("terrain generator produced unknown block id {id} at {position:?}")]
    UnknownBlock {
        /// The offending id
        id: BlockId,
        /// World coordinate of the voxel being generated
        position: Point3<i32>,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, VoxelError>;
