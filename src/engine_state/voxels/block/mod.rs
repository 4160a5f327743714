//! # Block Module
//!
//! This module provides the block-type table of the voxel engine: the compact
//! id stored per voxel, the immutable descriptor behind each id, and the
//! registry that resolves ids to descriptors and face textures.

use serde::{Deserialize, Serialize};

use crate::engine_state::rendering::texture::TileOrigin;

use block_side::BlockSide;

pub mod block_side;
pub mod block_type;
pub mod registry;

pub use registry::BlockRegistry;

/// The underlying integer type used to represent block types in memory.
/// Id 0 is always air.
pub type BlockId = u8;

/// Per-face texture entries of a block.
///
/// Lookups go explicit face entry, then `side` for lateral faces, then `all`.
/// A block with a single tile only sets `all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceTextures {
    /// Tile used by every face without a more specific entry
    pub all: Option<TileOrigin>,
    /// Tile shared by the four lateral faces
    pub side: Option<TileOrigin>,
    /// Positive Y
    pub top: Option<TileOrigin>,
    /// Negative Y
    pub bottom: Option<TileOrigin>,
    /// Positive Z
    pub front: Option<TileOrigin>,
    /// Negative Z
    pub back: Option<TileOrigin>,
    /// Negative X
    pub left: Option<TileOrigin>,
    /// Positive X
    pub right: Option<TileOrigin>,
}

impl FaceTextures {
    /// One tile on every face.
    pub fn uniform(tile: TileOrigin) -> Self {
        Self {
            all: Some(tile),
            ..Default::default()
        }
    }

    /// Distinct tiles for top, bottom and the four sides.
    pub fn top_bottom_side(top: TileOrigin, bottom: TileOrigin, side: TileOrigin) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
            side: Some(side),
            ..Default::default()
        }
    }

    fn explicit(&self, side: BlockSide) -> Option<TileOrigin> {
        match side {
            BlockSide::FRONT => self.front,
            BlockSide::BACK => self.back,
            BlockSide::BOTTOM => self.bottom,
            BlockSide::TOP => self.top,
            BlockSide::LEFT => self.left,
            BlockSide::RIGHT => self.right,
        }
    }

    /// Resolves the tile for one face through the fallback chain.
    pub fn resolve(&self, side: BlockSide) -> Option<TileOrigin> {
        self.explicit(side)
            .or_else(|| if side.is_lateral() { self.side } else { None })
            .or(self.all)
    }
}

/// Immutable description of one block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDescriptor {
    /// Id stored in chunk arrays
    pub id: BlockId,
    /// Human readable name
    pub name: String,
    /// Whether the block occludes neighbors and blocks movement
    #[serde(default)]
    pub solid: bool,
    /// Atlas tiles per face
    #[serde(default)]
    pub textures: FaceTextures,
}

impl BlockDescriptor {
    /// A solid block.
    pub fn solid(id: impl Into<BlockId>, name: &str, textures: FaceTextures) -> Self {
        Self {
            id: id.into(),
            name: name.to_owned(),
            solid: true,
            textures,
        }
    }

    /// The air descriptor. Non-solid and untextured.
    pub fn air() -> Self {
        Self {
            id: 0,
            name: "air".to_owned(),
            solid: false,
            textures: FaceTextures::default(),
        }
    }
}
