//! # Block Type Module
//!
//! Ids of the built-in block table. Custom tables loaded from JSON may define
//! further ids; these names only cover the defaults the terrain generator uses.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockId;

/// Enumerates the block types of the default registry.
///
/// The discriminant is the block id stored in chunk arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent. Always id 0.
    AIR = 0,

    /// Plain dirt, the subsoil band under the surface.
    DIRT = 1,

    /// Grass on top, dirt underneath, grassy dirt on the sides.
    GRASS = 2,

    /// Stone, everything below the subsoil band.
    STONE = 3,

    /// A log with ring textures on top and bottom and bark on the sides.
    WOOD = 4,
}

impl BlockType {
    /// The id written into chunk arrays for this type.
    pub const fn id(self) -> BlockId {
        self as BlockId
    }

    /// Converts a raw id back to a default block type, if it is one.
    pub fn from_id(id: BlockId) -> Option<Self> {
        FromPrimitive::from_u8(id)
    }
}

impl From<BlockType> for BlockId {
    fn from(block_type: BlockType) -> Self {
        block_type.id()
    }
}
