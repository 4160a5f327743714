//! # Block Registry
//!
//! The process-wide block table. It is built once at startup, validated, and
//! then shared read-only (behind an `Arc`) with every component that needs it.

use std::{fs, path::Path};

use log::warn;

use crate::{
    engine_state::rendering::texture::{expand_tile, TileOrigin, DEFAULT_TILE_SIZE},
    error::{Result, VoxelError},
};

use super::{
    block_side::BlockSide, block_type::BlockType, BlockDescriptor, BlockId, FaceTextures,
};

/// Atlas tile for a `(column, row)` cell of the default 16x16 atlas.
fn tile(column: u8, row: u8) -> TileOrigin {
    [
        column as f32 * DEFAULT_TILE_SIZE,
        row as f32 * DEFAULT_TILE_SIZE,
    ]
}

/// Immutable table of block descriptors indexed by id.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    /// Descriptors, `descriptors[id].id == id`
    descriptors: Vec<BlockDescriptor>,
    /// Tile edge length used by [`BlockRegistry::expand_tile`]
    tile_size: f32,
}

impl BlockRegistry {
    /// Builds a registry from a descriptor table.
    ///
    /// The table must start with a non-solid id 0 and list ids densely in order.
    pub fn new(descriptors: Vec<BlockDescriptor>, tile_size: f32) -> Result<Self> {
        let Some(first) = descriptors.first() else {
            return Err(VoxelError::InvalidRegistry("block table is empty".into()));
        };
        if first.id != 0 || first.solid {
            return Err(VoxelError::InvalidRegistry(
                "id 0 must be the non-solid air block".into(),
            ));
        }
        if descriptors.len() > BlockId::MAX as usize + 1 {
            return Err(VoxelError::InvalidRegistry(format!(
                "{} descriptors do not fit in a block id",
                descriptors.len()
            )));
        }
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptor.id as usize != index {
                return Err(VoxelError::InvalidRegistry(format!(
                    "block '{}' has id {} but is listed at position {}",
                    descriptor.name, descriptor.id, index
                )));
            }
        }
        if !(tile_size > 0.0 && tile_size <= 1.0) {
            return Err(VoxelError::InvalidRegistry(format!(
                "tile size {} is outside (0, 1]",
                tile_size
            )));
        }

        Ok(Self {
            descriptors,
            tile_size,
        })
    }

    /// Parses a JSON array of descriptors.
    pub fn from_json(json: &str, tile_size: f32) -> Result<Self> {
        let descriptors: Vec<BlockDescriptor> = serde_json::from_str(json)?;
        Self::new(descriptors, tile_size)
    }

    /// Reads a JSON array of descriptors from disk.
    pub fn load<P: AsRef<Path>>(path: P, tile_size: f32) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| VoxelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, tile_size)
    }

    /// The built-in table of [`BlockType`]s.
    pub fn default_descriptors() -> Vec<BlockDescriptor> {
        vec![
            BlockDescriptor::air(),
            BlockDescriptor::solid(BlockType::DIRT, "dirt", FaceTextures::uniform(tile(2, 0))),
            BlockDescriptor::solid(
                BlockType::GRASS,
                "grass",
                FaceTextures::top_bottom_side(tile(0, 0), tile(2, 0), tile(1, 0)),
            ),
            BlockDescriptor::solid(BlockType::STONE, "stone", FaceTextures::uniform(tile(3, 0))),
            BlockDescriptor::solid(
                BlockType::WOOD,
                "wood",
                FaceTextures {
                    top: Some(tile(5, 0)),
                    bottom: Some(tile(5, 0)),
                    all: Some(tile(4, 0)),
                    ..Default::default()
                },
            ),
        ]
    }

    /// Descriptor for `id`. Unknown ids resolve to air.
    pub fn descriptor_of(&self, id: BlockId) -> &BlockDescriptor {
        self.descriptors
            .get(id as usize)
            .unwrap_or(&self.descriptors[0])
    }

    /// Shorthand for `descriptor_of(id).solid`.
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.descriptor_of(id).solid
    }

    /// Whether `id` names a registered block.
    pub fn contains(&self, id: BlockId) -> bool {
        (id as usize) < self.descriptors.len()
    }

    /// Resolves the atlas tile for one face of a block.
    pub fn face_texture(&self, id: BlockId, side: BlockSide) -> Option<TileOrigin> {
        self.descriptor_of(id).textures.resolve(side)
    }

    /// UV corners of a tile, bottom-left, bottom-right, top-left, top-right.
    pub fn expand_tile(&self, origin: TileOrigin) -> [[f32; 2]; 4] {
        expand_tile(origin, self.tile_size)
    }

    /// Tile edge length as a fraction of the atlas.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Every solid `(block, face)` pair that has no resolvable texture.
    ///
    /// Such faces are skipped at mesh time; this is the startup completeness check.
    pub fn missing_textures(&self) -> Vec<(BlockId, BlockSide)> {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.solid)
            .flat_map(|descriptor| {
                BlockSide::all()
                    .into_iter()
                    .filter(|side| descriptor.textures.resolve(*side).is_none())
                    .map(move |side| (descriptor.id, side))
            })
            .collect()
    }

    /// Logs one warning per entry of [`BlockRegistry::missing_textures`].
    ///
    /// Returns the number of faces that will render as holes.
    pub fn report_missing_textures(&self) -> usize {
        let missing = self.missing_textures();
        for (id, side) in &missing {
            warn!(
                "block '{}' ({}) has no texture for its {} face",
                self.descriptor_of(*id).name,
                id,
                side.name()
            );
        }
        missing.len()
    }

    /// Number of registered block types, air included.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// False for any registry built through [`BlockRegistry::new`], which requires air.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates descriptors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self {
            descriptors: Self::default_descriptors(),
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}
