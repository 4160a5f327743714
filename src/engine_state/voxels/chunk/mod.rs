//! # Chunk Module
//!
//! This module provides the `Chunk` struct: one fixed-size box of voxel data
//! together with the mesh last built from it.
//!
//! ## Storage
//!
//! Blocks are stored densely, one id per voxel, in Y-major order:
//! `index = y * (width * depth) + z * width + x`. Blocks on the same vertical
//! layer are contiguous, which is the order both the terrain fill and the
//! mesher walk the array in.
//!
//! ## Bounds
//!
//! Local coordinates outside `[0, dimension)` are never an error. Reads return
//! air and writes are ignored.

use cgmath::{EuclideanSpace, Point3};
use chunk_creation::ChunkCreationIterator;
use chunk_iteration::ChunkBlockIterator;
use log::trace;

use crate::{
    engine_state::rendering::meshing::{mesh_chunk, ChunkMesh, MeshHandle},
    error::{Result, VoxelError},
};

use super::{
    block::{block_type::BlockType, BlockId, BlockRegistry},
    coordinates::{offset_position, ChunkDimensions},
    terrain::TerrainGenerator,
};

mod chunk_creation;
pub mod chunk_iteration;

/// A fixed-size box of voxel blocks identified by its chunk coordinate.
#[derive(Debug)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,

    /// Fixed extents shared by every chunk of a world.
    dimensions: ChunkDimensions,

    /// One block id per voxel, Y-major.
    blocks: Vec<BlockId>,

    /// The mesh last built for this chunk, shared with the presentation layer.
    mesh: Option<MeshHandle>,

    /// Set when `mesh` was created and has not been handed out for attachment.
    needs_attachment: bool,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: Point3<i32>, dimensions: ChunkDimensions) -> Self {
        ChunkCreationIterator::new(position, dimensions).return_chunk()
    }

    /// Generates a chunk by sampling `generator` once per voxel.
    ///
    /// Fails without producing a chunk if the generator yields an id the
    /// registry does not know, or if the chunk's origin does not fit in `i32`;
    /// a partially filled chunk is never returned. Voxels of an edge chunk
    /// that fall past `i32::MAX` are air.
    pub fn generate(
        position: Point3<i32>,
        dimensions: ChunkDimensions,
        generator: &TerrainGenerator,
        registry: &BlockRegistry,
    ) -> Result<Self> {
        let origin = dimensions
            .checked_origin_of(position)
            .ok_or(VoxelError::ChunkOutOfRange { position })?;
        let mut cci = ChunkCreationIterator::new(position, dimensions);

        while let Some(local) = cci.next_position() {
            let Some(world) = offset_position(origin, local.to_vec()) else {
                cci.push_block(BlockType::AIR.id());
                continue;
            };
            let id = generator.block_at(world);
            if !registry.contains(id) {
                return Err(VoxelError::UnknownBlock {
                    id,
                    position: world,
                });
            }
            cci.push_block(id);
        }

        Ok(cci.return_chunk())
    }

    /// The fixed extents of this chunk.
    pub fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    /// World coordinate of this chunk's `(0, 0, 0)` block.
    pub fn origin(&self) -> Point3<i32> {
        self.dimensions.origin_of(self.position)
    }

    /// The dense Y-major block array.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Block at a local coordinate. Out-of-range coordinates read as air.
    pub fn block_at(&self, local: Point3<i32>) -> BlockId {
        self.dimensions
            .index(local)
            .map_or(BlockType::AIR.id(), |index| self.blocks[index])
    }

    /// Writes a block at a local coordinate.
    ///
    /// Returns whether the stored id changed. Out-of-range coordinates and
    /// writes of the current id are no-ops returning `false`.
    pub fn set_block_at(&mut self, local: Point3<i32>, id: BlockId) -> bool {
        let Some(index) = self.dimensions.index(local) else {
            return false;
        };
        if self.blocks[index] == id {
            return false;
        }
        self.blocks[index] = id;
        true
    }

    /// Number of non-air blocks.
    pub fn non_air_count(&self) -> usize {
        self.iter_blocks().count()
    }

    /// Iterates the non-air blocks in storage order.
    pub fn iter_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    /// Runs the mesher over this chunk without touching the stored mesh.
    ///
    /// `lookup` answers block ids for world coordinates, both inside and
    /// outside this chunk.
    pub fn build_mesh<F>(&self, registry: &BlockRegistry, lookup: F) -> ChunkMesh
    where
        F: Fn(Point3<i32>) -> BlockId,
    {
        mesh_chunk(&self.blocks, self.dimensions, self.origin(), registry, lookup)
    }

    /// Stores freshly built geometry.
    ///
    /// An existing handle has its geometry swapped in place so anything that
    /// already holds the handle sees the new buffers. Otherwise a new handle
    /// is created and flagged as needing attachment.
    ///
    /// Returns `false`, keeping the previous geometry, if the presentation
    /// layer is reading the handle's buffers right now.
    pub fn install_mesh(&mut self, geometry: ChunkMesh) -> bool {
        trace!(
            "chunk {:?}: {} vertices, {} indices",
            self.position,
            geometry.vertex_count(),
            geometry.index_count()
        );
        match &self.mesh {
            Some(handle) => handle.replace_geometry(geometry).is_ok(),
            None => {
                self.mesh = Some(MeshHandle::new(self.position, self.origin(), geometry));
                self.needs_attachment = true;
                true
            }
        }
    }

    /// Rebuilds and stores this chunk's mesh. See [`Chunk::install_mesh`] for the result.
    pub fn rebuild_mesh<F>(&mut self, registry: &BlockRegistry, lookup: F) -> bool
    where
        F: Fn(Point3<i32>) -> BlockId,
    {
        let geometry = self.build_mesh(registry, lookup);
        self.install_mesh(geometry)
    }

    /// The current mesh handle, absent before the first build.
    pub fn mesh(&self) -> Option<&MeshHandle> {
        self.mesh.as_ref()
    }

    /// Whether the mesh was created but not yet handed to the presentation layer.
    pub fn needs_attachment(&self) -> bool {
        self.needs_attachment
    }

    /// Hands out the mesh handle once, clearing the attachment flag.
    pub fn take_attachment(&mut self) -> Option<MeshHandle> {
        if !self.needs_attachment {
            return None;
        }
        self.needs_attachment = false;
        self.mesh.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::terrain::TerrainParams;

    fn small() -> ChunkDimensions {
        ChunkDimensions::new(4, 4, 4).unwrap()
    }

    #[test]
    fn out_of_range_access_is_air_and_ignored() {
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0), small());
        assert_eq!(chunk.block_at(Point3::new(-1, 0, 0)), 0);
        assert_eq!(chunk.block_at(Point3::new(0, 4, 0)), 0);
        assert!(!chunk.set_block_at(Point3::new(4, 0, 0), 3));
        assert!(!chunk.set_block_at(Point3::new(0, 0, -1), 3));
        assert_eq!(chunk.non_air_count(), 0);
    }

    #[test]
    fn writes_report_whether_anything_changed() {
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0), small());
        let p = Point3::new(1, 2, 3);
        assert!(chunk.set_block_at(p, 3));
        assert!(!chunk.set_block_at(p, 3));
        assert_eq!(chunk.block_at(p), 3);
        assert!(chunk.set_block_at(p, 0));
    }

    #[test]
    fn writes_land_at_the_y_major_index() {
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0), small());
        chunk.set_block_at(Point3::new(1, 2, 3), 3);
        let index = 2 * 16 + 3 * 4 + 1;
        assert_eq!(chunk.blocks()[index], 3);
        assert_eq!(chunk.blocks().iter().filter(|id| **id != 0).count(), 1);
    }

    #[test]
    fn generation_matches_the_generator_per_voxel() {
        let dims = small();
        let registry = BlockRegistry::default();
        let generator = TerrainGenerator::new(
            9,
            TerrainParams {
                base_level: -3.0,
                amplitude: 2.0,
                ..Default::default()
            },
        );
        let position = Point3::new(-1, -1, 2);
        let chunk = Chunk::generate(position, dims, &generator, &registry).unwrap();
        assert_eq!(chunk.origin(), Point3::new(-4, -4, 8));
        for y in 0..4 {
            for z in 0..4 {
                for x in 0..4 {
                    let local = Point3::new(x, y, z);
                    assert_eq!(
                        chunk.block_at(local),
                        generator.block_at(dims.to_world(position, local))
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_generated_ids_abort_creation() {
        let generator = TerrainGenerator::new(
            0,
            TerrainParams {
                base_level: 100.0,
                bedrock: 99,
                ..Default::default()
            },
        );
        let result = Chunk::generate(
            Point3::new(0, 0, 0),
            small(),
            &generator,
            &BlockRegistry::default(),
        );
        assert!(matches!(result, Err(VoxelError::UnknownBlock { id: 99, .. })));
    }

    #[test]
    fn first_build_needs_attachment_and_rebuilds_update_in_place() {
        let registry = BlockRegistry::default();
        let mut chunk = Chunk::empty(Point3::new(0, 0, 0), small());
        chunk.set_block_at(Point3::new(1, 1, 1), BlockType::STONE.id());
        assert!(chunk.mesh().is_none());

        assert!(chunk.rebuild_mesh(&registry, |_| 0));
        assert!(chunk.needs_attachment());
        let attached = chunk.take_attachment().unwrap();
        assert!(!chunk.needs_attachment());
        assert!(chunk.take_attachment().is_none());
        assert_eq!(attached.geometry().vertex_count(), 24);

        chunk.set_block_at(Point3::new(1, 1, 1), 0);
        assert!(chunk.rebuild_mesh(&registry, |_| 0));
        assert!(!chunk.needs_attachment());
        assert!(attached.same_mesh(chunk.mesh().unwrap()));
        assert!(attached.geometry().is_empty());
    }

    #[test]
    fn voxels_past_the_coordinate_range_generate_as_air() {
        let dims = ChunkDimensions::new(3, 3, 3).unwrap();
        let generator = TerrainGenerator::new(
            0,
            TerrainParams {
                method: crate::engine_state::voxels::terrain::GenerationMethod::Flat,
                base_level: 1000.0,
                ..Default::default()
            },
        );
        let position = dims.chunk_of(Point3::new(i32::MAX, 0, 0));
        let chunk = Chunk::generate(position, dims, &generator, &BlockRegistry::default()).unwrap();

        assert_eq!(chunk.origin().x, i32::MAX - 1);
        assert_ne!(chunk.block_at(Point3::new(1, 0, 0)), 0);
        assert_eq!(chunk.block_at(Point3::new(2, 0, 0)), 0);

        let beyond = Chunk::generate(Point3::new(0, i32::MAX, 0), dims, &generator, &BlockRegistry::default());
        assert!(matches!(beyond, Err(VoxelError::ChunkOutOfRange { .. })));
    }
}
