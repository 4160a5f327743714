//! Face-culling mesher.
//!
//! Every solid voxel emits one quad per face whose neighbor is not solid. The
//! neighbor test has to see across chunk seams, so voxels on the chunk border
//! ask the caller-supplied lookup about blocks in adjacent chunks.
//!
//! The whole chunk is remeshed on every call. There is no incremental update,
//! which is why edits are batched through the world's dirty set.

use cgmath::{EuclideanSpace, Point3};
use log::trace;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockType, BlockId, BlockRegistry},
    coordinates::{offset_position, ChunkDimensions},
};

use super::{face::Face, mesh::ChunkMesh};

/// Builds the surface mesh of one chunk.
///
/// # Arguments
/// * `blocks` - The chunk's Y-major block array
/// * `dimensions` - Chunk extents, `blocks.len()` must equal their volume
/// * `origin` - World coordinate of the chunk's `(0, 0, 0)` block
/// * `registry` - Solidity and texture table
/// * `lookup` - Block id at a world coordinate; ungenerated space must read as air
///
/// # Returns
/// Chunk-local geometry. Faces without a resolvable texture are left out.
pub fn mesh_chunk<F>(
    blocks: &[BlockId],
    dimensions: ChunkDimensions,
    origin: Point3<i32>,
    registry: &BlockRegistry,
    lookup: F,
) -> ChunkMesh
where
    F: Fn(Point3<i32>) -> BlockId,
{
    let mut mesh = ChunkMesh::new();
    let mut untextured = 0usize;

    let block_at = |index: usize| blocks.get(index).copied().unwrap_or_default();

    // In-chunk neighbors come straight from the array; the rest go through `lookup`.
    // Neighbors past the edge of the coordinate space are air.
    let neighbor_of = |local: Point3<i32>, side: BlockSide| -> BlockId {
        let neighbor = local + side.offset();
        match dimensions.index(neighbor) {
            Some(index) => block_at(index),
            None => offset_position(origin, neighbor.to_vec())
                .map_or(BlockType::AIR.id(), &lookup),
        }
    };

    for y in 0..dimensions.height {
        for z in 0..dimensions.depth {
            for x in 0..dimensions.width {
                let local = Point3::new(x, y, z);
                let Some(index) = dimensions.index(local) else {
                    continue;
                };
                let block = block_at(index);
                if !registry.is_solid(block) {
                    continue;
                }

                for side in BlockSide::all() {
                    if registry.is_solid(neighbor_of(local, side)) {
                        continue;
                    }
                    let Some(tile) = registry.face_texture(block, side) else {
                        untextured += 1;
                        continue;
                    };
                    mesh.add_face(&Face::new(local, side), registry.expand_tile(tile));
                }
            }
        }
    }

    if untextured > 0 {
        trace!(
            "chunk at {:?}: skipped {} untextured faces",
            origin,
            untextured
        );
    }

    mesh
}
