//! # Chunk Iteration Module
//!
//! Iterates the non-air blocks of a chunk in storage order, decoding each
//! array index back to its local coordinate.

use cgmath::Point3;

use crate::engine_state::voxels::block::{block_type::BlockType, BlockId};

use super::Chunk;

/// An iterator over all non-air blocks in a chunk.
///
/// Yields `(local position, block id)` in the order outer Y, then Z, then X.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next array index to inspect
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` for the given chunk.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }

    fn position_of(&self, offset: usize) -> Point3<i32> {
        let dims = self.chunk_ref.dimensions;
        let layer = dims.layer_size();
        let width = dims.width as usize;
        let in_layer = offset % layer;
        Point3::new(
            (in_layer % width) as i32,
            (offset / layer) as i32,
            (in_layer / width) as i32,
        )
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<i32>, BlockId);

    fn next(&mut self) -> Option<Self::Item> {
        let blocks = &self.chunk_ref.blocks;
        while self.current_offset < blocks.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let id = blocks[offset];
            if id != BlockType::AIR.id() {
                return Some((self.position_of(offset), id));
            }
        }
        None
    }
}
