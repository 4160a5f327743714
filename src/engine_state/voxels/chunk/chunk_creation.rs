//! # Chunk Creation Module
//!
//! A builder that fills a chunk one block at a time in storage order
//! (Y, then Z, then X), so the generator never computes an array index.

use cgmath::Point3;

use crate::engine_state::voxels::{
    block::{block_type::BlockType, BlockId},
    coordinates::ChunkDimensions,
};

use super::Chunk;

/// Builds a chunk by pushing every block in Y-major order.
///
/// The builder tracks the local coordinate of the next block so callers can
/// ask where they are without doing the index arithmetic themselves.
pub struct ChunkCreationIterator {
    /// The chunk coordinate of the chunk being created
    position: Point3<i32>,
    /// Fixed chunk extents
    dimensions: ChunkDimensions,
    /// Blocks pushed so far
    blocks: Vec<BlockId>,
    /// Current X position within the chunk
    local_x: i32,
    /// Current Y position within the chunk
    local_y: i32,
    /// Current Z position within the chunk
    local_z: i32,
}

impl ChunkCreationIterator {
    /// Creates a builder for the chunk at `position`.
    pub fn new(position: Point3<i32>, dimensions: ChunkDimensions) -> Self {
        ChunkCreationIterator {
            position,
            dimensions,
            blocks: Vec::with_capacity(dimensions.volume()),
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// Local coordinate the next pushed block will occupy, or `None` once full.
    pub fn next_position(&self) -> Option<Point3<i32>> {
        if self.is_full() {
            return None;
        }
        Some(Point3::new(self.local_x, self.local_y, self.local_z))
    }

    /// Whether every block of the chunk has been pushed.
    pub fn is_full(&self) -> bool {
        self.blocks.len() == self.dimensions.volume()
    }

    /// Appends a block at the current position and advances X, then Z, then Y.
    ///
    /// Pushes past the end of the chunk are ignored.
    pub fn push_block(&mut self, id: BlockId) {
        if self.is_full() {
            return;
        }
        self.blocks.push(id);

        self.local_x += 1;
        if self.local_x == self.dimensions.width {
            self.local_x = 0;
            self.local_z += 1;
            if self.local_z == self.dimensions.depth {
                self.local_z = 0;
                self.local_y += 1;
            }
        }
    }

    /// Finalizes the chunk. Any blocks never pushed are air.
    pub fn return_chunk(mut self) -> Chunk {
        self.blocks
            .resize(self.dimensions.volume(), BlockType::AIR.id());
        Chunk {
            position: self.position,
            dimensions: self.dimensions,
            blocks: self.blocks,
            mesh: None,
            needs_attachment: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_advance_in_storage_order() {
        let dims = ChunkDimensions::new(2, 2, 2).unwrap();
        let mut cci = ChunkCreationIterator::new(Point3::new(0, 0, 0), dims);
        let mut visited = Vec::new();
        while let Some(position) = cci.next_position() {
            assert_eq!(dims.index(position), Some(visited.len()));
            visited.push(position);
            cci.push_block(visited.len() as BlockId);
        }
        assert_eq!(visited[1], Point3::new(1, 0, 0));
        assert_eq!(visited[2], Point3::new(0, 0, 1));
        assert_eq!(visited[4], Point3::new(0, 1, 0));

        let chunk = cci.return_chunk();
        assert_eq!(chunk.blocks(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
