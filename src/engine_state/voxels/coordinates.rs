//! # Coordinates Module
//!
//! Translation between unbounded signed world coordinates and
//! `(chunk coordinate, local coordinate)` pairs.
//!
//! Chunk coordinates use floor division and local coordinates use the
//! non-negative remainder, so negative world coordinates land in the chunk
//! below them: with a height of 256, world `y = -1` is chunk `y = -1`,
//! local `y = 255`.

use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxelError};

/// Moves `position` by `offset`, or `None` if any component leaves the `i32` range.
///
/// Nothing can be loaded past the edge of the coordinate space, so callers
/// treat `None` as unloaded space.
pub fn offset_position(position: Point3<i32>, offset: Vector3<i32>) -> Option<Point3<i32>> {
    Some(Point3::new(
        position.x.checked_add(offset.x)?,
        position.y.checked_add(offset.y)?,
        position.z.checked_add(offset.z)?,
    ))
}

/// Fixed size of every chunk in the world, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkDimensions {
    /// Extent along X
    pub width: i32,
    /// Extent along Y
    pub height: i32,
    /// Extent along Z
    pub depth: i32,
}

impl Default for ChunkDimensions {
    fn default() -> Self {
        Self {
            width: 16,
            height: 256,
            depth: 16,
        }
    }
}

impl ChunkDimensions {
    /// Creates dimensions, rejecting any non-positive extent.
    pub fn new(width: i32, height: i32, depth: i32) -> Result<Self> {
        Self {
            width,
            height,
            depth,
        }
        .validated()
    }

    /// Returns `self` if every extent is strictly positive.
    pub fn validated(self) -> Result<Self> {
        if self.width <= 0 || self.height <= 0 || self.depth <= 0 {
            return Err(VoxelError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        Ok(self)
    }

    /// Extents as a vector.
    pub fn extent(&self) -> Vector3<i32> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Number of blocks in one horizontal layer.
    pub fn layer_size(&self) -> usize {
        self.width as usize * self.depth as usize
    }

    /// Number of blocks in a chunk.
    pub fn volume(&self) -> usize {
        self.layer_size() * self.height as usize
    }

    /// Whether a local coordinate lies inside `[0, dimension)` on every axis.
    pub fn contains(&self, local: Point3<i32>) -> bool {
        (0..self.width).contains(&local.x)
            && (0..self.height).contains(&local.y)
            && (0..self.depth).contains(&local.z)
    }

    /// Y-major array index `y * (width * depth) + z * width + x`, or `None`
    /// when the local coordinate is out of range.
    pub fn index(&self, local: Point3<i32>) -> Option<usize> {
        if !self.contains(local) {
            return None;
        }
        Some(
            local.y as usize * self.layer_size()
                + local.z as usize * self.width as usize
                + local.x as usize,
        )
    }

    /// Chunk coordinate containing a world coordinate.
    pub fn chunk_of(&self, world: Point3<i32>) -> Point3<i32> {
        Point3::new(
            world.x.div_euclid(self.width),
            world.y.div_euclid(self.height),
            world.z.div_euclid(self.depth),
        )
    }

    /// Local coordinate of a world coordinate within its chunk.
    pub fn local_of(&self, world: Point3<i32>) -> Point3<i32> {
        Point3::new(
            world.x.rem_euclid(self.width),
            world.y.rem_euclid(self.height),
            world.z.rem_euclid(self.depth),
        )
    }

    /// Splits a world coordinate into `(chunk, local)`.
    pub fn split(&self, world: Point3<i32>) -> (Point3<i32>, Point3<i32>) {
        (self.chunk_of(world), self.local_of(world))
    }

    /// World coordinate of a chunk's `(0, 0, 0)` block.
    pub fn origin_of(&self, chunk: Point3<i32>) -> Point3<i32> {
        Point3::new(
            chunk.x * self.width,
            chunk.y * self.height,
            chunk.z * self.depth,
        )
    }

    /// Like [`ChunkDimensions::origin_of`], but `None` when the origin does not fit in `i32`.
    pub fn checked_origin_of(&self, chunk: Point3<i32>) -> Option<Point3<i32>> {
        Some(Point3::new(
            chunk.x.checked_mul(self.width)?,
            chunk.y.checked_mul(self.height)?,
            chunk.z.checked_mul(self.depth)?,
        ))
    }

    /// Inverse of [`ChunkDimensions::split`].
    pub fn to_world(&self, chunk: Point3<i32>, local: Point3<i32>) -> Point3<i32> {
        self.origin_of(chunk) + Vector3::new(local.x, local.y, local.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_past_the_coordinate_range_are_none() {
        let edge = Point3::new(i32::MAX, 0, i32::MIN);
        assert_eq!(offset_position(edge, Vector3::new(1, 0, 0)), None);
        assert_eq!(offset_position(edge, Vector3::new(0, 0, -1)), None);
        assert_eq!(
            offset_position(edge, Vector3::new(-1, 1, 1)),
            Some(Point3::new(i32::MAX - 1, 1, i32::MIN + 1))
        );
    }

    #[test]
    fn negative_y_maps_to_the_chunk_below() {
        let dims = ChunkDimensions::default();
        let (chunk, local) = dims.split(Point3::new(0, -1, 0));
        assert_eq!(chunk, Point3::new(0, -1, 0));
        assert_eq!(local, Point3::new(0, 255, 0));
    }

    #[test]
    fn representative_coordinates() {
        let dims = ChunkDimensions::default();
        let cases = [
            (Point3::new(0, 0, 0), Point3::new(0, 0, 0), Point3::new(0, 0, 0)),
            (Point3::new(15, 255, 15), Point3::new(0, 0, 0), Point3::new(15, 255, 15)),
            (Point3::new(16, 256, 16), Point3::new(1, 1, 1), Point3::new(0, 0, 0)),
            (Point3::new(-16, -256, -16), Point3::new(-1, -1, -1), Point3::new(0, 0, 0)),
            (Point3::new(-17, -257, -33), Point3::new(-2, -2, -3), Point3::new(15, 255, 15)),
            (Point3::new(37, 600, -5), Point3::new(2, 2, -1), Point3::new(5, 88, 11)),
        ];
        for (world, chunk, local) in cases {
            assert_eq!(dims.split(world), (chunk, local), "world {:?}", world);
            assert_eq!(dims.to_world(chunk, local), world);
        }
    }

    #[test]
    fn local_coordinates_stay_in_range() {
        let dims = ChunkDimensions::new(4, 8, 2).unwrap();
        for x in -9..9 {
            for y in -17..17 {
                for z in -5..5 {
                    let local = dims.local_of(Point3::new(x, y, z));
                    assert!(dims.contains(local), "{:?} -> {:?}", (x, y, z), local);
                }
            }
        }
    }

    #[test]
    fn index_is_y_major() {
        let dims = ChunkDimensions::new(4, 3, 2).unwrap();
        assert_eq!(dims.index(Point3::new(0, 0, 0)), Some(0));
        assert_eq!(dims.index(Point3::new(1, 0, 0)), Some(1));
        assert_eq!(dims.index(Point3::new(0, 0, 1)), Some(4));
        assert_eq!(dims.index(Point3::new(0, 1, 0)), Some(8));
        assert_eq!(dims.index(Point3::new(3, 2, 1)), Some(23));
        assert_eq!(dims.index(Point3::new(4, 0, 0)), None);
        assert_eq!(dims.index(Point3::new(0, -1, 0)), None);
        assert_eq!(dims.volume(), 24);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(ChunkDimensions::new(16, 0, 16).is_err());
        assert!(ChunkDimensions::new(-1, 16, 16).is_err());
    }
}
