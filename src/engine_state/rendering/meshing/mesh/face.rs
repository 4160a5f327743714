use cgmath::Point3;

use crate::engine_state::voxels::block::block_side::BlockSide;

/// Represents a single quad face of a voxel in the mesh.
///
/// A face is defined by four corner points ordered bottom-left, bottom-right,
/// top-left, top-right, in chunk-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corner positions, BL, BR, TL, TR
    pub corners: [[f32; 3]; 4],
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face of the voxel at local `(i, j, k)` on `block_side`.
    ///
    /// Corners are the side's fixed offsets around the voxel center
    /// `(i + 0.5, j + 0.5, k + 0.5)`.
    pub fn new(local: Point3<i32>, block_side: BlockSide) -> Self {
        let center = [
            local.x as f32 + 0.5,
            local.y as f32 + 0.5,
            local.z as f32 + 0.5,
        ];
        let corners = block_side.corners().map(|offset| {
            [
                center[0] + offset[0],
                center[1] + offset[1],
                center[2] + offset[2],
            ]
        });
        Face {
            corners,
            block_side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_face_sits_on_the_upper_plane_of_its_voxel() {
        let face = Face::new(Point3::new(2, 3, 4), BlockSide::TOP);
        for corner in face.corners {
            assert_eq!(corner[1], 4.0);
            assert!((2.0..=3.0).contains(&corner[0]));
            assert!((4.0..=5.0).contains(&corner[2]));
        }
        assert_eq!(face.corners[0], [2.0, 4.0, 4.0]);
        assert_eq!(face.corners[3], [3.0, 4.0, 5.0]);
    }
}
