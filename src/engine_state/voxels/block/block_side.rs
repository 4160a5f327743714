//! # Block Side Module
//!
//! This module defines the six faces of a voxel block together with the fixed
//! geometry tables the mesher emits for each of them: neighbor offset, normal,
//! corner offsets and triangle winding.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// Triangle indices for the four lateral faces, relative to the face's first vertex.
pub const LATERAL_WINDING: [u32; 6] = [0, 1, 3, 0, 3, 2];

/// Triangle indices for the top and bottom faces, relative to the face's first vertex.
///
/// Mirrors [`LATERAL_WINDING`] because the horizontal corner tables are laid out
/// with their texture axes flipped relative to the view from outside.
pub const VERTICAL_WINDING: [u32; 6] = [0, 3, 1, 0, 2, 3];

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned a unique integer value for compact storage.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// The face name used by block descriptor tables.
    pub fn name(self) -> &'static str {
        match self {
            BlockSide::FRONT => "front",
            BlockSide::BACK => "back",
            BlockSide::BOTTOM => "bottom",
            BlockSide::TOP => "top",
            BlockSide::LEFT => "left",
            BlockSide::RIGHT => "right",
        }
    }

    /// Whether this is one of the four vertical faces around a block.
    pub fn is_lateral(self) -> bool {
        !matches!(self, BlockSide::TOP | BlockSide::BOTTOM)
    }

    /// Offset from a block to the neighbor this face looks at.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// The constant outward normal shared by all four vertices of this face.
    pub fn normal(self) -> [f32; 3] {
        let offset = self.offset();
        [offset.x as f32, offset.y as f32, offset.z as f32]
    }

    /// Corner offsets from the block center, ordered bottom-left, bottom-right,
    /// top-left, top-right to line up with the atlas UV corners.
    pub fn corners(self) -> [[f32; 3]; 4] {
        match self {
            BlockSide::FRONT => [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
            ],
            BlockSide::BACK => [
                [0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
            BlockSide::BOTTOM => [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
            ],
            BlockSide::TOP => [
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
            ],
            BlockSide::LEFT => [
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, -0.5],
                [-0.5, 0.5, 0.5],
            ],
            BlockSide::RIGHT => [
                [0.5, -0.5, 0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
            ],
        }
    }

    /// The winding table for this face.
    pub fn winding(self) -> &'static [u32; 6] {
        if self.is_lateral() {
            &LATERAL_WINDING
        } else {
            &VERTICAL_WINDING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn corner(side: BlockSide, index: u32) -> Vector3<f32> {
        let [x, y, z] = side.corners()[index as usize];
        Vector3::new(x, y, z)
    }

    #[test]
    fn every_triangle_faces_outward() {
        for side in BlockSide::all() {
            let normal = Vector3::from(side.normal());
            for triangle in side.winding().chunks(3) {
                let a = corner(side, triangle[0]);
                let b = corner(side, triangle[1]);
                let c = corner(side, triangle[2]);
                let geometric = (b - a).cross(c - a).normalize();
                assert!(
                    (geometric - normal).magnitude() < 1e-6,
                    "{:?} triangle {:?} faces {:?}",
                    side,
                    triangle,
                    geometric
                );
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            let normal = Vector3::from(side.normal());
            for index in 0..4 {
                assert_eq!(corner(side, index).dot(normal), 0.5, "{:?}", side);
            }
        }
    }

    #[test]
    fn only_top_and_bottom_use_the_vertical_winding() {
        assert_eq!(BlockSide::TOP.winding(), &VERTICAL_WINDING);
        assert_eq!(BlockSide::BOTTOM.winding(), &VERTICAL_WINDING);
        for side in [BlockSide::FRONT, BlockSide::BACK, BlockSide::LEFT, BlockSide::RIGHT] {
            assert!(side.is_lateral());
            assert_eq!(side.winding(), &LATERAL_WINDING);
        }
    }
}
