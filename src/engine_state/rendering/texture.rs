//! Texture atlas addressing.
//!
//! Block faces reference square tiles of one shared atlas image. A tile is
//! identified by its bottom-left corner in normalized atlas coordinates; the
//! tile edge length is a fixed fraction of the atlas supplied at startup.

use serde::{Deserialize, Serialize};

/// Bottom-left corner of an atlas tile, in normalized `[0, 1]` UV space.
pub type TileOrigin = [f32; 2];

/// Default tile edge for a 16x16 tile atlas.
pub const DEFAULT_TILE_SIZE: f32 = 1.0 / 16.0;

/// Atlas layout supplied by the bootstrap config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Tile edge length as a fraction of the atlas.
    pub tile_size: f32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Expands a tile origin to its four UV corners.
///
/// The order is bottom-left, bottom-right, top-left, top-right, matching the
/// corner order of [`BlockSide::corners`](crate::engine_state::voxels::block::block_side::BlockSide::corners).
pub fn expand_tile(origin: TileOrigin, tile_size: f32) -> [[f32; 2]; 4] {
    let [u, v] = origin;
    [
        [u, v],
        [u + tile_size, v],
        [u, v + tile_size],
        [u + tile_size, v + tile_size],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_canonical_order() {
        let corners = expand_tile([0.25, 0.5], 0.25);
        assert_eq!(corners, [[0.25, 0.5], [0.5, 0.5], [0.25, 0.75], [0.5, 0.75]]);
    }
}
