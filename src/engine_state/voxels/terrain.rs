//! # Terrain Module
//!
//! Column-based terrain: 2D Perlin noise over `(x, z)` picks a surface height,
//! and each block is classified by its vertical distance from that surface.
//!
//! Generation is a pure function of the seed, the parameters and the world
//! coordinate. Nothing is cached, so chunks can be generated in any order.

use cgmath::Point3;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use super::block::{block_type::BlockType, BlockId};

/// The method used to fill new chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// Noise-driven surface height
    #[default]
    Heightmap,
    /// Surface fixed at `base_level`
    Flat,
    /// Every block is air
    Empty,
}

/// Tuning knobs for terrain generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// How chunks are filled
    pub method: GenerationMethod,
    /// Horizontal feature size; noise is sampled at `coordinate / feature_size`
    pub feature_size: f64,
    /// Surface height where the noise is zero
    pub base_level: f64,
    /// Surface height swing for a noise value of +-1
    pub amplitude: f64,
    /// Thickness of the subsoil band directly under the surface
    pub subsoil_depth: i32,
    /// Block placed exactly at the surface
    pub topsoil: BlockId,
    /// Block filling the subsoil band
    pub subsoil: BlockId,
    /// Block filling everything below the subsoil band
    pub bedrock: BlockId,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            method: GenerationMethod::Heightmap,
            feature_size: 32.0,
            base_level: 64.0,
            amplitude: 12.0,
            subsoil_depth: 3,
            topsoil: BlockType::GRASS.id(),
            subsoil: BlockType::DIRT.id(),
            bedrock: BlockType::STONE.id(),
        }
    }
}

/// Maps world coordinates to block ids for a fixed seed.
#[derive(Clone)]
pub struct TerrainGenerator {
    seed: u32,
    params: TerrainParams,
    perlin: Perlin,
}

impl TerrainGenerator {
    /// Creates a generator for `seed`.
    pub fn new(seed: u32, params: TerrainParams) -> Self {
        Self {
            seed,
            params,
            perlin: Perlin::new(seed),
        }
    }

    /// The seed captured at construction.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The parameters captured at construction.
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Surface height of the column at `(x, z)`.
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        match self.params.method {
            GenerationMethod::Heightmap => {
                let sample = self
                    .perlin
                    .get([
                        x as f64 / self.params.feature_size,
                        z as f64 / self.params.feature_size,
                    ])
                    .clamp(-1.0, 1.0);
                (self.params.base_level + sample * self.params.amplitude).floor() as i32
            }
            GenerationMethod::Flat => self.params.base_level.floor() as i32,
            GenerationMethod::Empty => i32::MIN,
        }
    }

    /// Block id at a world coordinate.
    pub fn block_at(&self, position: Point3<i32>) -> BlockId {
        if self.params.method == GenerationMethod::Empty {
            return BlockType::AIR.id();
        }

        let surface = self.surface_height(position.x, position.z);
        self.classify(position.y, surface)
    }

    /// Classifies a block by its height relative to the column surface.
    fn classify(&self, y: i32, surface: i32) -> BlockId {
        if y > surface {
            BlockType::AIR.id()
        } else if y == surface {
            self.params.topsoil
        } else if y >= surface.saturating_sub(self.params.subsoil_depth) {
            self.params.subsoil
        } else {
            self.params.bedrock
        }
    }
}

impl std::fmt::Debug for TerrainGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainGenerator")
            .field("seed", &self.seed)
            .field("params", &self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_blocks() {
        let a = TerrainGenerator::new(42, TerrainParams::default());
        let b = TerrainGenerator::new(42, TerrainParams::default());
        for x in -40..40 {
            for z in (-40..40).step_by(7) {
                for y in [0, 50, 60, 64, 70, 80] {
                    let position = Point3::new(x, y, z);
                    assert_eq!(a.block_at(position), a.block_at(position));
                    assert_eq!(a.block_at(position), b.block_at(position));
                }
            }
        }
    }

    #[test]
    fn columns_are_layered_from_the_surface_down() {
        let generator = TerrainGenerator::new(7, TerrainParams::default());
        let params = *generator.params();
        for (x, z) in [(0, 0), (13, -5), (-100, 250)] {
            let surface = generator.surface_height(x, z);
            let at = |y| generator.block_at(Point3::new(x, y, z));
            assert_eq!(at(surface + 1), BlockType::AIR.id());
            assert_eq!(at(surface), params.topsoil);
            assert_eq!(at(surface - 1), params.subsoil);
            assert_eq!(at(surface - params.subsoil_depth), params.subsoil);
            assert_eq!(at(surface - params.subsoil_depth - 1), params.bedrock);
        }
    }

    #[test]
    fn surface_stays_within_the_amplitude() {
        let generator = TerrainGenerator::new(3, TerrainParams::default());
        for x in (-500..500).step_by(11) {
            for z in (-500..500).step_by(13) {
                let height = generator.surface_height(x, z);
                assert!((52..=76).contains(&height), "surface {} at {},{}", height, x, z);
            }
        }
    }

    #[test]
    fn flat_and_empty_methods() {
        let flat = TerrainGenerator::new(
            0,
            TerrainParams {
                method: GenerationMethod::Flat,
                base_level: 10.0,
                ..Default::default()
            },
        );
        assert_eq!(flat.block_at(Point3::new(-1000, 10, 1000)), BlockType::GRASS.id());
        assert_eq!(flat.block_at(Point3::new(5, 11, 5)), BlockType::AIR.id());

        let empty = TerrainGenerator::new(
            0,
            TerrainParams {
                method: GenerationMethod::Empty,
                ..Default::default()
            },
        );
        assert_eq!(empty.block_at(Point3::new(0, -1000, 0)), BlockType::AIR.id());
    }
}
