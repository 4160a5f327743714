//! Bootstrap configuration.
//!
//! Everything here is read once at startup and never mutated afterwards. Every
//! field has a default, so an empty JSON object is a valid config.

use std::{fs, path::Path};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    engine_state::{
        rendering::texture::AtlasConfig,
        voxels::{
            block::{BlockDescriptor, BlockRegistry},
            coordinates::ChunkDimensions,
            terrain::{TerrainGenerator, TerrainParams},
        },
    },
    error::{Result, VoxelError},
};

/// Engine settings supplied at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// World seed fed to the terrain noise
    #[serde(default)]
    pub seed: u32,
    /// Extents shared by every chunk
    #[serde(default)]
    pub chunk: ChunkDimensions,
    /// How new chunks are filled
    #[serde(default)]
    pub terrain: TerrainParams,
    /// Texture atlas layout
    #[serde(default)]
    pub atlas: AtlasConfig,
    /// Chunk radius loaded around the origin at startup
    #[serde(default = "default_load_radius")]
    pub load_radius: i32,
    /// Custom block table; the built-in table is used when absent
    #[serde(default)]
    pub blocks: Option<Vec<BlockDescriptor>>,
}

fn default_load_radius() -> i32 {
    1
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            chunk: ChunkDimensions::default(),
            terrain: TerrainParams::default(),
            atlas: AtlasConfig::default(),
            load_radius: default_load_radius(),
            blocks: None,
        }
    }
}

impl EngineConfig {
    /// Parses a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| VoxelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Reads a config file, falling back to defaults if it is missing or broken.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}. Using default configuration", e);
                Self::default()
            }
        }
    }

    /// Builds the block registry described by this config.
    pub fn registry(&self) -> Result<BlockRegistry> {
        match &self.blocks {
            Some(descriptors) => BlockRegistry::new(descriptors.clone(), self.atlas.tile_size),
            None => BlockRegistry::new(BlockRegistry::default_descriptors(), self.atlas.tile_size),
        }
    }

    /// Builds the terrain generator described by this config.
    pub fn generator(&self) -> TerrainGenerator {
        TerrainGenerator::new(self.seed, self.terrain)
    }
}
