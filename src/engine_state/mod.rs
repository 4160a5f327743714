//! # Engine State Module
//!
//! The core engine module that owns the voxel world and drives it once per frame.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `rendering` - Chunk meshing, mesh handles and atlas addressing
//! * `voxels` - Handles voxel data, chunks, and world generation
//!
//! ## Architecture
//!
//! `EngineState` is built from an [`EngineConfig`] at startup. It shares one
//! read-only [`BlockRegistry`] with the world and exposes the two things a
//! frame loop needs: loading chunks around a point and flushing pending
//! remeshes into the presentation layer.
//!
//! ## Frame Loop
//!
//! 1. Apply player edits through [`EngineState::world_mut`]
//! 2. Call [`EngineState::tick`] once; new meshes are passed to the attach sink
//! 3. Draw every attached handle; rebuilt chunks show their new geometry in place

use std::sync::Arc;

use cgmath::Point3;
use log::info;
use web_time::Instant;

use voxels::{block::BlockRegistry, world::World};

use crate::{config::EngineConfig, error::Result};

use rendering::meshing::MeshHandle;

pub mod rendering;
pub mod voxels;

/// The main state container for the voxel engine
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{EngineConfig, EngineState};
///
/// let mut engine = EngineState::new(&EngineConfig::default()).unwrap();
/// engine.load_area(Point3::new(0, 0, 0), 0).unwrap();
///
/// // Main game loop
/// let mut scene = Vec::new();
/// let rebuilt = engine.tick(|mesh| scene.push(mesh));
/// assert_eq!(rebuilt, 1);
/// assert_eq!(scene.len(), 1);
/// ```
pub struct EngineState {
    /// Block table shared with the world
    registry: Arc<BlockRegistry>,
    /// The voxel world containing all chunk data
    world: World,
}

impl EngineState {
    /// Creates a new engine state from a bootstrap config.
    ///
    /// Builds the registry (custom or built-in), logs any face that will never
    /// be drawn because it has no texture, and creates an empty world.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let started = Instant::now();

        let registry = Arc::new(config.registry()?);
        let missing = registry.report_missing_textures();
        let world = World::new(config.chunk, registry.clone(), config.generator())?;

        info!(
            "Engine initialized in {:?}: {} block types ({} untextured faces), seed {}, chunks {}x{}x{}",
            started.elapsed(),
            registry.len(),
            missing,
            config.seed,
            config.chunk.width,
            config.chunk.height,
            config.chunk.depth
        );

        Ok(Self { registry, world })
    }

    /// Loads every chunk within `radius` of `center` (both in chunk coordinates).
    ///
    /// # Returns
    /// The number of chunks that were newly generated
    pub fn load_area(&mut self, center: Point3<i32>, radius: i32) -> Result<usize> {
        let created = self.world.load_area(center, radius)?;
        if created > 0 {
            info!(
                "Loaded {} chunks around {:?} ({} total)",
                created,
                center,
                self.world.chunk_count()
            );
        }
        Ok(created)
    }

    /// Runs one frame: rebuilds every dirty chunk and hands new meshes to `attach`.
    ///
    /// # Returns
    /// The number of chunks rebuilt this frame
    pub fn tick<F>(&mut self, attach: F) -> usize
    where
        F: FnMut(MeshHandle),
    {
        self.world.flush_dirty(attach)
    }

    /// Whether the block at a world coordinate blocks movement.
    pub fn is_solid_at(&self, position: Point3<i32>) -> bool {
        self.world.is_solid_at(position)
    }

    /// The voxel world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for edits between ticks.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The shared block table.
    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.registry
    }
}
