//! # World Module
//!
//! This module provides the `World` struct which owns every loaded chunk and
//! keeps their meshes consistent with their block data.
//!
//! ## Architecture
//!
//! The world is a sparse directory from chunk coordinate to [`Chunk`]. It is
//! the only owner of chunks; chunks never point back at the world. When a
//! chunk is meshed it receives a call-scoped lookup closure that reads blocks
//! through the world, which is how faces on chunk seams get culled.
//!
//! ## Dirty Set
//!
//! Edits never remesh synchronously. They add the owning chunk, and any
//! loaded neighbor sharing the edited block's border, to a dirty set. One
//! [`World::flush_dirty`] per tick rebuilds each dirty chunk once, however
//! many edits it received.
//!
//! ## Chunk Generation
//!
//! Chunks are created lazily by [`World::get_or_create_chunk`] and filled by
//! the [`TerrainGenerator`]. Reads never create chunks; unloaded space reads
//! as air. Creating a chunk also dirties its loaded face neighbors so faces
//! they exposed toward the previously empty space are culled on the next flush.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use cgmath::{Point3, Vector3};
use log::{debug, warn};
use web_time::Instant;

use crate::{
    engine_state::rendering::meshing::MeshHandle,
    error::Result,
};

use super::{
    block::{block_side::BlockSide, block_type::BlockType, BlockId, BlockRegistry},
    chunk::Chunk,
    coordinates::{offset_position, ChunkDimensions},
    terrain::TerrainGenerator,
};

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use cgmath::Point3;
/// use voxel_world::{BlockRegistry, ChunkDimensions, TerrainGenerator, TerrainParams, World};
///
/// let registry = Arc::new(BlockRegistry::default());
/// let generator = TerrainGenerator::new(1, TerrainParams::default());
/// let mut world = World::new(ChunkDimensions::default(), registry, generator).unwrap();
///
/// world.get_or_create_chunk(Point3::new(0, 0, 0)).unwrap();
/// world.set_block_at(Point3::new(3, 200, 3), 3);
///
/// let mut attached = Vec::new();
/// world.flush_dirty(|handle| attached.push(handle));
/// assert_eq!(attached.len(), 1);
/// ```
pub struct World {
    /// Extents shared by every chunk
    dimensions: ChunkDimensions,
    /// Read-only block table
    registry: Arc<BlockRegistry>,
    /// Fills newly created chunks
    generator: TerrainGenerator,
    /// A mapping from chunk coordinates to chunk data
    chunks: HashMap<Point3<i32>, Chunk>,
    /// Chunks whose mesh is stale
    dirty: HashSet<Point3<i32>>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new(
        dimensions: ChunkDimensions,
        registry: Arc<BlockRegistry>,
        generator: TerrainGenerator,
    ) -> Result<Self> {
        Ok(World {
            dimensions: dimensions.validated()?,
            registry,
            generator,
            chunks: HashMap::new(),
            dirty: HashSet::new(),
        })
    }

    /// Extents shared by every chunk.
    pub fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    /// The block table this world validates and meshes against.
    pub fn registry(&self) -> &Arc<BlockRegistry> {
        &self.registry
    }

    /// The terrain generator filling new chunks.
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// Block at a world coordinate. Unloaded chunks read as air.
    pub fn block_at(&self, position: Point3<i32>) -> BlockId {
        let (chunk_position, local) = self.dimensions.split(position);
        self.chunks
            .get(&chunk_position)
            .map_or(BlockType::AIR.id(), |chunk| chunk.block_at(local))
    }

    /// Whether the block at a world coordinate is solid.
    pub fn is_solid_at(&self, position: Point3<i32>) -> bool {
        self.registry.is_solid(self.block_at(position))
    }

    /// The loaded chunk at a chunk coordinate, without creating it.
    pub fn chunk(&self, position: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Whether a chunk is loaded.
    pub fn is_loaded(&self, position: Point3<i32>) -> bool {
        self.chunks.contains_key(&position)
    }

    /// Number of loaded chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the chunk at `position`, generating it on first request.
    ///
    /// A new chunk is fully generated before it is inserted, then marked dirty
    /// together with its loaded face neighbors. If generation fails nothing is
    /// inserted and the dirty set is left untouched. Chunk coordinates whose
    /// origin lies outside the `i32` world are rejected.
    pub fn get_or_create_chunk(&mut self, position: Point3<i32>) -> Result<&Chunk> {
        if self.chunks.contains_key(&position) {
            return Ok(&self.chunks[&position]);
        }

        let chunk = Chunk::generate(position, self.dimensions, &self.generator, &self.registry)?;
        debug!(
            "generated chunk {:?} ({} non-air blocks)",
            position,
            chunk.non_air_count()
        );

        for side in BlockSide::all() {
            let Some(neighbor) = offset_position(position, side.offset()) else {
                continue;
            };
            if self.chunks.contains_key(&neighbor) {
                self.dirty.insert(neighbor);
            }
        }
        self.dirty.insert(position);

        Ok(self.chunks.entry(position).or_insert(chunk))
    }

    /// Loads every chunk in the cube `center +- radius`.
    ///
    /// Chunks past the edge of the `i32` world are skipped. Returns the number
    /// of chunks that were newly created.
    pub fn load_area(&mut self, center: Point3<i32>, radius: i32) -> Result<usize> {
        let radius = radius.max(0);
        let mut created = 0;
        for y in -radius..=radius {
            for z in -radius..=radius {
                for x in -radius..=radius {
                    let Some(position) = offset_position(center, Vector3::new(x, y, z)) else {
                        continue;
                    };
                    if self.dimensions.checked_origin_of(position).is_none() {
                        continue;
                    }
                    if !self.is_loaded(position) {
                        self.get_or_create_chunk(position)?;
                        created += 1;
                    }
                }
            }
        }
        Ok(created)
    }

    /// Writes a block at a world coordinate.
    ///
    /// Writes into unloaded chunks and writes of unregistered ids are logged
    /// and ignored. Returns whether a block actually changed; only then is the
    /// owner dirtied and the edit propagated across chunk borders.
    pub fn set_block_at(&mut self, position: Point3<i32>, id: BlockId) -> bool {
        if !self.registry.contains(id) {
            warn!("ignoring write of unknown block id {} at {:?}", id, position);
            return false;
        }

        let (chunk_position, local) = self.dimensions.split(position);
        let Some(chunk) = self.chunks.get_mut(&chunk_position) else {
            warn!(
                "ignoring write at {:?}: chunk {:?} is not loaded",
                position, chunk_position
            );
            return false;
        };
        if !chunk.set_block_at(local, id) {
            return false;
        }

        self.dirty.insert(chunk_position);
        self.propagate_boundary(chunk_position, local, position);
        true
    }

    /// Dirties every loaded neighbor that shares a border with the edited block.
    fn propagate_boundary(&mut self, owner: Point3<i32>, local: Point3<i32>, position: Point3<i32>) {
        let dims = self.dimensions;
        for side in BlockSide::all() {
            let on_border = match side {
                BlockSide::LEFT => local.x == 0,
                BlockSide::RIGHT => local.x == dims.width - 1,
                BlockSide::BOTTOM => local.y == 0,
                BlockSide::TOP => local.y == dims.height - 1,
                BlockSide::BACK => local.z == 0,
                BlockSide::FRONT => local.z == dims.depth - 1,
            };
            if !on_border {
                continue;
            }

            let Some(beyond) = offset_position(position, side.offset()) else {
                continue;
            };
            let neighbor = dims.chunk_of(beyond);
            if neighbor != owner && self.chunks.contains_key(&neighbor) {
                self.dirty.insert(neighbor);
            }
        }
    }

    /// Adds a loaded chunk to the dirty set. Returns `false` if it is not loaded.
    pub fn mark_dirty(&mut self, position: Point3<i32>) -> bool {
        if !self.chunks.contains_key(&position) {
            return false;
        }
        self.dirty.insert(position);
        true
    }

    /// Whether a chunk is waiting for a remesh.
    pub fn is_dirty(&self, position: Point3<i32>) -> bool {
        self.dirty.contains(&position)
    }

    /// Number of chunks waiting for a remesh.
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// Chunks waiting for a remesh, in no particular order.
    pub fn dirty_chunks(&self) -> impl Iterator<Item = Point3<i32>> + '_ {
        self.dirty.iter().copied()
    }

    /// Rebuilds the mesh of every dirty chunk and empties the dirty set.
    ///
    /// Chunks whose mesh was created by this flush are handed to `attach`
    /// exactly once; later flushes update those meshes in place. Returns the
    /// number of chunks rebuilt. Calling it with nothing dirty is a no-op.
    ///
    /// A chunk whose attached buffers are being read through
    /// [`MeshHandle::geometry`] keeps its old geometry and stays dirty, so the
    /// next flush retries it.
    pub fn flush_dirty<F>(&mut self, mut attach: F) -> usize
    where
        F: FnMut(MeshHandle),
    {
        if self.dirty.is_empty() {
            return 0;
        }

        let started = Instant::now();
        let mut pending: Vec<Point3<i32>> = self.dirty.drain().collect();
        pending.sort_by_key(|position| (position.x, position.y, position.z));

        let mut rebuilt = 0;
        let mut busy = Vec::new();
        for position in pending {
            let Some(chunk) = self.chunks.get(&position) else {
                continue;
            };
            let geometry = chunk.build_mesh(&self.registry, |p| self.block_at(p));

            if let Some(chunk) = self.chunks.get_mut(&position) {
                if !chunk.install_mesh(geometry) {
                    warn!(
                        "mesh of chunk {:?} is borrowed, deferring its rebuild",
                        position
                    );
                    busy.push(position);
                    continue;
                }
                if let Some(handle) = chunk.take_attachment() {
                    attach(handle);
                }
                rebuilt += 1;
            }
        }
        self.dirty.extend(busy);

        debug!(
            "flushed {} dirty chunks in {:?}",
            rebuilt,
            started.elapsed()
        );
        rebuilt
    }

    /// Handles of every chunk mesh built so far, ordered by chunk coordinate.
    pub fn all_loaded_meshes(&self) -> Vec<MeshHandle> {
        let mut meshes: Vec<MeshHandle> = self
            .chunks
            .values()
            .filter_map(|chunk| chunk.mesh().cloned())
            .collect();
        meshes.sort_by_key(|handle| {
            let position = handle.chunk_position();
            (position.x, position.y, position.z)
        });
        meshes
    }
}
