//! Integration tests for meshing correctness across chunk seams.
//! These tests validate that world-driven remeshing culls faces between chunks
//! and keeps attached mesh handles up to date.

use std::sync::Arc;

use cgmath::Point3;
use voxel_world::*;

/// 8x8x8 chunks with flat ground whose top layer is at y = 3.
fn flat_world() -> World {
    let params = TerrainParams {
        method: GenerationMethod::Flat,
        base_level: 3.0,
        ..Default::default()
    };
    World::new(
        ChunkDimensions::new(8, 8, 8).unwrap(),
        Arc::new(BlockRegistry::default()),
        TerrainGenerator::new(0, params),
    )
    .unwrap()
}

fn faces_of(world: &World, chunk: Point3<i32>) -> usize {
    world
        .chunk(chunk)
        .and_then(|chunk| chunk.mesh())
        .map_or(0, |mesh| mesh.geometry().face_count())
}

#[test]
fn lone_chunk_exposes_faces_toward_unloaded_space() {
    let mut world = flat_world();
    world.get_or_create_chunk(Point3::new(0, 0, 0)).unwrap();
    world.flush_dirty(|_| {});

    // 64 top, 64 bottom, and four 8x4 walls.
    assert_eq!(faces_of(&world, Point3::new(0, 0, 0)), 64 + 64 + 4 * 32);
}

#[test]
fn loading_a_neighbor_culls_the_shared_wall() {
    let mut world = flat_world();
    world.get_or_create_chunk(Point3::new(0, 0, 0)).unwrap();
    world.flush_dirty(|_| {});

    world.get_or_create_chunk(Point3::new(1, 0, 0)).unwrap();
    assert!(world.is_dirty(Point3::new(0, 0, 0)));
    assert_eq!(world.flush_dirty(|_| {}), 2);

    assert_eq!(faces_of(&world, Point3::new(0, 0, 0)), 64 + 64 + 3 * 32);
    assert_eq!(faces_of(&world, Point3::new(1, 0, 0)), 64 + 64 + 3 * 32);
}

#[test]
fn interior_seams_emit_no_faces() {
    let mut world = flat_world();
    assert_eq!(world.load_area(Point3::new(0, 0, 0), 1).unwrap(), 27);
    world.flush_dirty(|_| {});

    assert_eq!(faces_of(&world, Point3::new(0, 0, 0)), 64);
    assert_eq!(faces_of(&world, Point3::new(0, -1, 0)), 64);
    assert_eq!(faces_of(&world, Point3::new(0, 1, 0)), 0);

    let center = world.chunk(Point3::new(0, 0, 0)).unwrap().mesh().unwrap().clone();
    assert!(center
        .geometry()
        .normals
        .iter()
        .all(|normal| *normal == BlockSide::TOP.normal()));
}

#[test]
fn digging_through_a_seam_redraws_both_sides() {
    let mut world = flat_world();
    world.load_area(Point3::new(0, 0, 0), 1).unwrap();

    let mut attached = Vec::new();
    world.flush_dirty(|mesh| attached.push(mesh));
    assert_eq!(attached.len(), 27);

    // Remove the block on the -X border of the center chunk, just below the surface.
    assert!(world.set_block_at(Point3::new(0, 2, 4), BlockType::AIR.id()));
    assert_eq!(world.dirty_count(), 2);
    assert_eq!(world.flush_dirty(|mesh| attached.push(mesh)), 2);
    assert_eq!(attached.len(), 27);

    // The center gains the floor, ceiling and three walls of the hole. The
    // west chunk gains the fourth wall next to its outer wall facing unloaded space.
    let center = attached
        .iter()
        .find(|mesh| mesh.chunk_position() == Point3::new(0, 0, 0))
        .unwrap();
    assert_eq!(center.geometry().face_count(), 64 + 5);
    let west = attached
        .iter()
        .find(|mesh| mesh.chunk_position() == Point3::new(-1, 0, 0))
        .unwrap();
    assert_eq!(west.geometry().face_count(), 64 + 32 + 1);
    assert_eq!(west.origin(), Point3::new(-8, 0, 0));
}

#[test]
fn rebuilds_keep_the_same_handle() {
    let mut world = flat_world();
    world.get_or_create_chunk(Point3::new(0, 0, 0)).unwrap();

    let mut attached = Vec::new();
    world.flush_dirty(|mesh| attached.push(mesh));
    let before = attached[0].geometry().clone();

    world.set_block_at(Point3::new(4, 4, 4), BlockType::STONE.id());
    world.flush_dirty(|mesh| attached.push(mesh));

    assert_eq!(attached.len(), 1);
    let current = world.chunk(Point3::new(0, 0, 0)).unwrap().mesh().unwrap();
    assert!(current.same_mesh(&attached[0]));
    assert_ne!(*attached[0].geometry(), before);
    assert_eq!(attached[0].geometry().face_count(), before.face_count() + 4);
}

#[test]
fn buffers_stay_parallel_and_indices_in_range() {
    let mut world = flat_world();
    world.load_area(Point3::new(0, 0, 0), 1).unwrap();
    world.set_block_at(Point3::new(7, 4, 7), BlockType::WOOD.id());
    world.flush_dirty(|_| {});

    for mesh in world.all_loaded_meshes() {
        let geometry = mesh.geometry();
        assert_eq!(geometry.positions.len(), geometry.normals.len());
        assert_eq!(geometry.positions.len(), geometry.uvs.len());
        assert_eq!(geometry.indices.len() * 2, geometry.positions.len() * 3);
        assert!(geometry
            .indices
            .iter()
            .all(|&index| (index as usize) < geometry.positions.len()));
        assert_eq!(geometry.index_bytes().len(), geometry.indices.len() * 4);
    }
}
