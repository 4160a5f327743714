//! # Voxel World Demo
//!
//! Headless driver for the engine. Loads the chunks around the origin, meshes
//! them, then applies a few rounds of random edits and remeshes after each.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [config.json]
//! ```

use cgmath::Point3;
use log::{error, info};
use voxel_world::{BlockId, BlockType, EngineConfig, EngineState, MeshHandle};

/// Rounds of random edits applied after the initial load
const EDIT_ROUNDS: usize = 4;
/// Edits applied per round
const EDITS_PER_ROUND: usize = 32;

fn main() {
    voxel_world::init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_or_default(path),
        None => EngineConfig::default(),
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &EngineConfig) -> voxel_world::Result<()> {
    let mut engine = EngineState::new(config)?;
    let mut scene: Vec<MeshHandle> = Vec::new();

    engine.load_area(Point3::new(0, 0, 0), config.load_radius)?;
    let rebuilt = engine.tick(|mesh| scene.push(mesh));
    info!(
        "Initial mesh pass: {} chunks rebuilt, {} meshes attached, {} faces",
        rebuilt,
        scene.len(),
        face_total(&scene)
    );

    let dims = config.chunk;
    let span = dims.extent() * (2 * config.load_radius.max(0) + 1);
    let low = Point3::new(
        -config.load_radius.max(0) * dims.width,
        -config.load_radius.max(0) * dims.height,
        -config.load_radius.max(0) * dims.depth,
    );
    let block_count = engine.registry().len();
    let mut rng = fastrand::Rng::with_seed(config.seed as u64);

    for round in 0..EDIT_ROUNDS {
        let mut changed = 0;
        for _ in 0..EDITS_PER_ROUND {
            let position = Point3::new(
                low.x + rng.i32(0..span.x),
                low.y + rng.i32(0..span.y),
                low.z + rng.i32(0..span.z),
            );
            let id = if rng.bool() {
                BlockType::AIR.id()
            } else {
                rng.usize(0..block_count) as BlockId
            };
            if engine.world_mut().set_block_at(position, id) {
                changed += 1;
            }
        }

        let pending = engine.world().dirty_count();
        let rebuilt = engine.tick(|mesh| scene.push(mesh));
        info!(
            "Round {}: {} blocks changed, {} chunks dirty, {} rebuilt, {} faces",
            round + 1,
            changed,
            pending,
            rebuilt,
            face_total(&scene)
        );
    }

    Ok(())
}

fn face_total(scene: &[MeshHandle]) -> usize {
    scene.iter().map(|mesh| mesh.geometry().face_count()).sum()
}
