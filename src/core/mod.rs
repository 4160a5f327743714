//! # Core Module
//!
//! Small shared-ownership primitives used throughout the engine.
//!
//! ## Key Components
//! - `StResource`: single-threaded reference-counted resource with interior mutability
//!
//! ## Usage
//! ```rust
//! use voxel_world::core::StResource;
//!
//! let counter = StResource::new(0);
//! *counter.get_mut() += 1;
//! assert_eq!(*counter.get(), 1);
//! ```

pub mod st_resource;

pub use st_resource::StResource;
