//! # Rendering Module
//!
//! The geometry side of the engine: turning chunk data into mesh buffers and
//! addressing the texture atlas. Drawing those buffers is the presentation
//! layer's job; this module stops at the [`meshing::MeshHandle`] boundary.
//!
//! ## Key Components
//!
//! * `meshing` - Face-culling mesher, mesh buffers and shared mesh handles
//! * `texture` - Atlas tile addressing and UV expansion

pub mod meshing;
pub mod texture;
