//! Torus geometry: point cloud sampling and rigid rotation.
//!
//! - **point**: `Point3` and the `Mesh` that owns the point cloud
//! - **sampler**: rejection-sampled torus surface over an N x N grid
//! - **rotation**: the fixed per-frame rotation matrix
//!
//! # Pipeline
//!
//! ```text
//! TorusSampler ──sample()──> Mesh ──rotate(&RotationMatrix)──> Mesh (next frame)
//! ```

pub mod point;
pub mod rotation;
pub mod sampler;

pub use point::{Mesh, Point3};
pub use rotation::RotationMatrix;
pub use sampler::TorusSampler;

/// Convert `v` from range `[a, b]` into range `[c, d]`
#[inline]
pub fn convert_range(v: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    (v - a) / (b - a) * (d - c) + c
}
