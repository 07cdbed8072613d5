//! TorusSampler - Builds the point cloud for a torus surface
//!
//! An N x N grid covers `[-(R+r), R+r]` in x and y. Each grid point inside
//! the torus footprint yields two points, one on the near sheet (+z) and one
//! on the far sheet (-z). Points outside the footprint are skipped.

use super::convert_range;
use super::point::{Mesh, Point3};
use crate::config::Config;

/// `inner` values this close to zero count as exactly on the footprint edge
const BOUNDARY_EPSILON: f32 = 1e-6;

/// Torus surface sampler
#[derive(Debug, Clone, Copy)]
pub struct TorusSampler {
    /// Major radius (R)
    major: f32,
    /// Minor radius (r)
    minor: f32,
    /// Samples per axis (N)
    grid: u32,
}

impl TorusSampler {
    pub fn new(major: f32, minor: f32, grid: u32) -> Self {
        Self { major, minor, grid }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.torus.major_radius,
            config.torus.minor_radius,
            config.torus.grid_size,
        )
    }

    /// Half-width of the sampled domain (R + r)
    pub fn extent(&self) -> f32 {
        self.major + self.minor
    }

    /// Map grid index `i` in `[0, N)` onto `[-(R+r), R+r)`
    fn grid_value(&self, i: u32) -> f32 {
        let extent = self.extent();
        convert_range(i as f32, 0.0, self.grid as f32, -extent, extent)
    }

    /// Positive surface height above `(x, y)`, or `None` outside the footprint.
    /// Points on the edge get height 0.
    pub fn surface_height(&self, x: f32, y: f32) -> Option<f32> {
        let ring = (x * x + y * y).sqrt() - self.major;
        let inner = self.minor * self.minor - ring * ring;
        if inner.abs() <= BOUNDARY_EPSILON {
            return Some(0.0);
        }
        if inner < 0.0 {
            return None;
        }
        Some(inner.sqrt())
    }

    /// Sample the whole grid
    pub fn sample(&self) -> Mesh {
        let mut points = Vec::new();

        for i in 0..self.grid {
            let x = self.grid_value(i);
            for j in 0..self.grid {
                let y = self.grid_value(j);
                if let Some(z) = self.surface_height(x, y) {
                    points.push(Point3::new(x, y, z));
                    points.push(Point3::new(x, y, -z));
                }
            }
        }

        Mesh::new(points)
    }
}
