//! Point3 - A single surface sample, and the Mesh holding all of them

use super::rotation::RotationMatrix;
use crate::render::depth;

/// A point in torus object space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance from the origin
    #[allow(dead_code)]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

/// The point cloud, fixed in size for the whole run
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    points: Vec<Point3>,
}

impl Mesh {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Rotate every point in place
    pub fn rotate(&mut self, rotation: &RotationMatrix) {
        rotation.apply(&mut self.points);
    }

    /// Reorder points back to front (ascending z)
    pub fn sort_by_depth(&mut self) {
        depth::sort_back_to_front(&mut self.points);
    }
}

impl From<Vec<Point3>> for Mesh {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}
