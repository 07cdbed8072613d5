//! RotationMatrix - Fixed 3x3 rotation applied to the mesh every frame
//!
//! The per-frame matrix is `Rx(θ) · Ry(θ) · Rz(θ)`. Frames compose by
//! repeated application, so after `k` frames the mesh has been transformed
//! by the matrix raised to the `k`-th power. No angle is accumulated and the
//! matrix is never re-orthogonalized.

use std::ops::Mul;

use super::point::Point3;

/// Row-major 3x3 rotation matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    m: [[f32; 3]; 3],
}

impl RotationMatrix {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub const fn from_rows(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> &[[f32; 3]; 3] {
        &self.m
    }

    pub fn about_x(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn about_y(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    pub fn about_z(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Combined per-frame rotation by `theta` about all three axes
    pub fn from_angle(theta: f32) -> Self {
        Self::about_x(theta) * Self::about_y(theta) * Self::about_z(theta)
    }

    /// `self · p`
    #[inline]
    pub fn transform(&self, p: Point3) -> Point3 {
        let m = &self.m;
        Point3 {
            x: p.x * m[0][0] + p.y * m[0][1] + p.z * m[0][2],
            y: p.x * m[1][0] + p.y * m[1][1] + p.z * m[1][2],
            z: p.x * m[2][0] + p.y * m[2][1] + p.z * m[2][2],
        }
    }

    /// Rotate every point in place, keeping order
    pub fn apply(&self, points: &mut [Point3]) {
        for p in points.iter_mut() {
            *p = self.transform(*p);
        }
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for RotationMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0f32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(a: &RotationMatrix, b: &RotationMatrix, tol: f32) {
        for i in 0..3 {
            for j in 0..3 {
                let (x, y) = (a.rows()[i][j], b.rows()[i][j]);
                assert!((x - y).abs() < tol, "[{}][{}]: {} vs {}", i, j, x, y);
            }
        }
    }

    #[test]
    fn test_closed_form() {
        let theta = 0.1f32;
        let (s, c) = theta.sin_cos();
        let expected = RotationMatrix::from_rows([
            [c * c, -c * s, s],
            [s * c + s * s * c, c * c - s * s * s, -s * c],
            [s * s - c * c * s, s * c + c * s * s, c * c],
        ]);
        assert_close(&RotationMatrix::from_angle(theta), &expected, 1e-6);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        assert_close(&RotationMatrix::from_angle(0.0), &RotationMatrix::IDENTITY, 1e-7);
    }

    #[test]
    fn test_apply_matches_power() {
        let step = RotationMatrix::from_angle(0.1);
        let start = vec![Point3::new(0.5, -0.2, 0.1), Point3::new(-0.7, 0.3, 0.0)];

        let mut points = start.clone();
        let mut power = RotationMatrix::IDENTITY;
        for _ in 0..10 {
            step.apply(&mut points);
            power = step * power;
        }

        for (p, q) in points.iter().zip(start.iter()) {
            let expected = power.transform(*q);
            assert!((p.x - expected.x).abs() < 1e-5);
            assert!((p.y - expected.y).abs() < 1e-5);
            assert!((p.z - expected.z).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rows_are_orthonormal() {
        let m = RotationMatrix::from_angle(0.1);
        let r = m.rows();
        for i in 0..3 {
            for j in 0..3 {
                let dot: f32 = (0..3).map(|k| r[i][k] * r[j][k]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-6);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_single_step_preserves_norm(
            x in -0.8f32..0.8,
            y in -0.8f32..0.8,
            z in -0.2f32..0.2,
        ) {
            let p = Point3::new(x, y, z);
            let q = RotationMatrix::from_angle(0.1).transform(p);
            prop_assert!((p.norm_squared() - q.norm_squared()).abs() < 1e-5);
        }

        #[test]
        fn prop_bounded_run_preserves_norm(
            x in -0.8f32..0.8,
            y in -0.8f32..0.8,
            z in -0.2f32..0.2,
            frames in 1usize..100,
        ) {
            let step = RotationMatrix::from_angle(0.1);
            let start = Point3::new(x, y, z);
            let mut points = [start];
            for _ in 0..frames {
                step.apply(&mut points);
            }
            prop_assert!((start.norm_squared() - points[0].norm_squared()).abs() < 1e-4);
        }
    }
}
