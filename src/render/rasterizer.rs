//! Rasterizer - Projects the mesh into terminal cells
//!
//! Orthographic projection: x spans `[0, cols-1]`, y spans `[0, rows-1]`,
//! z only decides visibility and shade. Terminal cell aspect is not
//! corrected.

use super::framebuffer::FrameBuffer;
use super::palette::Palette;
use crate::config::{Config, ConfigError};
use crate::geometry::{convert_range, Point3};

/// Glyph written for cells with no point
pub const BLANK: &str = " ";

/// Point-cloud rasterizer
#[derive(Debug, Clone)]
pub struct Rasterizer {
    /// Half-width of the object-space domain (R + r)
    extent: f32,
    palette: Palette,
}

impl Rasterizer {
    pub fn new(extent: f32, palette: Palette) -> Self {
        Self { extent, palette }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.extent(),
            Palette::from_config(&config.shading)?,
        ))
    }

    /// Cell `(row, col)` a point lands in, or `None` off screen
    pub fn project(&self, p: &Point3, rows: usize, cols: usize) -> Option<(usize, usize)> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let sx = convert_range(p.x, -self.extent, self.extent, 0.0, cols as f32 - 1.0);
        let sy = convert_range(p.y, -self.extent, self.extent, 0.0, rows as f32 - 1.0);

        let col = sx.floor();
        let row = sy.floor();
        // NaN fails both comparisons
        if !(col >= 0.0 && col < cols as f32 && row >= 0.0 && row < rows as f32) {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Shade level for a depth: `[-extent, extent]` maps onto 0..=3
    pub fn shade_for(&self, z: f32) -> u8 {
        let norm = (z + self.extent) / (2.0 * self.extent);
        let level = (norm * Palette::LEVELS as f32).floor();
        level.clamp(0.0, (Palette::LEVELS - 1) as f32) as u8
    }

    /// Draw points into the frame in the given order
    pub fn rasterize(&self, points: &[Point3], frame: &mut FrameBuffer) {
        if frame.is_empty() {
            return;
        }
        let (rows, cols) = (frame.rows(), frame.cols());

        for p in points {
            if let Some((row, col)) = self.project(p, rows, cols) {
                frame.plot(row, col, p.z, self.shade_for(p.z));
            }
        }
    }

    /// Text of one frame row, one glyph per cell
    pub fn row_text(&self, frame: &FrameBuffer, row: usize) -> String {
        frame
            .row(row)
            .iter()
            .map(|cell| match cell {
                Some(shade) => self.palette.glyph(*shade),
                None => BLANK,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShadeOrder;
    use proptest::prelude::*;

    const EXTENT: f32 = 0.8;

    fn rasterizer() -> Rasterizer {
        Rasterizer::new(EXTENT, Palette::default())
    }

    #[test]
    fn test_empty_mesh_is_blank() {
        let r = rasterizer();
        let mut fb = FrameBuffer::new(5, 7);
        r.rasterize(&[], &mut fb);
        assert_eq!(fb.filled(), 0);
        for row in 0..5 {
            assert_eq!(r.row_text(&fb, row), " ".repeat(7));
        }
    }

    #[test]
    fn test_corner_point_is_densest() {
        let r = rasterizer();
        let mut fb = FrameBuffer::new(4, 6);
        r.rasterize(&[Point3::new(-EXTENT, -EXTENT, EXTENT)], &mut fb);

        assert_eq!(fb.shade_at(0, 0), Some(3));
        assert_eq!(fb.filled(), 1);
        assert_eq!(r.row_text(&fb, 0), "█     ");
        assert_eq!(r.row_text(&fb, 1), "      ");
    }

    #[test]
    fn test_near_dark_corner() {
        let r = Rasterizer::new(
            EXTENT,
            Palette::new(["░", "▒", "▓", "█"].map(String::from), ShadeOrder::NearDark),
        );
        let mut fb = FrameBuffer::new(2, 2);
        r.rasterize(&[Point3::new(-EXTENT, -EXTENT, EXTENT)], &mut fb);
        assert_eq!(r.row_text(&fb, 0), "░ ");
    }

    #[test]
    fn test_projection_bounds() {
        let r = rasterizer();
        assert_eq!(r.project(&Point3::new(-EXTENT, -EXTENT, 0.0), 24, 80), Some((0, 0)));
        assert_eq!(r.project(&Point3::new(EXTENT, EXTENT, 0.0), 24, 80), Some((23, 79)));
        assert_eq!(r.project(&Point3::new(0.0, 0.0, 0.0), 24, 80), Some((11, 39)));
        // Off screen
        assert_eq!(r.project(&Point3::new(-0.9, 0.0, 0.0), 24, 80), None);
        assert_eq!(r.project(&Point3::new(0.0, 0.9, 0.0), 24, 80), None);
        assert_eq!(r.project(&Point3::new(f32::NAN, 0.0, 0.0), 24, 80), None);
        // Empty terminal
        assert_eq!(r.project(&Point3::new(0.0, 0.0, 0.0), 0, 80), None);
        assert_eq!(r.project(&Point3::new(0.0, 0.0, 0.0), 24, 0), None);
    }

    #[test]
    fn test_single_cell_terminal() {
        let r = rasterizer();
        let mut fb = FrameBuffer::new(1, 1);
        r.rasterize(
            &[Point3::new(0.3, -0.3, -0.1), Point3::new(-0.7, 0.7, 0.2)],
            &mut fb,
        );
        assert_eq!(fb.depth_at(0, 0), Some(0.2));
    }

    #[test]
    fn test_shade_levels() {
        let r = rasterizer();
        assert_eq!(r.shade_for(-EXTENT), 0);
        assert_eq!(r.shade_for(-0.5), 0);
        assert_eq!(r.shade_for(-0.3), 1);
        assert_eq!(r.shade_for(0.1), 2);
        assert_eq!(r.shade_for(0.5), 3);
        assert_eq!(r.shade_for(EXTENT), 3);
        // Clamped outside the domain
        assert_eq!(r.shade_for(-5.0), 0);
        assert_eq!(r.shade_for(5.0), 3);
    }

    #[test]
    fn test_zero_sized_frames() {
        let r = rasterizer();
        let points = [Point3::new(0.0, 0.0, 0.5)];
        for (rows, cols) in [(0, 0), (0, 10), (10, 0)] {
            let mut fb = FrameBuffer::new(rows, cols);
            r.rasterize(&points, &mut fb);
            assert_eq!(fb.filled(), 0);
        }
    }

    proptest! {
        #[test]
        fn prop_larger_depth_wins_in_any_order(
            x in -0.8f32..0.8,
            y in -0.8f32..0.8,
            z1 in -0.8f32..0.8,
            dz in 0.001f32..0.8,
        ) {
            let r = rasterizer();
            let near = Point3::new(x, y, z1 + dz);
            let far = Point3::new(x, y, z1);

            let mut forward = FrameBuffer::new(24, 80);
            r.rasterize(&[far, near], &mut forward);
            let mut backward = FrameBuffer::new(24, 80);
            r.rasterize(&[near, far], &mut backward);

            let (row, col) = r.project(&near, 24, 80).unwrap();
            prop_assert_eq!(forward.depth_at(row, col), Some(near.z));
            prop_assert_eq!(backward.depth_at(row, col), Some(near.z));
            prop_assert_eq!(forward.shade_at(row, col), Some(r.shade_for(near.z)));
            prop_assert_eq!(backward.shade_at(row, col), Some(r.shade_for(near.z)));
        }
    }
}
