//! Animation - The frame loop
//!
//! Owns the mesh, the rotation and the frame buffer. Every frame rotates
//! the mesh, sorts it back to front and rasterizes it.

use std::io::Write;

use tracing::info;

use crate::config::{Config, ConfigError};
use crate::geometry::{Mesh, RotationMatrix, TorusSampler};
use crate::render::{FrameBuffer, Rasterizer, TermSize, TerminalError, TerminalOutput};

/// Frames between progress log lines
const LOG_INTERVAL: u64 = 1000;

/// Whether a frame count gets a progress line
fn is_progress_frame(frames: u64) -> bool {
    frames % LOG_INTERVAL == 0
}

/// Rotating torus animation
pub struct Animation {
    mesh: Mesh,
    rotation: RotationMatrix,
    rasterizer: Rasterizer,
    frame: FrameBuffer,
    frames: u64,
}

impl Animation {
    /// Build the mesh and frame buffer for a terminal of `size`
    pub fn new(config: &Config, size: TermSize) -> Result<Self, ConfigError> {
        config.validate()?;

        let mesh = TorusSampler::from_config(config).sample();
        let rotation = RotationMatrix::from_angle(config.rotation.theta);
        let rasterizer = Rasterizer::from_config(config)?;
        let frame = FrameBuffer::new(size.rows as usize, size.cols as usize);

        info!(
            points = mesh.len(),
            rows = size.rows,
            cols = size.cols,
            "Animation ready"
        );

        Ok(Self {
            mesh,
            rotation,
            rasterizer,
            frame,
            frames: 0,
        })
    }

    #[allow(dead_code)]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Completed frames
    #[allow(dead_code)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame and return it
    pub fn step(&mut self) -> &FrameBuffer {
        self.mesh.rotate(&self.rotation);
        self.mesh.sort_by_depth();

        self.frame.clear();
        self.rasterizer.rasterize(self.mesh.points(), &mut self.frame);

        self.frames += 1;
        if is_progress_frame(self.frames) {
            info!(frames = self.frames, filled = self.frame.filled(), "Frame");
        }
        &self.frame
    }

    /// Render forever. Only returns on a write error.
    pub fn run<W: Write>(&mut self, out: &mut TerminalOutput<W>) -> Result<(), TerminalError> {
        out.clear_screen()?;
        loop {
            self.step();
            out.write_frame(&self.frame, &self.rasterizer)?;
        }
    }
}
