//! Depth-buffered rasterization and terminal output.
//!
//! This module provides:
//!
//! - **depth**: back-to-front ordering of the mesh
//! - **palette**: shading glyphs indexed by depth level
//! - **framebuffer**: per-cell depth and shade arrays
//! - **rasterizer**: projection, depth test and glyph selection
//! - **terminal**: crossterm output and terminal size query
//!
//! # Frame Flow
//!
//! ```text
//! Mesh (sorted) ──Rasterizer::rasterize──> FrameBuffer ──TerminalOutput::write_frame──> stdout
//! ```

pub mod depth;
pub mod framebuffer;
pub mod palette;
pub mod rasterizer;
pub mod terminal;

pub use framebuffer::FrameBuffer;
pub use rasterizer::Rasterizer;
pub use terminal::{terminal_size, TermSize, TerminalError, TerminalOutput};
