//! Terminal output using crossterm
//!
//! Writes frames to any `Write` sink. Frames are drawn from the home
//! position inside a synchronized update instead of clearing the screen, so
//! the previous frame is overwritten in place without flicker.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use thiserror::Error;

use super::framebuffer::FrameBuffer;
use super::rasterizer::Rasterizer;

/// Terminal errors
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Failed to query terminal size: {0}")]
    Size(#[source] io::Error),

    #[error("Failed to write to terminal: {0}")]
    Write(#[from] io::Error),
}

/// Terminal dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl TermSize {
    #[allow(dead_code)]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Query the size of the controlling terminal
pub fn terminal_size() -> Result<TermSize, TerminalError> {
    let (cols, rows) = terminal::size().map_err(TerminalError::Size)?;
    Ok(TermSize { rows, cols })
}

/// Clamp a cell coordinate to what the cursor commands accept
fn cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Frame writer
pub struct TerminalOutput<W: Write> {
    out: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[allow(dead_code)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Clear the whole screen and home the cursor
    pub fn clear_screen(&mut self) -> Result<(), TerminalError> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    /// Move the cursor to a zero-based cell
    pub fn move_to(&mut self, row: usize, col: usize) -> Result<(), TerminalError> {
        queue!(self.out, MoveTo(cell(col), cell(row)))?;
        Ok(())
    }

    /// Move the cursor to the top-left cell
    pub fn home(&mut self) -> Result<(), TerminalError> {
        self.move_to(0, 0)
    }

    /// Write text starting at a cell
    #[allow(dead_code)]
    pub fn print_at(&mut self, row: usize, col: usize, text: &str) -> Result<(), TerminalError> {
        self.move_to(row, col)?;
        queue!(self.out, Print(text))?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a whole frame in one pass
    pub fn write_frame(
        &mut self,
        frame: &FrameBuffer,
        rasterizer: &Rasterizer,
    ) -> Result<(), TerminalError> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        self.home()?;

        for row in 0..frame.rows() {
            // Row starts are addressed directly; a newline after the last
            // row would scroll the screen.
            if row > 0 {
                self.move_to(row, 0)?;
            }
            queue!(self.out, Print(rasterizer.row_text(frame, row)))?;
        }

        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }
}
