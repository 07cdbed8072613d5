//! FrameBuffer - Per-cell depth and shade for one frame
//!
//! Two parallel row-major arrays of `rows × cols` cells. A cell holds the
//! largest depth plotted into it so far and that point's shade level; cells
//! nothing reached stay blank.

/// Depth of a cell no point has reached
pub const DEPTH_SENTINEL: f32 = -1e9;

/// Depth and shade buffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    rows: usize,
    cols: usize,
    depth: Vec<f32>,
    shades: Vec<Option<u8>>,
}

impl FrameBuffer {
    /// Create a blank buffer; zero rows or cols gives an empty frame
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        Self {
            rows,
            cols,
            depth: vec![DEPTH_SENTINEL; len],
            shades: vec![None; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the frame has no cells
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        self.depth.fill(DEPTH_SENTINEL);
        self.shades.fill(None);
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Depth test: store `shade` if `z` is strictly greater than the cell's
    /// depth. Returns whether the point won. Out-of-range cells are ignored.
    pub fn plot(&mut self, row: usize, col: usize, z: f32, shade: u8) -> bool {
        let Some(idx) = self.index(row, col) else {
            return false;
        };
        if z > self.depth[idx] {
            self.depth[idx] = z;
            self.shades[idx] = Some(shade);
            true
        } else {
            false
        }
    }

    #[allow(dead_code)]
    pub fn shade_at(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).and_then(|idx| self.shades[idx])
    }

    #[allow(dead_code)]
    pub fn depth_at(&self, row: usize, col: usize) -> Option<f32> {
        self.index(row, col).map(|idx| self.depth[idx])
    }

    /// Shades of one row, left to right
    pub fn row(&self, row: usize) -> &[Option<u8>] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.shades[start..start + self.cols]
    }

    /// Number of cells holding a shade
    pub fn filled(&self) -> usize {
        self.shades.iter().filter(|s| s.is_some()).count()
    }
}
