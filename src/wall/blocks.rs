//! Cursor highlight layer: a viewport-filling grid of fixed-size cells
//! that light up under the pointer and go dark again on a deadline.

/// Edge length (px) of one highlight cell.
pub const BLOCK_SIZE: f64 = 50.0;
/// How long (ms) a cell stays lit after the pointer touches it.
pub const HIGHLIGHT_MS: f64 = 250.0;

/// Geometry of the highlight grid, fixed at startup from the viewport and
/// not recomputed on resize. Coordinates outside the grid usually resolve
/// to no cell; the only guard is the final index range check, so a point
/// left of the grid on a lower row wraps onto the end of the row above.
#[derive(Clone, Copy, Debug)]
pub struct BlockGrid {
    cols: usize,
    rows: usize,
}

impl BlockGrid {
    /// Carve a viewport into ceil-divided columns and rows of
    /// [`BLOCK_SIZE`] cells, so partial cells at the edges still get one.
    pub fn new(viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            cols: (viewport_w / BLOCK_SIZE).ceil() as usize,
            rows: (viewport_h / BLOCK_SIZE).ceil() as usize,
        }
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    /// Number of cells the layer materializes.
    pub fn count(self) -> usize {
        self.cols * self.rows
    }

    /// Cell under a container-local point, row-major.
    pub fn cell_index(self, local_x: f64, local_y: f64) -> Option<usize> {
        let col = (local_x / BLOCK_SIZE).floor() as i64;
        let row = (local_y / BLOCK_SIZE).floor() as i64;
        let index = row * self.cols as i64 + col;
        if index >= 0 && (index as usize) < self.count() {
            Some(index as usize)
        } else {
            None
        }
    }
}

/// Lit cells with their un-highlight deadlines.
///
/// A cell touched again while already lit gets a second entry, and
/// whichever deadline comes first clears the cell: the same outcome as
/// independent one-shot timers racing each other.
#[derive(Clone, Debug, Default)]
pub struct Highlights {
    lit: Vec<(usize, f64)>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `index` lit up at `now`.
    pub fn mark(&mut self, index: usize, now: f64) {
        self.lit.push((index, now + HIGHLIGHT_MS));
    }

    /// Remove entries whose deadline has passed and report their cells.
    pub fn expire(&mut self, now: f64) -> Vec<usize> {
        let mut cleared = Vec::new();
        self.lit.retain(|&(index, until)| {
            if now >= until {
                cleared.push(index);
                false
            } else {
                true
            }
        });
        cleared
    }

    pub fn is_empty(&self) -> bool {
        self.lit.is_empty()
    }
}
