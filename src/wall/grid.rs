//! Tile-grid model: board layout math and the hover cooldown gate.
//!
//! Everything in this module is pure and time-injected so it runs under
//! native `cargo test`; the DOM shell in [`super`] owns the elements these
//! numbers get applied to.

/// Grid height in tiles.
pub const ROWS: usize = 6;
/// Grid width in tiles.
pub const COLS: usize = 6;
/// Minimum quiet time (ms) between two hover activations of the same tile.
pub const COOLDOWN_MS: f64 = 1000.0;

/// One tile position on the wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePos {
    pub row: usize,
    pub col: usize,
}

impl TilePos {
    /// Row-major linear index, the order tiles are created in.
    pub fn index(self) -> usize {
        self.row * COLS + self.col
    }

    /// Background alignment in percent for this tile's faces. Both faces
    /// share the value so front and back show the same slice of the image.
    pub fn background_percent(self) -> (u32, u32) {
        ((self.col * 20) as u32, (self.row * 20) as u32)
    }
}

/// Hover tilt in degrees about the vertical axis for a tile index. The wall
/// is six columns wide, so `index % 6` is the tile's column: outer columns
/// get the strongest pull, inner columns the weakest, left negative and
/// right positive.
pub fn tilt_for(index: usize) -> f64 {
    match index % 6 {
        0 => -40.0,
        5 => 40.0,
        1 => -20.0,
        4 => 20.0,
        2 => -10.0,
        _ => 10.0,
    }
}

/// Per-tile cooldown bookkeeping for hover activations.
///
/// A tile re-animates only when more than [`COOLDOWN_MS`] has passed since
/// its previous activation. Slots start at negative infinity so the first
/// hover over any tile always fires.
#[derive(Clone, Debug)]
pub struct HoverGate {
    last_ms: Vec<f64>,
}

impl HoverGate {
    pub fn new(tile_count: usize) -> Self {
        Self {
            last_ms: vec![f64::NEG_INFINITY; tile_count],
        }
    }

    /// Record an activation at `now` if the cooldown allows one. Returns
    /// whether the tile should animate.
    pub fn try_activate(&mut self, index: usize, now: f64) -> bool {
        let Some(last) = self.last_ms.get_mut(index) else {
            return false;
        };
        if now - *last > COOLDOWN_MS {
            *last = now;
            true
        } else {
            false
        }
    }

    /// Timestamp of the last recorded activation of `index`, negative
    /// infinity when the tile has never fired.
    pub fn last_activation(&self, index: usize) -> Option<f64> {
        self.last_ms.get(index).copied()
    }
}
