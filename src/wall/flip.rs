//! Flip orchestration: the wall-wide flipped flag and its scroll trigger.

/// Downward scroll distance (px) past the last trigger point that fires a
/// whole-wall flip.
pub const SCROLL_THRESHOLD_PX: f64 = 200.0;

/// The single owner of the flipped flag, plus the scroll baseline that
/// gates the scroll-triggered flip.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlipState {
    flipped: bool,
    scroll_base: f64,
}

impl FlipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negate the flag; every tile now animates toward the returned angle.
    pub fn toggle(&mut self) -> f64 {
        self.flipped = !self.flipped;
        self.target_angle()
    }

    /// Rotation about the horizontal axis all tiles rest at.
    pub fn target_angle(self) -> f64 {
        if self.flipped { 180.0 } else { 0.0 }
    }

    pub fn is_flipped(self) -> bool {
        self.flipped
    }

    /// Feed an absolute scroll position; `true` when the downward distance
    /// since the last trigger passes [`SCROLL_THRESHOLD_PX`]. The baseline
    /// only moves on a trigger, so scrolling back up neither fires nor
    /// rearms the gate.
    pub fn scrolled_past_threshold(&mut self, y: f64) -> bool {
        if y - self.scroll_base > SCROLL_THRESHOLD_PX {
            self.scroll_base = y;
            true
        } else {
            false
        }
    }
}
