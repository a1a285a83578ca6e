//! Flip Wall core crate.
//!
//! An interactive tile wall for the browser: a 6x6 grid of picture tiles
//! that spin with a column tilt under the cursor, flip over together on a
//! button click or a downward scroll, and a viewport-filling grid of cells
//! that light up briefly under the pointer. The host page loads the wasm
//! module and calls [`start_wall`] once; DOM construction, event wiring and
//! the animation loop all happen inside the crate.

use wasm_bindgen::prelude::*;

pub mod wall;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build the wall, wire its listeners and start the frame loop.
#[wasm_bindgen]
pub fn start_wall() -> Result<(), JsValue> {
    wall::mount()
}
