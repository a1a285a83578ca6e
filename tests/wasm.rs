#![cfg(target_arch = "wasm32")]

// Browser smoke test: mounting the wall must build all three DOM layers.
// Run with `wasm-pack test --headless --chrome`.

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn wall_mounts_and_builds_its_dom() {
    flip_wall::start_wall().expect("mount failed");
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("fw-board").is_some());
    assert!(doc.get_element_by_id("blocks").is_some());
    assert!(doc.get_element_by_id("flipButton").is_some());
}
