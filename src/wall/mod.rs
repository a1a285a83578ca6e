//! The tile wall: DOM construction, event wiring and the frame loop.
//!
//! The page is three layers. A 6x6 board of picture tiles sits in the
//! middle: each tile has a front and a back face and spins with a column
//! tilt when hovered, and the whole wall flips over on a button click or
//! after 200px of downward scrolling. Beneath it, a viewport-filling grid
//! of cells lights up briefly under the pointer.
//!
//! All mutable state lives in a thread-local cell; event listeners and the
//! frame callback borrow it per event. The pure models live in the
//! submodules and are what native tests drive.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window, window};

pub mod blocks;
pub mod flip;
pub mod grid;
pub mod motion;

use blocks::{BLOCK_SIZE, BlockGrid, Highlights};
use flip::FlipState;
use grid::{COLS, HoverGate, ROWS, TilePos, tilt_for};
use motion::{AxisMotion, flip_track, spin_tracks, stagger_delays};

/// Tile edge length in px. Purely presentational; the model math is
/// independent of it.
const TILE_PX: u32 = 80;

// --- Runtime state ---------------------------------------------------------

/// One tile's DOM handle plus its two rotation axes.
struct TileVisual {
    el: HtmlElement,
    rotate_x: AxisMotion,
    rotate_y: AxisMotion,
}

struct WallState {
    tiles: Vec<TileVisual>,
    hover: HoverGate,
    flip: FlipState,
    block_grid: BlockGrid,
    block_cells: Vec<Element>,
    blocks_el: Element,
    highlights: Highlights,
}

// RefCell::new isn't const on this toolchain; allow Clippy lint until a const initializer is feasible.
thread_local! {
    static WALL_STATE: RefCell<Option<WallState>> = RefCell::new(None);
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// --- DOM construction ------------------------------------------------------

fn lookup_or_create_board(doc: &Document) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id("fw-board") {
        return Ok(el);
    }
    let board = doc.create_element("div")?;
    board.set_id("fw-board");
    board.set_class_name("board");
    board
        .set_attribute(
            "style",
            "display:flex; flex-direction:column; width:max-content; margin:40px auto; \
             perspective:1000px; position:relative; z-index:10;",
        )
        .ok();
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&board)?;
    Ok(board)
}

/// Build the 6x6 tile wall inside `board`, row-major so DOM order matches
/// the model's linear index. The host stylesheet supplies the artwork
/// (`background-image` on `.tile-face`); geometry and slice alignment are
/// set inline here.
fn build_tiles(doc: &Document, board: &Element) -> Result<Vec<TileVisual>, JsValue> {
    let mut tiles = Vec::with_capacity(ROWS * COLS);
    for row in 0..ROWS {
        let row_el = doc.create_element("div")?;
        row_el.set_class_name("row");
        row_el.set_attribute("style", "display:flex;").ok();
        for col in 0..COLS {
            let pos = TilePos { row, col };
            let tile_el: HtmlElement = doc.create_element("div")?.dyn_into()?;
            tile_el.set_class_name("tile");
            tile_el
                .set_attribute(
                    "style",
                    &format!(
                        "width:{TILE_PX}px; height:{TILE_PX}px; position:relative; \
                         transform-style:preserve-3d;"
                    ),
                )
                .ok();
            // 600% background sizing makes the 20% position steps slice the
            // shared image into exact sixths on both axes.
            let (bx, by) = pos.background_percent();
            for (class, extra) in [
                ("tile-face tile-front", ""),
                ("tile-face tile-back", " transform:rotateX(180deg);"),
            ] {
                let face = doc.create_element("div")?;
                face.set_class_name(class);
                face.set_attribute(
                    "style",
                    &format!(
                        "position:absolute; inset:0; backface-visibility:hidden; \
                         background-size:600% 600%; background-position:{bx}% {by}%;{extra}"
                    ),
                )
                .ok();
                tile_el.append_child(&face)?;
            }
            row_el.append_child(&tile_el)?;
            tiles.push(TileVisual {
                el: tile_el,
                rotate_x: AxisMotion::default(),
                rotate_y: AxisMotion::default(),
            });
        }
        board.append_child(&row_el)?;
    }
    Ok(tiles)
}

/// Build the fixed highlight layer sized from the viewport at startup.
fn build_blocks(
    win: &Window,
    doc: &Document,
) -> Result<(Element, BlockGrid, Vec<Element>), JsValue> {
    let viewport_w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let viewport_h = win.inner_height()?.as_f64().unwrap_or(0.0);
    let grid = BlockGrid::new(viewport_w, viewport_h);

    let container = match doc.get_element_by_id("blocks") {
        Some(el) => el,
        None => {
            let el = doc.create_element("div")?;
            el.set_id("blocks");
            el.set_class_name("blocks");
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            el
        }
    };
    // Sized to whole cells, so the flex rows wrap at exactly the column
    // count the hit test assumes even when the viewport is not a multiple
    // of the cell size.
    container
        .set_attribute(
            "style",
            &format!(
                "position:fixed; top:0; left:0; width:{}px; height:{}px; display:flex; \
                 flex-wrap:wrap; pointer-events:none; z-index:1;",
                grid.cols() as f64 * BLOCK_SIZE,
                grid.rows() as f64 * BLOCK_SIZE,
            ),
        )
        .ok();

    let mut cells = Vec::with_capacity(grid.count());
    for index in 0..grid.count() {
        let cell = doc.create_element("div")?;
        cell.set_class_name("block");
        cell.set_attribute("data-index", &index.to_string()).ok();
        cell.set_attribute(
            "style",
            &format!("width:{BLOCK_SIZE}px; height:{BLOCK_SIZE}px;"),
        )
        .ok();
        container.append_child(&cell)?;
        cells.push(cell);
    }
    Ok((container, grid, cells))
}

fn lookup_or_create_flip_button(doc: &Document) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id("flipButton") {
        return Ok(el);
    }
    let button = doc.create_element("button")?;
    button.set_id("flipButton");
    button.set_text_content(Some("Flip"));
    button
        .set_attribute(
            "style",
            "position:fixed; bottom:24px; left:50%; transform:translateX(-50%); \
             padding:10px 22px; font-size:15px; border-radius:8px; border:1px solid #333; \
             background:rgba(0,0,0,0.45); color:#ffd166; cursor:pointer; z-index:30;",
        )
        .ok();
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&button)?;
    Ok(button)
}

// --- Event wiring ----------------------------------------------------------

fn attach_tile_hover(tile_el: &HtmlElement, index: usize) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
        let now = now_ms();
        WALL_STATE.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                if st.hover.try_activate(index, now) {
                    let baseline = st.flip.target_angle();
                    let (x, y) = spin_tracks(now, baseline, tilt_for(index));
                    if let Some(tile) = st.tiles.get_mut(index) {
                        tile.rotate_x.push(x);
                        tile.rotate_y.push(y);
                    }
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    tile_el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Toggle the wall and schedule every tile's flip with a shuffled stagger.
fn flip_all(st: &mut WallState, now: f64) {
    let target = st.flip.toggle();
    let delays = stagger_delays(st.tiles.len(), now as u64);
    for (tile, delay) in st.tiles.iter_mut().zip(delays) {
        tile.rotate_x.push(flip_track(now + delay, target));
    }
}

fn attach_flip_click(button: &Element) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
        let now = now_ms();
        WALL_STATE.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                flip_all(st, now);
            }
        });
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_scroll(win: &Window) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: Event| {
        let Some(win) = window() else { return };
        let y = win.scroll_y().unwrap_or(0.0);
        let now = now_ms();
        WALL_STATE.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                if st.flip.scrolled_past_threshold(y) {
                    flip_all(st, now);
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_mousemove(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let now = now_ms();
        WALL_STATE.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                let rect = st.blocks_el.get_bounding_client_rect();
                let x = evt.client_x() as f64 - rect.left();
                let y = evt.client_y() as f64 - rect.top();
                if let Some(index) = st.block_grid.cell_index(x, y) {
                    if let Some(cell_el) = st.block_cells.get(index) {
                        cell_el.class_list().add_1("highlight").ok();
                        st.highlights.mark(index, now);
                    }
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// --- Frame loop ------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// One animation frame: sample every moving tile and write its transform,
/// then clear highlight cells whose deadline has passed.
fn wall_tick(state: &mut WallState, now: f64) {
    for tile in &mut state.tiles {
        if tile.rotate_x.is_empty() && tile.rotate_y.is_empty() {
            continue;
        }
        let rx = tile.rotate_x.sample(now);
        let ry = tile.rotate_y.sample(now);
        tile.el
            .style()
            .set_property("transform", &format!("rotateX({rx}deg) rotateY({ry}deg)"))
            .ok();
        // Pruning after the write parks each axis's rest pose on the final
        // sampled value, so the next track enters from there.
        tile.rotate_x.prune(now);
        tile.rotate_y.prune(now);
    }

    for index in state.highlights.expire(now) {
        if let Some(cell) = state.block_cells.get(index) {
            cell.class_list().remove_1("highlight").ok();
        }
    }
}

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        WALL_STATE.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                wall_tick(st, ts);
            }
        });
        if let Some(w) = window() {
            let _ = w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

// --- Mount -----------------------------------------------------------------

/// Build the wall DOM, wire all listeners and start the frame loop.
pub fn mount() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let board = lookup_or_create_board(&doc)?;
    let tiles = build_tiles(&doc, &board)?;
    let (blocks_el, block_grid, block_cells) = build_blocks(&win, &doc)?;
    let flip_button = lookup_or_create_flip_button(&doc)?;

    for (index, tile) in tiles.iter().enumerate() {
        attach_tile_hover(&tile.el, index)?;
    }
    attach_flip_click(&flip_button)?;
    attach_scroll(&win)?;
    attach_mousemove(&doc)?;

    let tile_count = tiles.len();
    WALL_STATE.with(|cell| {
        cell.replace(Some(WallState {
            tiles,
            hover: HoverGate::new(tile_count),
            flip: FlipState::new(),
            block_grid,
            block_cells,
            blocks_el,
            highlights: Highlights::new(),
        }))
    });

    start_frame_loop();
    Ok(())
}
