use std::cell::{Cell, RefCell};

use js_sys::Promise;
use wasm_bindgen::JsValue;
use web_sys::Window;

use viewer_core::{PieceColors, PieceShapes};

use crate::utils::{asset_url, response_text};

const COLORS_PATH: &str = "colors/piece_colors.json";
const SHAPES_PATH: &str = "colors/master_pieces.json";

// Process-wide registry caches, filled at most once per page load. The
// lookup functions below stay total before, during and after the load.
thread_local! {
    static COLORS: RefCell<PieceColors> = RefCell::new(PieceColors::default());
    static COLORS_READY: Cell<bool> = const { Cell::new(false) };
    static SHAPES: RefCell<PieceShapes> = RefCell::new(PieceShapes::default());
    static SHAPES_READY: Cell<bool> = const { Cell::new(false) };
}

/// Start the color registry fetch, unless a previous load already resolved.
/// Returning the bare promise lets the caller issue several loads before
/// awaiting any of them.
pub fn begin_colors_load(window: &Window) -> Option<Promise> {
    if COLORS_READY.with(Cell::get) {
        None
    } else {
        Some(window.fetch_with_str(&asset_url(COLORS_PATH)))
    }
}

pub async fn finish_colors_load(fetch: Option<Promise>) -> Result<(), JsValue> {
    let Some(fetch) = fetch else {
        return Ok(());
    };
    let text = response_text(fetch)
        .await
        .map_err(|_| JsValue::from_str("piece colors unavailable"))?;
    let parsed = PieceColors::parse(&text)
        .map_err(|e| JsValue::from_str(&format!("piece colors: {}", e)))?;
    COLORS.with(|cache| cache.replace(parsed));
    COLORS_READY.with(|flag| flag.set(true));
    Ok(())
}

/// Start the shape registry fetch, unless a previous load already resolved.
pub fn begin_shapes_load(window: &Window) -> Option<Promise> {
    if SHAPES_READY.with(Cell::get) {
        None
    } else {
        Some(window.fetch_with_str(&asset_url(SHAPES_PATH)))
    }
}

pub async fn finish_shapes_load(fetch: Option<Promise>) -> Result<(), JsValue> {
    let Some(fetch) = fetch else {
        return Ok(());
    };
    let text = response_text(fetch)
        .await
        .map_err(|_| JsValue::from_str("piece shapes unavailable"))?;
    let parsed = PieceShapes::parse(&text)
        .map_err(|e| JsValue::from_str(&format!("piece shapes: {}", e)))?;
    SHAPES.with(|cache| cache.replace(parsed));
    SHAPES_READY.with(|flag| flag.set(true));
    Ok(())
}

/// Display color for a piece; the default color before load or for ids the
/// registry does not carry.
pub fn piece_color(id: &str) -> String {
    COLORS.with(|cache| cache.borrow().color_of(id).to_string())
}

/// Voxel footprint for a piece; empty before load or for unknown ids.
pub fn piece_shape(id: &str) -> Vec<[i32; 3]> {
    SHAPES.with(|cache| cache.borrow().shape_of(id).to_vec())
}

pub fn catalog_ids() -> Vec<String> {
    SHAPES.with(|cache| cache.borrow().ids().to_vec())
}
