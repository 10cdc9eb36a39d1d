use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use viewer_core::{PuzzleData, ViewMode};

use crate::scene::Camera;

/// Session state stored behind an `Rc<RefCell<_>>` so it can be shared
/// across the WASM callbacks. The view mode is the only value that changes
/// after boot, driven by the toggle's click handler.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub data: PuzzleData,
    pub effective_removed: Vec<String>,
    pub mode: ViewMode,
    pub capture: bool,
    pub camera: Camera,
    pub dragging: bool,
    pub last_pointer: (f64, f64),
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
