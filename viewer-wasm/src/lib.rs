use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, Window,
};

use viewer_core::{
    PuzzleData, ViewMode, ViewerParams, effective_removed, hidden_pieces, plan_camera,
    resolve_params, toggle_exposed,
};

mod registry;
mod scene;
mod state;
mod strip;
mod utils;

use crate::state::{STATE, State};
use crate::utils::{asset_url, log, response_text, sync_canvas_size};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    // Parameters are resolved exactly once; later URL edits need a reload.
    let search = window.location().search().unwrap_or_default();
    let params = resolve_params(&search);
    if !params.has_puzzle() {
        set_status(
            &document,
            "No puzzle specified. Use ?id=2026-002 or ?puzzle_id=5x4x3_0010",
        );
        return Ok(());
    }

    set_status(&document, "Loading...");
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = boot_session(window, document.clone(), params).await {
            let msg = err.as_string().unwrap_or_else(|| format!("{:?}", err));
            log(&msg);
            set_status(&document, &format!("Error: {}", msg));
        }
    });
    Ok(())
}

async fn boot_session(
    window: Window,
    document: Document,
    params: ViewerParams,
) -> Result<(), JsValue> {
    // Issue every fetch before awaiting any of them; the session only
    // becomes ready once all three resources have resolved.
    let puzzle_fetch = window.fetch_with_str(&asset_url(&params.puzzle_file));
    let colors_fetch = registry::begin_colors_load(&window);
    let shapes_fetch = registry::begin_shapes_load(&window);

    let text = response_text(puzzle_fetch)
        .await
        .map_err(|_| JsValue::from_str(&format!("Puzzle not found: {}", params.puzzle_label)))?;
    let data: PuzzleData = serde_json::from_str(&text)
        .map_err(|e| JsValue::from_str(&format!("Puzzle {}: {}", params.puzzle_label, e)))?;
    registry::finish_colors_load(colors_fetch).await?;
    registry::finish_shapes_load(shapes_fetch).await?;

    let (canvas, ctx) = init_canvas(&document)?;
    let effective = effective_removed(&data, &params.removed_override);
    let camera = scene::Camera::from_plan(&plan_camera(data.grid, params.angle));
    let state = Rc::new(RefCell::new(State {
        window,
        document: document.clone(),
        canvas,
        ctx,
        data,
        effective_removed: effective,
        mode: ViewMode::Problem,
        capture: params.capture,
        camera,
        dragging: false,
        last_pointer: (0.0, 0.0),
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    clear_status(&document);
    attach_ui(state.clone())?;
    redraw(&mut state.borrow_mut());
    Ok(())
}

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas = document
        .get_element_by_id("viewer")
        .ok_or("missing viewer canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, ctx))
}

fn redraw(s: &mut State) {
    sync_canvas_size(&s.canvas);
    let hidden = hidden_pieces(&s.effective_removed, s.mode);
    scene::render(&s.ctx, &s.canvas, &s.data, &hidden, s.capture, &s.camera);
    strip::render(&s.document, &s.data, &s.effective_removed, s.mode);
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (document, capture, exposed, label) = {
        let s = state.borrow();
        (
            s.document.clone(),
            s.capture,
            toggle_exposed(s.capture, &s.effective_removed),
            s.mode.toggle_label(),
        )
    };

    if let Some(btn) = document.get_element_by_id("toggleAnswer") {
        let btn: HtmlElement = btn.dyn_into()?;
        if exposed {
            btn.set_hidden(false);
            btn.set_inner_text(label);
            let st = state.clone();
            let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let mut s = st.borrow_mut();
                s.mode = s.mode.toggled();
                if let Some(el) = s.document.get_element_by_id("toggleAnswer")
                    && let Ok(el) = el.dyn_into::<HtmlElement>()
                {
                    el.set_inner_text(s.mode.toggle_label());
                }
                redraw(&mut s);
            }));
            btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
            onclick.forget();
        } else {
            // No removed pieces, or a capture run: the control stays out of
            // the page entirely.
            btn.set_hidden(true);
        }
    }

    if !capture {
        attach_orbit(state.clone());

        let st = state.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            redraw(&mut st.borrow_mut());
        }));
        state
            .borrow()
            .window
            .set_onresize(Some(onresize.as_ref().unchecked_ref()));
        onresize.forget();
    }
    Ok(())
}

fn attach_orbit(state: Rc<RefCell<State>>) {
    let canvas = state.borrow().canvas.clone();

    let st = state.clone();
    let onmousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        let mut s = st.borrow_mut();
        s.dragging = true;
        s.last_pointer = (e.client_x() as f64, e.client_y() as f64);
    }));
    canvas.set_onmousedown(Some(onmousedown.as_ref().unchecked_ref()));
    onmousedown.forget();

    let st = state.clone();
    let onmousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        let mut s = st.borrow_mut();
        if !s.dragging {
            return;
        }
        let (lx, ly) = s.last_pointer;
        let x = e.client_x() as f64;
        let y = e.client_y() as f64;
        s.camera.orbit(x - lx, y - ly);
        s.last_pointer = (x, y);
        redraw(&mut s);
    }));
    canvas.set_onmousemove(Some(onmousemove.as_ref().unchecked_ref()));
    onmousemove.forget();

    let st = state.clone();
    let onmouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
        st.borrow_mut().dragging = false;
    }));
    canvas.set_onmouseup(Some(onmouseup.as_ref().unchecked_ref()));
    onmouseup.forget();

    let st = state.clone();
    let onmouseleave = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
        st.borrow_mut().dragging = false;
    }));
    canvas.set_onmouseleave(Some(onmouseleave.as_ref().unchecked_ref()));
    onmouseleave.forget();
}

fn set_status(document: &Document, message: &str) {
    if let Some(el) = document.get_element_by_id("status")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_hidden(false);
        el.set_inner_text(message);
    }
}

fn clear_status(document: &Document) {
    if let Some(el) = document.get_element_by_id("status")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_hidden(true);
    }
}
