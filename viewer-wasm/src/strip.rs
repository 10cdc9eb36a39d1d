use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use viewer_core::{PuzzleData, ViewMode, cell_size_for, missing_pieces, project_shape};

use crate::registry;
use crate::utils::set_fill_style;

const STRIP_PAD: u32 = 8;
const LABEL_SPACE: u32 = 20;
const LABEL_COLOR: &str = "#646464";

/// Draw the missing-pieces strip onto the `missingPieces` canvas, if the
/// host page has one. Answer mode clears the strip; problem mode shows one
/// thumbnail per missing piece with its id underneath.
pub fn render(document: &Document, data: &PuzzleData, effective: &[String], mode: ViewMode) {
    let Some(element) = document.get_element_by_id("missingPieces") else {
        return;
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    if mode == ViewMode::Answer {
        return;
    }
    let missing = missing_pieces(data, effective, &registry::catalog_ids());
    if missing.is_empty() {
        return;
    }

    let cell = cell_size_for(missing.len());
    let layouts: Vec<_> = missing
        .iter()
        .map(|id| project_shape(&registry::piece_shape(id), cell))
        .collect();

    // One row, thumbnails separated by a cell-sized gutter.
    let gutter = cell;
    let total_w: u32 = layouts.iter().map(|l| l.width.max(cell)).sum::<u32>()
        + gutter * (layouts.len() as u32 - 1)
        + STRIP_PAD * 2;
    let max_h = layouts.iter().map(|l| l.height).max().unwrap_or(0);
    canvas.set_width(total_w);
    canvas.set_height(max_h + LABEL_SPACE + STRIP_PAD * 2);

    ctx.set_font("bold 13px sans-serif");
    ctx.set_text_align("center");
    let mut x = STRIP_PAD;
    for (id, layout) in missing.iter().zip(&layouts) {
        let slot_w = layout.width.max(cell);
        let color = registry::piece_color(id);
        // Bottom-align shapes of different heights.
        let y0 = STRIP_PAD + max_h - layout.height;
        set_fill_style(&ctx, &color);
        for c in &layout.cells {
            ctx.fill_rect(
                (x + c.px) as f64,
                (y0 + c.py) as f64,
                cell as f64,
                cell as f64,
            );
        }
        set_fill_style(&ctx, LABEL_COLOR);
        let _ = ctx.fill_text(
            id,
            (x + slot_w / 2) as f64,
            (STRIP_PAD + max_h + LABEL_SPACE - 6) as f64,
        );
        x += slot_w + gutter;
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
}
