use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;

use viewer_core::{
    PieceColors, PieceShapes, PuzzleData, cell_size_for, effective_removed, missing_pieces,
    project_shape, split_piece_list,
};

mod raster;

use raster::{Sheet, color_rgb};

const SHEET_SIZE: i64 = 1080;
const BG: [u8; 3] = [250, 250, 250];
const CARD_BG: [u8; 3] = [255, 255, 255];
const EMPTY_CELL: [u8; 3] = [240, 240, 240];
const SIDE_PAD: i64 = 24;
const CARD_GAP: i64 = 12;
const CARD_PAD: i64 = 14;
const CELL_GAP: i64 = 4;

// Sheet zones, matching the published preview layout: layer cards across
// the upper half, the missing-pieces card below.
const CARDS_TOP: i64 = SHEET_SIZE / 10;
const CARD_H: i64 = SHEET_SIZE * 48 / 100;
const MISSING_TOP: i64 = SHEET_SIZE * 60 / 100;
const MISSING_H: i64 = SHEET_SIZE * 27 / 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: preview <puzzle.json> <output.png> [removed_pieces] [colors.json] [shapes.json]"
        );
        std::process::exit(2);
    }
    let input = &args[1];
    let output = &args[2];
    let removed_arg = args.get(3).cloned().unwrap_or_default();
    let colors_path = args
        .get(4)
        .cloned()
        .unwrap_or_else(|| "public/colors/piece_colors.json".to_string());
    let shapes_path = args
        .get(5)
        .cloned()
        .unwrap_or_else(|| "public/colors/master_pieces.json".to_string());

    let data: PuzzleData = serde_json::from_str(&fs::read_to_string(input)?)?;
    let colors = PieceColors::parse(&fs::read_to_string(&colors_path)?)?;
    let shapes = PieceShapes::parse(&fs::read_to_string(&shapes_path)?)?;

    let override_list = split_piece_list(&removed_arg);
    let effective = effective_removed(&data, &override_list);
    if !override_list.is_empty() && effective != override_list {
        eprintln!("warning: puzzle data embeds removed_pieces; command line list ignored");
    }

    let sheet = render_sheet(&data, &effective, &colors, &shapes);
    sheet.save_png(output)?;
    Ok(())
}

fn render_sheet(
    data: &PuzzleData,
    effective: &[String],
    colors: &PieceColors,
    shapes: &PieceShapes,
) -> Sheet {
    let mut sheet = Sheet::new(SHEET_SIZE as u32, SHEET_SIZE as u32, BG);
    draw_layer_cards(&mut sheet, data, effective, colors);
    draw_missing_card(&mut sheet, data, effective, colors, shapes);
    sheet
}

/// One card per z-layer, each a top-down grid of that layer. Cells of
/// removed pieces render as empty, exactly like the problem view.
fn draw_layer_cards(sheet: &mut Sheet, data: &PuzzleData, effective: &[String], colors: &PieceColors) {
    let hidden: HashSet<&str> = effective.iter().map(String::as_str).collect();
    let mut cell_map: HashMap<(u32, u32, u32), &str> = HashMap::new();
    for cell in &data.cells {
        cell_map.insert((cell.x, cell.y, cell.z), cell.piece.as_str());
    }

    let layers = data.grid.z as i64;
    let cols = data.grid.x as i64;
    let rows = data.grid.y as i64;
    let avail = SHEET_SIZE - SIDE_PAD * 2;
    let card_w = (avail - CARD_GAP * (layers - 1)) / layers;
    let cell = ((card_w - CARD_PAD * 2 - CELL_GAP * (cols - 1)) / cols).max(1);

    for layer in 0..layers {
        let card_x = SIDE_PAD + layer * (card_w + CARD_GAP);
        sheet.fill_rect(card_x, CARDS_TOP, card_w, CARD_H, CARD_BG);

        let grid_w = cols * cell + (cols - 1) * CELL_GAP;
        let grid_h = rows * cell + (rows - 1) * CELL_GAP;
        let gx0 = card_x + (card_w - grid_w) / 2;
        let gy0 = CARDS_TOP + (CARD_H - grid_h) / 2;
        for row in 0..rows {
            for col in 0..cols {
                let cx = gx0 + col * (cell + CELL_GAP);
                // Flip y so the top of the grid renders at the top of the card.
                let cy = gy0 + (rows - 1 - row) * (cell + CELL_GAP);
                let key = (col as u32, row as u32, layer as u32);
                let rgb = match cell_map.get(&key) {
                    Some(piece) if !hidden.contains(piece) => color_rgb(colors.color_of(piece)),
                    _ => EMPTY_CELL,
                };
                sheet.fill_rect(cx, cy, cell, cell, rgb);
            }
        }
    }
}

/// Full-width card of missing-piece thumbnails, centered, bottom-aligned.
fn draw_missing_card(
    sheet: &mut Sheet,
    data: &PuzzleData,
    effective: &[String],
    colors: &PieceColors,
    shapes: &PieceShapes,
) {
    sheet.fill_rect(SIDE_PAD, MISSING_TOP, SHEET_SIZE - SIDE_PAD * 2, MISSING_H, CARD_BG);

    let missing = missing_pieces(data, effective, shapes.ids());
    if missing.is_empty() {
        return;
    }

    let cell = cell_size_for(missing.len());
    let layouts: Vec<_> = missing
        .iter()
        .map(|id| project_shape(shapes.shape_of(id), cell))
        .collect();
    let gutter = cell as i64;
    let total_w: i64 = layouts
        .iter()
        .map(|l| l.width.max(cell) as i64)
        .sum::<i64>()
        + gutter * (layouts.len() as i64 - 1);
    let max_h = layouts.iter().map(|l| l.height).max().unwrap_or(0) as i64;

    let mut x = SIDE_PAD + (SHEET_SIZE - SIDE_PAD * 2 - total_w) / 2;
    let y0 = MISSING_TOP + (MISSING_H - max_h) / 2;
    for (id, layout) in missing.iter().zip(&layouts) {
        let rgb = color_rgb(colors.color_of(id));
        let top = y0 + max_h - layout.height as i64;
        for c in &layout.cells {
            sheet.fill_rect(
                x + c.px as i64,
                top + c.py as i64,
                cell as i64,
                cell as i64,
                rgb,
            );
        }
        x += layout.width.max(cell) as i64 + gutter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::{PuzzleCell, PuzzleGrid};

    fn flat_puzzle() -> PuzzleData {
        PuzzleData {
            puzzle_id: "t".to_string(),
            grid: PuzzleGrid { x: 2, y: 1, z: 1 },
            cells: vec![
                PuzzleCell {
                    x: 0,
                    y: 0,
                    z: 0,
                    piece: "A".to_string(),
                },
                PuzzleCell {
                    x: 1,
                    y: 0,
                    z: 0,
                    piece: "B".to_string(),
                },
            ],
            removed_pieces: Some(vec!["B".to_string()]),
        }
    }

    #[test]
    fn removed_cells_render_empty_in_layer_cards() {
        let data = flat_puzzle();
        let colors = PieceColors::parse(r##"{"A": "#ff0000", "B": "#00ff00"}"##).unwrap();
        let effective = effective_removed(&data, &[]);
        let mut sheet = Sheet::new(SHEET_SIZE as u32, SHEET_SIZE as u32, BG);
        draw_layer_cards(&mut sheet, &data, &effective, &colors);

        let card_w = SHEET_SIZE - SIDE_PAD * 2;
        let cell = (card_w - CARD_PAD * 2 - CELL_GAP) / 2;
        let gx0 = SIDE_PAD + (card_w - (2 * cell + CELL_GAP)) / 2;
        let gy0 = CARDS_TOP + (CARD_H - cell) / 2;
        let center = |x0: i64| ((x0 + cell / 2) as u32, (gy0 + cell / 2) as u32);

        let (ax, ay) = center(gx0);
        assert_eq!(sheet.pixel(ax, ay), [255, 0, 0]);
        let (bx, by) = center(gx0 + cell + CELL_GAP);
        assert_eq!(sheet.pixel(bx, by), EMPTY_CELL);
    }

    #[test]
    fn sheet_renders_deterministically() {
        let data = flat_puzzle();
        let colors = PieceColors::parse(r##"{"A": "#ff0000"}"##).unwrap();
        let shapes = PieceShapes::parse(r#"[{"id": "B", "shape_json": [[0,0,0]]}]"#).unwrap();
        let effective = effective_removed(&data, &[]);
        let a = render_sheet(&data, &effective, &colors, &shapes);
        let b = render_sheet(&data, &effective, &colors, &shapes);
        for (x, y) in [(0u32, 0u32), (540, 540), (100, 700), (1000, 1000)] {
            assert_eq!(a.pixel(x, y), b.pixel(x, y));
        }
    }
}
