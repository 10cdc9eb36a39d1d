use std::collections::HashSet;

pub const CELL_LARGE: u32 = 36;
pub const CELL_MEDIUM: u32 = 28;
pub const CELL_SMALL: u32 = 16;

/// One thumbnail cell: normalized grid position plus pixel origin within
/// the layout's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutCell {
    pub grid_x: u32,
    pub grid_y: u32,
    pub px: u32,
    pub py: u32,
}

/// Top-down 2D layout of a piece shape, ready to draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeLayout {
    pub cells: Vec<LayoutCell>,
    pub width: u32,
    pub height: u32,
}

/// Thumbnail cell size for a strip showing `count` pieces. A step function,
/// not continuous scaling, so density reads the same across puzzles.
pub fn cell_size_for(count: usize) -> u32 {
    if count <= 2 {
        CELL_LARGE
    } else if count <= 4 {
        CELL_MEDIUM
    } else {
        CELL_SMALL
    }
}

/// Spacing between thumbnail cells, derived from the cell size.
pub fn cell_gap(cell_size: u32) -> u32 {
    ((cell_size as f64 * 0.12).round() as u32).max(1)
}

/// Project a voxel shape onto the x/y plane for thumbnail rendering.
/// Voxels sharing an (x, y) column collapse to one cell; positions are
/// normalized so the minima land at zero, and y is flipped so larger
/// source-y renders toward the top of a top-left-origin canvas.
pub fn project_shape(shape: &[[i32; 3]], cell_size: u32) -> ShapeLayout {
    if shape.is_empty() {
        return ShapeLayout::default();
    }

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    for v in shape {
        min_x = min_x.min(v[0]);
        min_y = min_y.min(v[1]);
    }

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut norm: Vec<(u32, u32)> = Vec::new();
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for v in shape {
        let nx = (v[0] - min_x) as u32;
        let ny = (v[1] - min_y) as u32;
        if seen.insert((nx, ny)) {
            norm.push((nx, ny));
            max_x = max_x.max(nx);
            max_y = max_y.max(ny);
        }
    }

    let gap = cell_gap(cell_size);
    let step = cell_size + gap;
    let cells = norm
        .into_iter()
        .map(|(nx, ny)| LayoutCell {
            grid_x: nx,
            grid_y: ny,
            px: nx * step,
            py: (max_y - ny) * step,
        })
        .collect();

    ShapeLayout {
        cells,
        width: (max_x + 1) * step - gap,
        height: (max_y + 1) * step - gap,
    }
}
