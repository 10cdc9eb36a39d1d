use viewer_core::{
    CaptureAngle, DEFAULT_COLOR, PieceColors, PieceShapes, PuzzleGrid, cell_gap, cell_size_for,
    plan_camera, project_shape,
};

#[test]
fn camera_distance_tracks_the_largest_axis() {
    let grid = PuzzleGrid { x: 5, y: 4, z: 3 };
    let plan = plan_camera(grid, CaptureAngle::Y);
    assert_eq!(plan.position, [-9.0, 9.0, -9.0]);
    assert_eq!(plan.fov_deg, 40.0);
}

#[test]
fn default_and_x_angles_share_the_positive_octant() {
    let grid = PuzzleGrid { x: 5, y: 4, z: 3 };
    assert_eq!(plan_camera(grid, CaptureAngle::X).position, [9.0, 9.0, 9.0]);
    assert_eq!(
        plan_camera(grid, CaptureAngle::Unspecified).position,
        [9.0, 9.0, 9.0]
    );
}

#[test]
fn camera_planning_is_deterministic() {
    let grid = PuzzleGrid { x: 2, y: 7, z: 2 };
    assert_eq!(
        plan_camera(grid, CaptureAngle::Y),
        plan_camera(grid, CaptureAngle::Y)
    );
}

#[test]
fn stacked_voxels_collapse_to_one_thumbnail_cell() {
    let layout = project_shape(&[[0, 0, 0], [0, 0, 1]], 16);
    assert_eq!(layout.cells.len(), 1);
    assert_eq!(layout.cells[0].px, 0);
    assert_eq!(layout.cells[0].py, 0);
    assert_eq!(layout.width, 16);
    assert_eq!(layout.height, 16);
}

#[test]
fn projection_normalizes_and_flips_y() {
    // L-shaped shape away from the origin: columns at (2,5) and (2,6), plus (3,5).
    let cell = 16;
    let gap = cell_gap(cell);
    let step = cell + gap;
    let layout = project_shape(&[[2, 5, 0], [2, 6, 0], [3, 5, 0]], cell);
    assert_eq!(layout.cells.len(), 3);
    // (2,6) is the highest source row, so it renders at the top (py = 0).
    let top = layout
        .cells
        .iter()
        .find(|c| c.grid_x == 0 && c.grid_y == 1)
        .expect("normalized (0,1) cell");
    assert_eq!((top.px, top.py), (0, 0));
    let bottom_right = layout
        .cells
        .iter()
        .find(|c| c.grid_x == 1 && c.grid_y == 0)
        .expect("normalized (1,0) cell");
    assert_eq!((bottom_right.px, bottom_right.py), (step, step));
    assert_eq!(layout.width, 2 * step - gap);
    assert_eq!(layout.height, 2 * step - gap);
}

#[test]
fn projection_is_idempotent() {
    let shape = [[0, 0, 0], [1, 0, 2], [1, 1, 0], [0, 0, 3]];
    assert_eq!(project_shape(&shape, 28), project_shape(&shape, 28));
}

#[test]
fn empty_shape_projects_to_an_empty_layout() {
    let layout = project_shape(&[], 36);
    assert!(layout.cells.is_empty());
    assert_eq!((layout.width, layout.height), (0, 0));
}

#[test]
fn gap_scales_with_cell_size_but_never_vanishes() {
    assert_eq!(cell_gap(36), 4);
    assert_eq!(cell_gap(28), 3);
    assert_eq!(cell_gap(16), 2);
    assert_eq!(cell_gap(4), 1);
}

#[test]
fn cell_size_steps_by_piece_count() {
    assert_eq!(cell_size_for(1), cell_size_for(2));
    assert_eq!(cell_size_for(3), cell_size_for(4));
    assert!(cell_size_for(2) > cell_size_for(3));
    assert!(cell_size_for(4) > cell_size_for(5));
    assert_eq!(cell_size_for(12), cell_size_for(5));
}

#[test]
fn color_lookup_falls_back_for_unknown_ids() {
    let empty = PieceColors::default();
    assert_eq!(empty.color_of("unknown-piece"), DEFAULT_COLOR);

    let loaded = PieceColors::parse(r##"{"F": "#ef4444"}"##).expect("valid colors json");
    assert_eq!(loaded.color_of("F"), "#ef4444");
    assert_eq!(loaded.color_of("unknown-piece"), DEFAULT_COLOR);
}

#[test]
fn shape_lookup_falls_back_to_an_empty_shape() {
    let empty = PieceShapes::default();
    assert!(empty.shape_of("F").is_empty());

    let loaded = PieceShapes::parse(
        r#"[{"id": "I", "shape_json": [[0,0,0],[0,1,0],[0,2,0],[0,3,0],[0,4,0]]}]"#,
    )
    .expect("valid shapes json");
    assert_eq!(loaded.shape_of("I").len(), 5);
    assert!(loaded.shape_of("missing").is_empty());
    assert_eq!(loaded.ids(), ["I".to_string()]);
}
