pub mod camera;
pub mod merge;
pub mod model;
pub mod params;
pub mod project;
pub mod registry;

pub use camera::{CameraPlan, FOV_DEG, plan_camera};
pub use merge::{ViewMode, effective_removed, hidden_pieces, missing_pieces, toggle_exposed};
pub use model::{PuzzleCell, PuzzleData, PuzzleGrid};
pub use params::{CaptureAngle, ViewerParams, resolve_params, split_piece_list};
pub use project::{LayoutCell, ShapeLayout, cell_gap, cell_size_for, project_shape};
pub use registry::{DEFAULT_COLOR, PieceColors, PieceShapes, ShapeEntry};
