use crate::model::PuzzleGrid;
use crate::params::CaptureAngle;

/// Field of view shared by interactive and capture rendering, in degrees.
pub const FOV_DEG: f64 = 40.0;

/// Keeps the camera far enough to frame the largest puzzle axis in any
/// orientation.
const DISTANCE_FACTOR: f64 = 1.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPlan {
    /// Position relative to the puzzle center.
    pub position: [f64; 3],
    pub fov_deg: f64,
}

/// Deterministic camera placement from grid dimensions and the requested
/// angle. Identical inputs give identical framing, which capture runs rely
/// on for reproducible images.
pub fn plan_camera(grid: PuzzleGrid, angle: CaptureAngle) -> CameraPlan {
    let d = grid.max_dim() as f64 * DISTANCE_FACTOR;
    let position = match angle {
        CaptureAngle::Y => [-d, d, -d],
        CaptureAngle::X | CaptureAngle::Unspecified => [d, d, d],
    };
    CameraPlan {
        position,
        fov_deg: FOV_DEG,
    }
}
