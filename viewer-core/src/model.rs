use serde::{Deserialize, Serialize};

/// Bounding dimensions of the voxel volume. Every axis is at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleGrid {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl PuzzleGrid {
    pub fn max_dim(&self) -> u32 {
        self.x.max(self.y).max(self.z)
    }
}

/// A single occupied unit voxel, tagged with its owning piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleCell {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub piece: String,
}

/// A solved, partitioned puzzle as fetched from `puzzles/<id>.json`.
/// Immutable for the lifetime of a viewer session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleData {
    pub puzzle_id: String,
    pub grid: PuzzleGrid,
    pub cells: Vec<PuzzleCell>,
    /// Pieces intentionally absent from the solved arrangement; drives the
    /// problem-mode display when present.
    pub removed_pieces: Option<Vec<String>>,
}
