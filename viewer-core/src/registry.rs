use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Color used for any piece the registry does not know.
pub const DEFAULT_COLOR: &str = "#cccccc";

/// Piece id → CSS color string, from `colors/piece_colors.json`.
#[derive(Clone, Debug, Default)]
pub struct PieceColors {
    colors: HashMap<String, String>,
}

impl PieceColors {
    pub fn from_map(colors: HashMap<String, String>) -> Self {
        PieceColors { colors }
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_map(serde_json::from_str(text)?))
    }

    /// Total lookup: unknown ids resolve to the default color. Rendering
    /// must never fail on a miss, even before the registry has loaded.
    pub fn color_of(&self, id: &str) -> &str {
        self.colors
            .get(id)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }
}

/// One row of `colors/master_pieces.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub id: String,
    pub shape_json: Vec<[i32; 3]>,
}

/// Piece id → voxel footprint, from `colors/master_pieces.json`.
#[derive(Clone, Debug, Default)]
pub struct PieceShapes {
    shapes: HashMap<String, Vec<[i32; 3]>>,
    ids: Vec<String>,
}

impl PieceShapes {
    pub fn from_entries(entries: Vec<ShapeEntry>) -> Self {
        let mut shapes = HashMap::new();
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            if !shapes.contains_key(&entry.id) {
                ids.push(entry.id.clone());
            }
            shapes.insert(entry.id, entry.shape_json);
        }
        PieceShapes { shapes, ids }
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_entries(serde_json::from_str(text)?))
    }

    /// Total lookup: unknown ids project as an empty shape.
    pub fn shape_of(&self, id: &str) -> &[[i32; 3]] {
        self.shapes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Catalog ids in file order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
