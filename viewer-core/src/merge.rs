use std::collections::HashSet;

use crate::model::PuzzleData;

/// Display state of the viewer. Problem hides the removed pieces, Answer
/// shows the full arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Problem,
    Answer,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Problem => ViewMode::Answer,
            ViewMode::Answer => ViewMode::Problem,
        }
    }

    /// Label of the toggle button: it names the state the click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Problem => "Answer",
            ViewMode::Answer => "Problem",
        }
    }
}

/// The authoritative removed-piece list. A non-empty list embedded in the
/// puzzle data wins; the override from the invocation context only applies
/// when the data carries none.
pub fn effective_removed(data: &PuzzleData, override_list: &[String]) -> Vec<String> {
    match &data.removed_pieces {
        Some(list) if !list.is_empty() => list.clone(),
        _ => override_list.to_vec(),
    }
}

/// Recompute the set of piece ids hidden from the rendered scene. Derived
/// state only; call again whenever the mode changes.
pub fn hidden_pieces(effective: &[String], mode: ViewMode) -> HashSet<String> {
    match mode {
        ViewMode::Problem => effective.iter().cloned().collect(),
        ViewMode::Answer => HashSet::new(),
    }
}

/// The toggle control only exists outside capture mode, and only when there
/// is something to hide.
pub fn toggle_exposed(capture: bool, effective: &[String]) -> bool {
    !capture && !effective.is_empty()
}

/// Catalog pieces that do not appear in the displayed arrangement, sorted.
/// Feeds the missing-pieces strip and the preview sheet.
pub fn missing_pieces(
    data: &PuzzleData,
    effective: &[String],
    catalog_ids: &[String],
) -> Vec<String> {
    let removed: HashSet<&str> = effective.iter().map(String::as_str).collect();
    let mut used: HashSet<&str> = HashSet::new();
    for cell in &data.cells {
        if !removed.contains(cell.piece.as_str()) {
            used.insert(cell.piece.as_str());
        }
    }
    let mut missing: Vec<String> = catalog_ids
        .iter()
        .filter(|id| !used.contains(id.as_str()))
        .cloned()
        .collect();
    missing.sort();
    missing
}
