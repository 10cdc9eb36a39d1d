use viewer_core::{
    CaptureAngle, PuzzleCell, PuzzleData, PuzzleGrid, ViewMode, effective_removed, hidden_pieces,
    missing_pieces, resolve_params, split_piece_list, toggle_exposed,
};

fn puzzle(removed: Option<Vec<&str>>) -> PuzzleData {
    let cells = vec![
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
        PuzzleCell {
            x: 0,
            y: 1,
            z: 0,
            piece: "C".to_string(),
        },
    ];
    PuzzleData {
        puzzle_id: "test".to_string(),
        grid: PuzzleGrid { x: 2, y: 2, z: 1 },
        cells,
        removed_pieces: removed.map(|list| list.into_iter().map(str::to_string).collect()),
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn preferred_identifier_wins_over_legacy() {
    let params = resolve_params("?id=2026-002&puzzle_id=5x4x3_0010");
    assert_eq!(params.puzzle_file, "puzzles/2026-002.json");
    assert_eq!(params.puzzle_label, "2026-002");
}

#[test]
fn legacy_identifier_uses_its_own_file_naming() {
    let params = resolve_params("?puzzle_id=5x4x3_0010");
    assert_eq!(params.puzzle_file, "puzzles/puzzle_5x4x3_0010.json");
    assert_eq!(params.puzzle_label, "5x4x3_0010");
}

#[test]
fn missing_identifiers_yield_the_unset_sentinel() {
    for search in ["", "?", "?mode=capture&angle=x", "?id=&puzzle_id="] {
        let params = resolve_params(search);
        assert!(!params.has_puzzle(), "search {:?}", search);
        assert_eq!(params.puzzle_label, "");
    }
}

#[test]
fn removed_override_is_trimmed_and_ordered() {
    let params = resolve_params("?id=p&removed_pieces=%20V%20,W,%20,X");
    assert_eq!(params.removed_override, owned(&["V", "W", "X"]));
}

#[test]
fn empty_removed_override_is_an_empty_list() {
    assert!(split_piece_list("").is_empty());
    assert!(split_piece_list("   ").is_empty());
    assert!(split_piece_list(" , ,").is_empty());
}

#[test]
fn capture_flag_requires_the_exact_mode_token() {
    assert!(resolve_params("?id=p&mode=capture").capture);
    assert!(!resolve_params("?id=p&mode=Capture").capture);
    assert!(!resolve_params("?id=p&mode=edit").capture);
    assert!(!resolve_params("?id=p").capture);
}

#[test]
fn unknown_angle_tokens_normalize_to_unspecified() {
    assert_eq!(resolve_params("?id=p&angle=x").angle, CaptureAngle::X);
    assert_eq!(resolve_params("?id=p&angle=y").angle, CaptureAngle::Y);
    assert_eq!(
        resolve_params("?id=p&angle=z").angle,
        CaptureAngle::Unspecified
    );
    assert_eq!(resolve_params("?id=p").angle, CaptureAngle::Unspecified);
}

#[test]
fn embedded_removed_pieces_win_over_override() {
    let data = puzzle(Some(vec!["A", "B"]));
    assert_eq!(
        effective_removed(&data, &owned(&["C"])),
        owned(&["A", "B"])
    );
}

#[test]
fn override_applies_when_data_carries_none() {
    assert_eq!(
        effective_removed(&puzzle(None), &owned(&["C"])),
        owned(&["C"])
    );
    assert_eq!(
        effective_removed(&puzzle(Some(vec![])), &owned(&["C"])),
        owned(&["C"])
    );
}

#[test]
fn hidden_pieces_follow_the_mode() {
    let effective = owned(&["A", "B"]);
    let hidden = hidden_pieces(&effective, ViewMode::Problem);
    assert!(hidden.contains("A") && hidden.contains("B"));
    assert!(hidden_pieces(&effective, ViewMode::Answer).is_empty());
}

#[test]
fn toggle_is_never_exposed_without_removed_pieces() {
    assert!(!toggle_exposed(false, &[]));
    assert!(!toggle_exposed(true, &[]));
    assert!(!toggle_exposed(true, &owned(&["A"])));
    assert!(toggle_exposed(false, &owned(&["A"])));
}

#[test]
fn toggle_labels_name_the_next_state() {
    assert_eq!(ViewMode::Problem.toggle_label(), "Answer");
    assert_eq!(ViewMode::Answer.toggle_label(), "Problem");
    assert_eq!(ViewMode::Problem.toggled(), ViewMode::Answer);
}

#[test]
fn missing_pieces_cover_removed_and_unused_catalog_ids() {
    let catalog = owned(&["A", "B", "C", "D"]);
    let data = puzzle(Some(vec!["C"]));
    let effective = effective_removed(&data, &[]);
    // C is removed, D never appears in the cells.
    assert_eq!(missing_pieces(&data, &effective, &catalog), owned(&["C", "D"]));
}
