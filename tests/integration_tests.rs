//! Integration tests for godiag
//!
//! These exercise the whole conversion pipeline (board size + move record +
//! selection in, board + labels + caption out) the way the renderer
//! consumes it.

use godiag::apply::{apply_moves, Move, Selection};
use godiag::board::{parse_coord, Board, PlaceError, Stone};
use godiag::diagram::{render, render_snapshots, ConfigError};
use godiag::label::labels_for;

use Stone::{Black, White};

// =============================================================================
// Helper functions for building move records
// =============================================================================

/// Build a move record from entries like "B D4" or "W pass", numbered from 1.
fn record(size: usize, entries: &[&str]) -> Vec<Move> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let number = (i + 1) as u32;
            let (color, coord) = entry.split_once(' ').expect("entry like \"B D4\"");
            let stone = match color {
                "B" => Black,
                "W" => White,
                other => panic!("unknown color {other}"),
            };
            match coord {
                "pass" => Move::pass(number, stone),
                coord => Move::play(number, stone, parse_coord(coord, size).expect(coord)),
            }
        })
        .collect()
}

// =============================================================================
// Board rule tests through the public API
// =============================================================================

#[test]
fn test_place_and_read_back() {
    let board = Board::new(19).unwrap();
    let next = board.place((10, 10), White).unwrap();
    assert_eq!(next.stone_at((10, 10)), Some(White));
    assert_eq!(board.stone_at((10, 10)), None, "original board untouched");
}

#[test]
fn test_surrounded_stone_is_captured_immediately() {
    // White D4 surrounded on all four sides by Black.
    let mut board = Board::new(9).unwrap();
    board = board.place(parse_coord("D4", 9).unwrap(), White).unwrap();
    for coord in ["C4", "E4", "D3"] {
        board = board.place(parse_coord(coord, 9).unwrap(), Black).unwrap();
    }
    assert_eq!(board.stone_at(parse_coord("D4", 9).unwrap()), Some(White));
    board = board.place(parse_coord("D5", 9).unwrap(), Black).unwrap();
    assert_eq!(board.stone_at(parse_coord("D4", 9).unwrap()), None);
}

#[test]
fn test_suicide_is_rejected_without_capture() {
    let mut board = Board::new(9).unwrap();
    for coord in ["A2", "B1"] {
        board = board.place(parse_coord(coord, 9).unwrap(), Black).unwrap();
    }
    let a1 = parse_coord("A1", 9).unwrap();
    assert_eq!(board.place(a1, White), Err(PlaceError::Suicide));
}

#[test]
fn test_filling_last_liberty_captures_first() {
    // White A1 has one liberty left at B1; Black B1 is legal because the
    // capture resolves before the suicide check.
    let mut board = Board::new(9).unwrap();
    board = board.place(parse_coord("A1", 9).unwrap(), White).unwrap();
    board = board.place(parse_coord("A2", 9).unwrap(), Black).unwrap();
    let next = board.place(parse_coord("B1", 9).unwrap(), Black).unwrap();
    assert_eq!(next.stone_at(parse_coord("A1", 9).unwrap()), None);
}

// =============================================================================
// Whole-pipeline scenarios
// =============================================================================

#[test]
fn test_capture_scenario_full_pipeline() {
    // 9x9: B(0,0)=1, W(1,0)=2, W(0,1)=3. Move 3 captures move 1.
    let moves = vec![
        Move::play(1, Black, (0, 0)),
        Move::play(2, White, (1, 0)),
        Move::play(3, White, (0, 1)),
    ];
    let diagram = render(9, &moves, &Selection::all()).unwrap();

    assert_eq!(diagram.board.stone_at((0, 0)), None);
    assert_eq!(diagram.board.stone_at((1, 0)), Some(White));
    assert_eq!(diagram.board.stone_at((0, 1)), Some(White));
    assert_eq!(diagram.applied.len(), 3);
    assert_eq!(diagram.caption, vec!["1 at 3"]);
}

#[test]
fn test_capture_scenario_range_1_1() {
    let moves = vec![
        Move::play(1, Black, (0, 0)),
        Move::play(2, White, (1, 0)),
        Move::play(3, White, (0, 1)),
    ];
    let selection = Selection::range(1, 1).unwrap();
    let diagram = render(9, &moves, &selection).unwrap();

    assert_eq!(diagram.applied.len(), 1);
    assert_eq!(diagram.board.stone_at((0, 0)), Some(Black));
    assert!(diagram.caption.is_empty(), "capture not yet visible");
}

#[test]
fn test_pass_between_placements() {
    let moves = record(9, &["B D4", "W pass", "B E5"]);
    let diagram = render(9, &moves, &Selection::all()).unwrap();

    assert_eq!(diagram.applied.len(), 3, "pass is applied");
    assert_eq!(diagram.labels.len(), 2, "pass gets no label");
    assert_eq!(diagram.board.stone_at(parse_coord("D4", 9).unwrap()), Some(Black));
    assert_eq!(diagram.board.stone_at(parse_coord("E5", 9).unwrap()), Some(Black));
}

#[test]
fn test_occupied_move_skipped_in_pipeline() {
    let moves = record(9, &["B D4", "W D4", "B E5"]);
    let diagram = render(9, &moves, &Selection::all()).unwrap();

    assert_eq!(diagram.applied.len(), 2);
    assert_eq!(diagram.board.stone_at(parse_coord("D4", 9).unwrap()), Some(Black));
    assert!(diagram.caption.is_empty());
}

#[test]
fn test_unfiltered_labels_match_record_numbers() {
    let moves = record(9, &["B C3", "W D3", "B E3", "W F3"]);
    let labels = labels_for(&moves, &Selection::all());
    for mv in &moves {
        assert_eq!(labels[&mv.point.unwrap()], mv.number);
    }
}

#[test]
fn test_range_display_numbers_are_not_renumbered() {
    // Moves 1..=18 on spaced-out points (no stone touches another, so no
    // captures); labeling 16..=18 shows "16 17 18".
    let moves: Vec<Move> = (1u32..=18)
        .map(|n| {
            let i = (n - 1) as usize;
            let stone = if n % 2 == 1 { Black } else { White };
            Move::play(n, stone, ((i % 5) * 2, (i / 5) * 2))
        })
        .collect();
    let selection = Selection::range(16, 18).unwrap();
    let diagram = render(9, &moves, &selection).unwrap();

    let mut shown: Vec<u32> = diagram.labels.values().copied().collect();
    shown.sort();
    assert_eq!(shown, vec![16, 17, 18]);
    // Stones from moves 1..=15 are on the board even though unlabeled.
    assert_eq!(diagram.board.stone_at((0, 0)), Some(Black));
}

#[test]
fn test_caption_names_only_visible_labels() {
    // Move 3 captures move 1; with labels limited to 2..=3 the caption must
    // not mention move 1.
    let moves = vec![
        Move::play(1, Black, (0, 0)),
        Move::play(2, White, (1, 0)),
        Move::play(3, White, (0, 1)),
    ];
    let all = render(9, &moves, &Selection::all()).unwrap();
    assert_eq!(all.caption, vec!["1 at 3"]);

    let late = render(9, &moves, &Selection::range(2, 3).unwrap()).unwrap();
    assert!(late.caption.is_empty());
}

#[test]
fn test_snapshots_compose_range_and_limit() {
    let moves = vec![
        Move::play(1, Black, (0, 0)),
        Move::play(2, White, (1, 0)),
        Move::play(3, White, (0, 1)),
    ];
    let snapshots = render_snapshots(9, &moves, &Selection::all()).unwrap();

    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[1].applied.len(), 2);
    assert_eq!(
        snapshots.last().unwrap(),
        &render(9, &moves, &Selection::all()).unwrap()
    );
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_board_size_validation() {
    assert!(matches!(
        render(0, &[], &Selection::all()),
        Err(ConfigError::Size(_))
    ));
    assert!(matches!(
        render(26, &[], &Selection::all()),
        Err(ConfigError::Size(_))
    ));
    assert!(render(1, &[], &Selection::all()).is_ok());
    assert!(render(25, &[], &Selection::all()).is_ok());
}

#[test]
fn test_selection_validation() {
    assert!(Selection::range(3, 2).is_err());
    assert!(Selection::range(0, 2).is_err());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_conversion_is_idempotent() {
    let moves = record(9, &["B C3", "W D4", "B D3", "W pass", "B E4"]);
    let selection = Selection::range(2, 5).unwrap();

    let a = render(9, &moves, &selection).unwrap();
    let b = render(9, &moves, &selection).unwrap();
    assert_eq!(a, b);

    let ra = apply_moves(Board::new(9).unwrap(), &moves, &selection);
    let rb = apply_moves(Board::new(9).unwrap(), &moves, &selection);
    assert_eq!(ra, rb);
}
