//! Make/unmake move tests.

use super::{mv, play, sq, Board};
use crate::board::{BoardBuilder, Cell, Color, Piece, SpecialMove};

#[test]
fn test_opening_moves_stamp_pieces() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "e7e5"]);

    assert_eq!(board.move_counter(), 2);
    assert!(board.is_empty(sq("e2")));
    assert!(board.is_empty(sq("e7")));

    let white = *board.cell(sq("e4")).code().unwrap();
    assert!(white.is(Color::White, Piece::Pawn));
    assert_eq!(white.last_moved, 1);
    assert!(white.double_step);

    let black = *board.cell(sq("e5")).code().unwrap();
    assert_eq!(black.last_moved, 2);
    assert!(black.double_step);
}

#[test]
fn test_next_move_clears_double_step() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "e7e6", "e4e5"]);
    let pawn = *board.cell(sq("e5")).code().unwrap();
    assert!(!pawn.double_step);
    assert_eq!(pawn.last_moved, 3);
}

#[test]
fn test_capture_overwrites_destination() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "d7d5"]);
    let before = board.clone();
    let m = mv("e4d5");

    let info = board.make_move(m);
    assert_eq!(info.special(), SpecialMove::None);
    assert_eq!(info.captured(), Some(Piece::Pawn));
    assert!(info.moved_cell().holds(Color::White, Piece::Pawn));
    assert!(info.destination_cell().holds(Color::Black, Piece::Pawn));
    assert!(board.cell(sq("d5")).holds(Color::White, Piece::Pawn));
    assert_eq!(board.occupied_by(Color::Black).count(), 15);

    board.unmake_move(m, info);
    assert_eq!(board, before);
}

#[test]
fn test_every_starting_move_is_undone_exactly() {
    let mut board = Board::new();
    let start = board.clone();
    for color in Color::BOTH {
        for m in start.pseudo_legal_moves(color) {
            let info = board.make_move(m);
            assert_ne!(board, start, "{m} changed nothing");
            board.unmake_move(m, info);
            assert_eq!(board, start, "{m} was not undone");
        }
    }
}

#[test]
fn test_nested_moves_unwind_in_reverse() {
    let mut board = Board::new();
    let line = ["g1f3", "b8c6", "e2e4", "c6d4", "f3d4"];
    let mut snapshots = Vec::new();
    let mut undo = Vec::new();
    for notation in line {
        let m = mv(notation);
        snapshots.push(board.clone());
        undo.push((m, board.make_move(m)));
    }
    assert_eq!(board.move_counter(), 5);

    while let Some((m, info)) = undo.pop() {
        board.unmake_move(m, info);
        assert_eq!(Some(&board), snapshots.pop().as_ref());
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_unmake_restores_captured_history() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::Rook)
        .moved_piece(sq("a5"), Color::Black, Piece::Knight, 3)
        .checked_king(sq("e8"), Color::Black)
        .piece(sq("e1"), Color::White, Piece::King)
        .move_counter(4)
        .build();
    let before = board.clone();
    let m = mv("a1a5");

    let info = board.make_move(m);
    assert_eq!(info.captured(), Some(Piece::Knight));
    assert_eq!(board.cell(sq("a5")).code().map(|c| c.last_moved), Some(5));

    board.unmake_move(m, info);
    assert_eq!(board, before);
    assert_eq!(board.cell(sq("a5")).code().map(|c| c.last_moved), Some(3));
}

#[test]
fn test_promotion_unmake_restores_pawn_and_victim() {
    let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3");
    let before = board.clone();
    let m = mv("a7b8");

    let info = board.make_move(m);
    assert_eq!(info.special(), SpecialMove::Promotion);
    assert_eq!(info.captured(), Some(Piece::Knight));
    assert!(board.cell(sq("b8")).holds(Color::White, Piece::Queen));

    board.unmake_move(m, info);
    assert_eq!(board, before);
}

#[test]
fn test_castle_unmake_returns_rook_to_corner() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3");
    let before = board.clone();
    let m = mv("e1c1");

    let info = board.make_move(m);
    assert_eq!(info.special(), SpecialMove::Castle);
    assert!(board.cell(sq("d1")).holds(Color::White, Piece::Rook));

    board.unmake_move(m, info);
    assert_eq!(board, before);
    assert_eq!(board.cell(sq("d1")), Cell::Empty);
    assert!(!board.cell(sq("a1")).code().unwrap().has_moved());
}

#[test]
fn test_en_passant_unmake_reinstates_victim() {
    let mut board = Board::from_fen("4k3/8/8/8/2p5/8/1P6/4K3");
    play(&mut board, &["b2b4"]);
    let before = board.clone();
    let m = mv("c4b3");

    let info = board.make_move(m);
    assert!(board.is_empty(sq("b4")));
    board.unmake_move(m, info);

    assert_eq!(board, before);
    let victim = *board.cell(sq("b4")).code().unwrap();
    assert!(victim.double_step);
    assert_eq!(victim.last_moved, board.move_counter());
    assert!(board.is_pseudo_legal_destination(sq("c4"), sq("b3")));
}

#[test]
fn test_diagonal_step_without_victim_is_plain_move() {
    let mut board = Board::new();
    let before = board.clone();
    let m = mv("e2d3");

    let info = board.make_move(m);
    assert_eq!(info.special(), SpecialMove::None);
    assert_eq!(info.captured(), None);
    assert!(board.cell(sq("d2")).holds(Color::White, Piece::Pawn));
    assert!(board.cell(sq("d3")).holds(Color::White, Piece::Pawn));

    board.unmake_move(m, info);
    assert_eq!(board, before);
}

#[test]
fn test_stale_double_step_is_not_taken() {
    // The d5 pawn double-stepped two plies ago; its window has closed.
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::King)
        .moved_piece(sq("e5"), Color::White, Piece::Pawn, 3)
        .double_stepped_pawn(sq("d5"), Color::Black, 2)
        .move_counter(3)
        .build();
    let before = board.clone();
    let m = mv("e5d6");

    let info = board.make_move(m);
    assert_eq!(info.special(), SpecialMove::None);
    assert!(board.cell(sq("d5")).holds(Color::Black, Piece::Pawn));

    board.unmake_move(m, info);
    assert_eq!(board, before);
}

#[test]
fn test_init_after_play_restores_start() {
    let mut board = Board::new();
    play(&mut board, &["d2d4", "d7d5", "c1f4"]);
    board.init();
    assert_eq!(board, Board::new());
    assert_eq!(board.move_counter(), 0);
}
