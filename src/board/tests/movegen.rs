//! Destination generation tests.

use super::{sq, Board};
use crate::board::{BoardBuilder, Color, Move, Piece, Square, MAX_DESTINATIONS};

fn lone(square: Square, color: Color, piece: Piece) -> Board {
    BoardBuilder::new().piece(square, color, piece).build()
}

#[test]
fn test_starting_position_move_counts() {
    let board = Board::new();
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 20);
    assert_eq!(board.pseudo_legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_empty_square_has_no_destinations() {
    let board = Board::new();
    assert!(board.destinations(sq("e4")).is_empty());
}

#[test]
fn test_queen_in_centre_of_empty_board() {
    let board = lone(sq("d4"), Color::White, Piece::Queen);
    let dests = board.destinations(sq("d4"));
    assert_eq!(dests.len(), 27);
    assert!(dests.len() <= MAX_DESTINATIONS);
}

#[test]
fn test_rook_and_bishop_on_empty_board() {
    assert_eq!(lone(sq("a1"), Color::White, Piece::Rook).mobility(sq("a1")), 14);
    assert_eq!(lone(sq("a1"), Color::Black, Piece::Bishop).mobility(sq("a1")), 7);
    assert_eq!(lone(sq("d4"), Color::Black, Piece::Bishop).mobility(sq("d4")), 13);
}

#[test]
fn test_knight_generation_order() {
    let board = lone(sq("d4"), Color::White, Piece::Knight);
    let dests: Vec<String> = board
        .destinations(sq("d4"))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        dests,
        ["e6", "f5", "f3", "e2", "c2", "b3", "b5", "c6"]
    );
    assert_eq!(lone(sq("a1"), Color::White, Piece::Knight).mobility(sq("a1")), 2);
}

#[test]
fn test_slider_stops_at_blockers() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("a4"), Color::White, Piece::Pawn)
        .piece(sq("d1"), Color::Black, Piece::Knight)
        .build();
    let dests = board.destinations(sq("a1"));
    assert_eq!(dests.as_slice(), &[sq("a2"), sq("a3"), sq("b1"), sq("c1"), sq("d1")]);
}

#[test]
fn test_king_steps_exclude_own_pieces() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e4"), Color::White, Piece::King, 3)
        .piece(sq("e5"), Color::White, Piece::Pawn)
        .piece(sq("d5"), Color::Black, Piece::Pawn)
        .move_counter(3)
        .build();
    let dests = board.destinations(sq("e4"));
    assert_eq!(dests.len(), 7);
    assert!(!dests.contains(sq("e5")));
    assert!(dests.contains(sq("d5")));
}

#[test]
fn test_pawn_single_and_double_step() {
    let board = Board::new();
    assert_eq!(board.destinations(sq("e2")).as_slice(), &[sq("e4"), sq("e3")]);
    assert_eq!(board.destinations(sq("d7")).as_slice(), &[sq("d5"), sq("d6")]);
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let jumped = BoardBuilder::starting_position()
        .piece(sq("e3"), Color::Black, Piece::Knight)
        .build();
    assert!(jumped.destinations(sq("e2")).is_empty());
    assert!(!jumped.is_pseudo_legal_destination(sq("e2"), sq("e4")));
    assert!(!jumped.is_pseudo_legal_destination(sq("e2"), sq("e3")));

    let landing = BoardBuilder::starting_position()
        .piece(sq("e4"), Color::Black, Piece::Knight)
        .build();
    assert!(!landing.is_pseudo_legal_destination(sq("e2"), sq("e4")));
    assert!(landing.is_pseudo_legal_destination(sq("e2"), sq("e3")));
}

#[test]
fn test_pawn_off_home_rank_steps_once() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e3"), Color::White, Piece::Pawn, 1)
        .build();
    assert_eq!(board.destinations(sq("e3")).as_slice(), &[sq("e4")]);
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e4"), Color::White, Piece::Pawn, 1)
        .piece(sq("d5"), Color::Black, Piece::Rook)
        .piece(sq("f5"), Color::White, Piece::Knight)
        .piece(sq("e5"), Color::Black, Piece::Pawn)
        .build();
    assert_eq!(board.destinations(sq("e4")).as_slice(), &[sq("d5")]);
}

#[test]
fn test_pawn_cannot_capture_straight_ahead() {
    let board = BoardBuilder::new()
        .piece(sq("e7"), Color::Black, Piece::Pawn)
        .piece(sq("e6"), Color::White, Piece::Queen)
        .build();
    assert!(board.destinations(sq("e7")).is_empty());
}

#[test]
fn test_every_destination_on_board_from_start() {
    let board = Board::new();
    for color in Color::BOTH {
        for Move { from, to } in board.pseudo_legal_moves(color) {
            assert!(from.rank() < 8 && from.file() < 8);
            assert!(to.rank() < 8 && to.file() < 8);
            assert!(board.cell(from).is_color(color));
        }
    }
}
