//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Destination generation per piece kind
//! - `special_moves.rs` - Castling, en passant and promotion rules
//! - `make_unmake.rs` - Move application and exact reversal
//! - `check.rs` - Check, checkmate and stalemate detection
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax search behavior
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod movegen;

use super::{Board, Move, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn mv(notation: &str) -> Move {
    notation.parse().expect("valid move")
}

/// Play a sequence of coordinate moves, asserting each is pseudo-legal.
pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for notation in moves {
        let m = mv(notation);
        assert!(
            board.is_pseudo_legal_destination(m.from, m.to),
            "{notation} is not pseudo-legal"
        );
        board.make_move(m);
    }
}

/// Position after 1.f3 e5 2.g4 Qh4#.
pub(super) fn fools_mate() -> Board {
    let mut board = Board::new();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    board
}
