//! Chess board representation and game logic.
//!
//! An 8x8 grid of cells, each empty or holding a piece together with its move
//! history. Move generation is pseudo-legal and table driven; castling, en
//! passant and promotion are derived from the per-piece history rather than
//! from separate rights fields.
//!
//! # Example
//! ```
//! use lookahead_chess::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let moves = board.pseudo_legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.destinations(Square(0, 6)).len(), 2);
//! ```

mod builder;
mod check;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{ConfigError, FenError, MoveError, MoveParseError, SquareError};
pub use eval::EvalMode;
pub use state::Board;
pub use types::{
    Cell, Color, DestinationList, Move, Piece, PieceCode, SpecialMove, Square, UnmakeInfo,
    MAX_DESTINATIONS,
};

pub use search::{
    find_best_move, SearchParams, SearchResult, SearchState, SearchStats, DEFAULT_SEARCH_DEPTH,
    MAX_SCORE, MAX_SEARCH_DEPTH, MIN_SCORE,
};
