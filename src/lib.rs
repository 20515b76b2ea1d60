pub mod board;
pub mod game;

pub use board::{find_best_move, Board, Color, Move, Piece, SearchParams, SearchState, Square};
pub use game::{Game, GameConfig};
