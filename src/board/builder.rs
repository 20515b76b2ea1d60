//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, including the per-piece history
//! that castling and en passant depend on.
//!
//! # Example
//! ```
//! use lookahead_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_on(Square(1, 0)), Some(Piece::Pawn));
//! ```

use super::{Board, Cell, Color, Piece, PieceCode, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PieceCode)>,
    move_counter: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            move_counter: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = Square::all()
            .filter_map(|sq| board.cell(sq).code().map(|code| (sq, *code)))
            .collect();
        BoardBuilder {
            pieces,
            move_counter: 0,
        }
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.code(square, PieceCode::new(color, piece))
    }

    /// Place a piece with explicit history flags.
    #[must_use]
    pub fn code(mut self, square: Square, code: PieceCode) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, code));
        self
    }

    /// Place a piece that last moved when the counter read `at`.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, piece: Piece, at: u32) -> Self {
        let mut code = PieceCode::new(color, piece);
        code.last_moved = at;
        self.code(square, code)
    }

    /// Place a pawn that double-stepped onto `square` when the counter read
    /// `at`. It can be taken en passant while the counter still reads `at`.
    #[must_use]
    pub fn double_stepped_pawn(self, square: Square, color: Color, at: u32) -> Self {
        let mut code = PieceCode::new(color, Piece::Pawn);
        code.last_moved = at;
        code.double_step = true;
        self.code(square, code)
    }

    /// Place a king that has already been in check at some point.
    #[must_use]
    pub fn checked_king(self, square: Square, color: Color) -> Self {
        let mut code = PieceCode::new(color, Piece::King);
        code.checked = true;
        self.code(square, code)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the global move counter.
    #[must_use]
    pub const fn move_counter(mut self, counter: u32) -> Self {
        self.move_counter = counter;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, code) in self.pieces {
            board.set_cell(sq, Cell::Occupied(code));
        }
        board.move_counter = self.move_counter;
        board
    }
}
