//! Per-square contents.
//!
//! Every square holds exactly one [`Cell`]. An occupied cell carries the
//! piece's history as well as its identity: when it last moved (as a value of
//! the board's move counter), whether a king has ever been in check, and
//! whether a pawn's last move was a double step.

use super::piece::{Color, Piece};

/// A piece together with the history flags the move rules depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceCode {
    pub piece: Piece,
    pub color: Color,
    /// King only. Set the first time the king is found in check and never
    /// cleared; a king that was ever checked can no longer castle.
    pub checked: bool,
    /// Pawn only. The pawn's last move was a two-rank advance.
    pub double_step: bool,
    /// Move counter value when this piece last moved, 0 if it never has.
    pub last_moved: u32,
}

impl PieceCode {
    /// A piece that has never moved.
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        PieceCode {
            piece,
            color,
            checked: false,
            double_step: false,
            last_moved: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.last_moved != 0
    }

    #[inline]
    #[must_use]
    pub fn is(&self, color: Color, piece: Piece) -> bool {
        self.color == color && self.piece == piece
    }
}

/// Contents of one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceCode),
}

impl Cell {
    #[must_use]
    pub const fn piece(color: Color, piece: Piece) -> Self {
        Cell::Occupied(PieceCode::new(color, piece))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> Option<&PieceCode> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(code) => Some(code),
        }
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.code().map(|c| c.color)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<Piece> {
        self.code().map(|c| c.piece)
    }

    /// True if the cell holds `color`'s `piece`, regardless of history flags.
    #[inline]
    #[must_use]
    pub fn holds(&self, color: Color, piece: Piece) -> bool {
        self.code().is_some_and(|c| c.is(color, piece))
    }

    #[inline]
    #[must_use]
    pub fn is_color(&self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

impl From<PieceCode> for Cell {
    fn from(code: PieceCode) -> Self {
        Cell::Occupied(code)
    }
}
