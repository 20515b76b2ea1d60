//! Move types and destination list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A source / destination pair.
///
/// Moves carry no flags: what a move does (castle, en passant, promotion)
/// follows from the pieces involved and is reported by `make_move`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = s[0..2].parse::<Square>().map_err(|_| invalid())?;
        let to = s[2..4].parse::<Square>().map_err(|_| invalid())?;
        Ok(Move { from, to })
    }
}

/// Side effect resolved while applying a move. At most one applies per move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMove {
    #[default]
    None,
    /// A pawn reached its last rank and became a queen.
    Promotion,
    /// The king moved two files; its rook jumped over it.
    Castle,
    /// A pawn captured the enemy pawn beside it by moving behind it.
    EnPassant,
}

/// Everything needed to take a move back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved: Cell,
    pub(crate) captured: Cell,
    pub(crate) special: SpecialMove,
}

impl UnmakeInfo {
    /// The special effect the move triggered.
    #[must_use]
    pub const fn special(&self) -> SpecialMove {
        self.special
    }

    /// Cell that stood on the source square before the move.
    #[must_use]
    pub const fn moved_cell(&self) -> Cell {
        self.moved
    }

    /// Cell that stood on the destination square before the move.
    #[must_use]
    pub const fn destination_cell(&self) -> Cell {
        self.captured
    }

    /// Kind of piece taken by the move, including a pawn taken en passant.
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        match self.special {
            SpecialMove::EnPassant => Some(Piece::Pawn),
            _ => self.captured.kind(),
        }
    }
}

/// Upper bound on destinations for one piece. A queen in the centre of an
/// empty board reaches 27 squares.
pub const MAX_DESTINATIONS: usize = 64;

/// Destinations of a single piece, in generation order.
#[derive(Clone, Debug)]
pub struct DestinationList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl DestinationList {
    pub(crate) fn new() -> Self {
        DestinationList {
            squares: [Square(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        assert!(
            self.len < MAX_DESTINATIONS,
            "destination list overflow at {sq}"
        );
        debug_assert!(sq.rank() < 8 && sq.file() < 8, "off-board destination");
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }
}

impl<'a> IntoIterator for &'a DestinationList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for DestinationList {
    fn default() -> Self {
        DestinationList::new()
    }
}

impl Index<usize> for DestinationList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "DestinationList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}
