//! Pseudo-legal move generation.
//!
//! Every piece kind is driven by a table of (file, rank) direction vectors.
//! Sliders repeat each vector until blocked; every other piece takes exactly
//! one step per vector. Pawns and kings layer their special rules on top of
//! the table (see `pawns.rs` and `kings.rs`).
//!
//! Nothing here checks whether the mover's own king is left attacked.

mod kings;
mod pawns;
mod sliders;

pub(crate) use kings::CastleSide;

use super::{Board, Color, DestinationList, Move, Piece, Square};

/// One-square steps in every direction, clockwise from "up the board".
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    /// Pseudo-legal destinations for the piece on `from`, in generation order.
    ///
    /// An empty square yields an empty list.
    #[must_use]
    pub fn destinations(&self, from: Square) -> DestinationList {
        let mut list = DestinationList::new();
        let Some(code) = self.cell(from).code().copied() else {
            return list;
        };

        match code.piece {
            Piece::King => self.king_destinations(from, &code, &mut list),
            Piece::Queen => self.slide(from, code.color, &ALL_DIRECTIONS, &mut list),
            Piece::Rook => self.slide(from, code.color, &ROOK_DIRECTIONS, &mut list),
            Piece::Bishop => self.slide(from, code.color, &BISHOP_DIRECTIONS, &mut list),
            Piece::Knight => self.step(from, code.color, &KNIGHT_JUMPS, &mut list),
            Piece::Pawn => self.pawn_destinations(from, &code, &mut list),
        }
        list
    }

    /// True if the piece on `from` may move to `to`, ignoring own-king safety.
    #[must_use]
    pub fn is_pseudo_legal_destination(&self, from: Square, to: Square) -> bool {
        self.destinations(from).contains(to)
    }

    /// All pseudo-legal moves of `color`: pieces in rank-major order, each
    /// piece's destinations in generation order.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.occupied_by(color) {
            moves.extend(self.destinations(from).iter().map(|&to| Move::new(from, to)));
        }
        moves
    }

    /// Number of pseudo-legal destinations for the piece on `from`.
    #[must_use]
    pub fn mobility(&self, from: Square) -> usize {
        self.destinations(from).len()
    }

    /// A destination is reachable unless it holds one of the mover's own pieces.
    #[inline]
    pub(crate) fn can_land_on(&self, to: Square, color: Color) -> bool {
        !self.cell(to).is_color(color)
    }

    /// Single step along each vector.
    fn step(
        &self,
        from: Square,
        color: Color,
        vectors: &[(isize, isize)],
        list: &mut DestinationList,
    ) {
        for &(df, dr) in vectors {
            if let Some(to) = from.offset(df, dr) {
                if self.can_land_on(to, color) {
                    list.push(to);
                }
            }
        }
    }
}
