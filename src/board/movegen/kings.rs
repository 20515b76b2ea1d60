use super::super::{Board, DestinationList, Piece, PieceCode, Square};
use super::ALL_DIRECTIONS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// King's file delta when castling to this side.
    pub(crate) const fn king_delta(self) -> isize {
        match self {
            CastleSide::King => 2,
            CastleSide::Queen => -2,
        }
    }

    /// Rook's (origin, destination) files.
    pub(crate) const fn rook_files(self) -> (usize, usize) {
        match self {
            CastleSide::King => (7, 5),
            CastleSide::Queen => (0, 3),
        }
    }

    /// Files that must be empty between king and rook.
    const fn between(self) -> &'static [usize] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[3, 2, 1],
        }
    }

    /// Side a two-file king move castles to.
    pub(crate) fn from_king_move(from: Square, to: Square) -> Option<Self> {
        match to.file() as isize - from.file() as isize {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

impl Board {
    pub(super) fn king_destinations(
        &self,
        from: Square,
        king: &PieceCode,
        list: &mut DestinationList,
    ) {
        for side in [CastleSide::King, CastleSide::Queen] {
            if self.can_castle(from, king, side) {
                if let Some(to) = from.offset(side.king_delta(), 0) {
                    list.push(to);
                }
            }
        }

        for &(df, dr) in &ALL_DIRECTIONS {
            if let Some(to) = from.offset(df, dr) {
                if self.can_land_on(to, king.color) {
                    list.push(to);
                }
            }
        }
    }

    /// Castling needs a king on its home square that has never moved and was
    /// never in check, an empty path to the corner, and an unmoved rook of the
    /// same color in that corner.
    ///
    /// A king that was ever checked loses castling for good, even after the
    /// check is gone. Squares the king passes over are not tested for attack.
    fn can_castle(&self, from: Square, king: &PieceCode, side: CastleSide) -> bool {
        let rank = king.color.back_rank();
        if from != Square(rank, 4) || king.has_moved() || king.checked {
            return false;
        }
        if !side.between().iter().all(|&file| self.is_empty(Square(rank, file))) {
            return false;
        }
        let (rook_file, _) = side.rook_files();
        self.cell(Square(rank, rook_file))
            .code()
            .is_some_and(|rook| rook.is(king.color, Piece::Rook) && !rook.has_moved())
    }
}
