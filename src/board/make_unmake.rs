use super::movegen::CastleSide;
use super::{Board, Cell, Move, Piece, PieceCode, Square, SpecialMove, UnmakeInfo};

impl Board {
    /// Apply a move and resolve its side effect.
    ///
    /// The move counter goes up by one and the moving piece is stamped with
    /// the new value. Whatever stood on the destination is overwritten. The
    /// returned `UnmakeInfo` restores the position exactly via `unmake_move`.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let Move { from, to } = mv;
        let moved = self.cell(from);
        let captured = self.cell(to);
        debug_assert!(!moved.is_empty(), "make_move from empty square {from}");
        let en_passant = match moved {
            Cell::Occupied(code) if code.piece == Piece::Pawn && captured.is_empty() => {
                self.en_passant_victim(from, to, code.color)
            }
            _ => None,
        };
        self.move_counter += 1;

        let Cell::Occupied(mut code) = moved else {
            return UnmakeInfo {
                moved,
                captured,
                special: SpecialMove::None,
            };
        };

        code.last_moved = self.move_counter;
        code.double_step = false;
        self.set_cell(from, Cell::Empty);

        let special = match code.piece {
            Piece::Pawn => self.resolve_pawn_move(&mut code, from, to, en_passant),
            Piece::King => self.resolve_king_move(from, to),
            _ => SpecialMove::None,
        };
        self.set_cell(to, Cell::Occupied(code));

        UnmakeInfo {
            moved,
            captured,
            special,
        }
    }

    /// Take back a move made with `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let Move { from, to } = mv;
        self.set_cell(from, info.moved);
        self.set_cell(to, info.captured);
        self.move_counter -= 1;

        match info.special {
            SpecialMove::Castle => {
                if let Some(side) = CastleSide::from_king_move(from, to) {
                    let (rook_from, rook_to) = side.rook_files();
                    let rank = to.rank();
                    let rook = self.cell(Square(rank, rook_to));
                    self.set_cell(Square(rank, rook_from), rook);
                    self.set_cell(Square(rank, rook_to), Cell::Empty);
                }
            }
            SpecialMove::EnPassant => {
                if let Some(color) = info.moved.color() {
                    let mut pawn = PieceCode::new(color.opponent(), Piece::Pawn);
                    pawn.double_step = true;
                    pawn.last_moved = self.move_counter;
                    self.set_cell(Square(from.rank(), to.file()), Cell::Occupied(pawn));
                }
            }
            SpecialMove::Promotion | SpecialMove::None => {}
        }
    }

    fn resolve_pawn_move(
        &mut self,
        pawn: &mut PieceCode,
        from: Square,
        to: Square,
        en_passant: Option<Square>,
    ) -> SpecialMove {
        if to.rank() == pawn.color.pawn_promotion_rank() {
            pawn.piece = Piece::Queen;
            return SpecialMove::Promotion;
        }
        if from.rank().abs_diff(to.rank()) == 2 {
            pawn.double_step = true;
            return SpecialMove::None;
        }
        if let Some(victim) = en_passant {
            self.set_cell(victim, Cell::Empty);
            return SpecialMove::EnPassant;
        }
        SpecialMove::None
    }

    fn resolve_king_move(&mut self, from: Square, to: Square) -> SpecialMove {
        let Some(side) = CastleSide::from_king_move(from, to) else {
            return SpecialMove::None;
        };
        let (rook_from, rook_to) = side.rook_files();
        let rank = to.rank();
        let rook = self.cell(Square(rank, rook_from));
        self.set_cell(Square(rank, rook_to), rook);
        self.set_cell(Square(rank, rook_from), Cell::Empty);
        SpecialMove::Castle
    }
}
