use super::super::{Board, Cell, Color, DestinationList, Piece, PieceCode, Square};

/// What a pawn vector requires of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PawnRule {
    /// Two ranks from the home rank; the skipped square and the destination
    /// must both be empty.
    DoubleStep,
    /// One rank forward onto an empty square.
    SingleStep,
    /// Diagonal: an enemy piece on the destination, or en passant.
    Capture,
}

/// Pawn vectors for White; Black mirrors the rank component.
const PAWN_RULES: [((isize, isize), PawnRule); 4] = [
    ((0, 2), PawnRule::DoubleStep),
    ((0, 1), PawnRule::SingleStep),
    ((1, 1), PawnRule::Capture),
    ((-1, 1), PawnRule::Capture),
];

impl Board {
    pub(super) fn pawn_destinations(
        &self,
        from: Square,
        pawn: &PieceCode,
        list: &mut DestinationList,
    ) {
        let dir = pawn.color.pawn_direction();
        for &((df, dr), rule) in &PAWN_RULES {
            let Some(to) = from.offset(df, dr * dir) else {
                continue;
            };
            if self.pawn_rule_allows(rule, from, to, pawn.color) {
                list.push(to);
            }
        }
    }

    fn pawn_rule_allows(&self, rule: PawnRule, from: Square, to: Square, color: Color) -> bool {
        match rule {
            PawnRule::DoubleStep => {
                let skipped = Square((from.rank() + to.rank()) / 2, from.file());
                from.rank() == color.pawn_start_rank()
                    && self.is_empty(skipped)
                    && self.is_empty(to)
            }
            PawnRule::SingleStep => self.is_empty(to),
            PawnRule::Capture => match self.cell(to) {
                Cell::Occupied(target) => target.color != color,
                Cell::Empty => self.en_passant_victim(from, to, color).is_some(),
            },
        }
    }

    /// Square of the enemy pawn a diagonal move from `from` to the empty
    /// square `to` would take en passant, if that pawn double-stepped on the
    /// immediately preceding move.
    pub(crate) fn en_passant_victim(
        &self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Option<Square> {
        if from.file() == to.file() {
            return None;
        }
        let beside = Square(from.rank(), to.file());
        match self.cell(beside) {
            Cell::Occupied(code)
                if code.is(color.opponent(), Piece::Pawn)
                    && code.double_step
                    && code.last_moved == self.move_counter =>
            {
                Some(beside)
            }
            _ => None,
        }
    }
}
