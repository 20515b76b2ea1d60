//! Check detection.
//!
//! A king is in check when any enemy piece has it among its pseudo-legal
//! destinations. `is_in_check` also marks the king: once a king has been seen
//! in check it keeps the `checked` flag, and with it loses castling, for the
//! rest of the game.

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Whether `color`'s king is attacked. Sets the king's sticky `checked`
    /// flag when it is.
    pub fn is_in_check(&mut self, color: Color) -> bool {
        let Some(king) = self.attacked_king(color) else {
            return false;
        };
        if let Some(code) = self.code_mut(king) {
            code.checked = true;
        }
        true
    }

    /// Whether `color`'s king is attacked, leaving the board untouched.
    #[must_use]
    pub fn king_attacked(&self, color: Color) -> bool {
        self.attacked_king(color).is_some()
    }

    fn attacked_king(&self, color: Color) -> Option<Square> {
        for from in self.occupied_by(color.opponent()) {
            for &to in &self.destinations(from) {
                if self.cell(to).holds(color, Piece::King) {
                    return Some(to);
                }
            }
        }
        None
    }

    /// Whether playing `mv` leaves `color`'s king unattacked. The board is
    /// restored before returning.
    pub fn leaves_king_safe(&mut self, mv: Move, color: Color) -> bool {
        let info = self.make_move(mv);
        let safe = !self.king_attacked(color);
        self.unmake_move(mv, info);
        safe
    }

    /// Whether `color` has a pseudo-legal move that does not leave its king
    /// attacked.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        self.pseudo_legal_moves(color)
            .into_iter()
            .any(|mv| self.leaves_king_safe(mv, color))
    }

    /// King attacked and no move gets it out.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.king_attacked(color) && !self.has_legal_move(color)
    }

    /// King not attacked but every move would expose it.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.king_attacked(color) && !self.has_legal_move(color)
    }
}
