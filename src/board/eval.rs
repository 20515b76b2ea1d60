//! Static evaluation.
//!
//! Each piece scores its material value. In full mode it also scores one
//! point per pseudo-legal move (mobility) plus a tenth of the value of every
//! piece it attacks, capped at a queen's value so that threatening the king
//! does not swamp the other terms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece, Square};

/// Bonus per pseudo-legal destination
const MOBILITY_BONUS: i32 = 1;

/// Attacked piece value is divided by this
const ATTACK_DIVISOR: i32 = 10;

/// Which terms the evaluator includes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvalMode {
    /// Material, mobility and attack potential
    #[default]
    Full,
    /// Material only
    Simple,
}

impl Board {
    /// Score the position from `for_color`'s point of view: own total minus
    /// opponent total.
    ///
    /// `evaluate(c, m) == -evaluate(c.opponent(), m)` for every position.
    #[must_use]
    pub fn evaluate(&self, for_color: Color, mode: EvalMode) -> i32 {
        let mut score = 0;
        for sq in Square::all() {
            let Some(code) = self.cell(sq).code().copied() else {
                continue;
            };
            let mut contribution = code.piece.value();
            if mode == EvalMode::Full {
                contribution += self.activity(sq);
            }
            if code.color == for_color {
                score += contribution;
            } else {
                score -= contribution;
            }
        }
        score
    }

    /// Mobility and attack potential of the piece on `from`.
    fn activity(&self, from: Square) -> i32 {
        let cap = Piece::Queen.value();
        self.destinations(from)
            .iter()
            .map(|&to| {
                let threat = self
                    .piece_on(to)
                    .map_or(0, |target| target.value().min(cap) / ATTACK_DIVISOR);
                MOBILITY_BONUS + threat
            })
            .sum()
    }
}
