//! Fixed-depth negamax search.
//!
//! Every pseudo-legal move of every piece is tried at every depth; there is
//! no pruning and no move ordering beyond board order. Moves that leave the
//! mover's own king attacked are not filtered. They lose one ply later,
//! because capturing a king ends the branch with `MAX_SCORE`.

mod params;

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::error::ConfigError;
use crate::board::{Board, Color, Move, Piece, Square};
pub use params::{SearchParams, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

/// Score of a position where the side to move can take the enemy king.
pub const MAX_SCORE: i32 = i32::MAX;

/// Score of a side with no move at all. Negating it gives `MAX_SCORE`.
pub const MIN_SCORE: i32 = -i32::MAX;

/// Outcome of a search from the root position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// First move of the best line; `None` when the side has nothing better
    /// than `MIN_SCORE`.
    pub best_move: Option<Move>,
}

impl SearchResult {
    /// The side can capture the enemy king right now.
    #[must_use]
    pub fn is_king_capture(&self) -> bool {
        self.score == MAX_SCORE
    }

    /// The side has no move worth playing; the game ends for it.
    #[must_use]
    pub fn is_no_move(&self) -> bool {
        self.score == MIN_SCORE || self.best_move.is_none()
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Moves considered, king captures included
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Configuration, jitter RNG and statistics carried across searches.
pub struct SearchState {
    params: SearchParams,
    rng: StdRng,
    stats: SearchStats,
}

impl SearchState {
    pub fn new(params: SearchParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::from_valid(params))
    }

    fn from_valid(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchState {
            params,
            rng,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn jitter(&mut self) -> i32 {
        let jitter = i32::from(self.params.jitter);
        if jitter == 0 {
            0
        } else {
            self.rng.gen_range(-jitter..=jitter)
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::from_valid(SearchParams::default())
    }
}

/// Search context for a single search
struct SearchContext<'a> {
    board: &'a mut Board,
    state: &'a mut SearchState,
}

impl SearchContext<'_> {
    /// Best score for `side` at `depth`, with the move that reaches it.
    ///
    /// The first strictly better move wins ties. The board is back to its
    /// entry state when this returns.
    fn negamax(&mut self, side: Color, depth: usize) -> (i32, Option<Move>) {
        let opponent = side.opponent();
        let mut best_score = MIN_SCORE;
        let mut best_move = None;

        for from in Square::all() {
            if !self.board.cell(from).is_color(side) {
                continue;
            }
            for &to in &self.board.destinations(from) {
                self.state.stats.nodes += 1;
                let mv = Move::new(from, to);
                if self.board.cell(to).holds(opponent, Piece::King) {
                    return (MAX_SCORE, Some(mv));
                }

                let info = self.board.make_move(mv);
                let score = if depth >= self.state.params.depth {
                    self.board.evaluate(side, self.state.params.eval_mode) + self.state.jitter()
                } else {
                    -self.negamax(opponent, depth + 1).0
                };
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                self.board.unmake_move(mv, info);
            }
        }

        (best_score, best_move)
    }
}

/// Search for `side`'s best move to the configured horizon.
///
/// The board is left exactly as it was passed in.
pub fn find_best_move(board: &mut Board, side: Color, state: &mut SearchState) -> SearchResult {
    let start = Instant::now();
    state.stats = SearchStats::default();

    let (score, best_move) = SearchContext {
        board: &mut *board,
        state: &mut *state,
    }
    .negamax(side, 0);

    state.stats.elapsed = start.elapsed();

    #[cfg(feature = "logging")]
    log::debug!(
        "search side={} depth={} score={} best={} nodes={} time={}ms",
        side,
        state.params.depth,
        score,
        best_move.map_or_else(|| "-".to_string(), |mv| mv.to_string()),
        state.stats.nodes,
        state.stats.elapsed.as_millis()
    );

    SearchResult { score, best_move }
}
