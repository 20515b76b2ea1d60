//! Human-versus-engine game session.
//!
//! Wraps a `Board` with the protocol a front end needs: validate and play a
//! human move, ask the engine for its reply, let the engine move on the
//! human's behalf, and take back the last human move. Nothing here renders
//! or parses input.
//!
//! A human move is accepted in two steps: the destination must be
//! pseudo-legal for the piece, and after playing it the human's own king must
//! not be attacked. Otherwise the board is restored and the move refused.

mod config;

use crate::board::{
    find_best_move, Board, ConfigError, Color, Move, MoveError, Piece, SearchState, SpecialMove,
};
pub use config::GameConfig;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// `winner` captured the enemy king.
    KingCaptured { winner: Color },
    /// `loser` had no move to play.
    Resigned { loser: Color },
}

/// What an applied move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub color: Color,
    pub captured: Option<Piece>,
    pub special: SpecialMove,
    /// The opponent's king is attacked after the move.
    pub gives_check: bool,
}

/// Result of asking the engine to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineReply {
    Moved {
        report: MoveReport,
        score: i32,
        nodes: u64,
    },
    /// The engine found nothing to play and gives up.
    Resigned,
    /// The engine could take the human king: the human's last move left it
    /// attacked. That move has been taken back and the human moves again.
    KingExposed { capture: Move },
}

/// Check state of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub in_check: bool,
    pub checkmate: bool,
}

#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    captured: [Vec<Piece>; 2],
    move_number: u32,
    outcome: Option<GameOutcome>,
}

pub struct Game {
    board: Board,
    config: GameConfig,
    search: SearchState,
    /// Pieces lost by each color, indexed by `Color::index`
    captured: [Vec<Piece>; 2],
    /// Starts at 1; odd numbers are White's turn
    move_number: u32,
    previous: Option<Snapshot>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game from the standard position.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let search = SearchState::new(config.search.clone())?;
        Ok(Game {
            board: Board::new(),
            config,
            search,
            captured: [Vec::new(), Vec::new()],
            move_number: 1,
            previous: None,
            outcome: None,
        })
    }

    /// Start from an arbitrary position with `to_move` on turn.
    pub fn from_board(config: GameConfig, board: Board, to_move: Color) -> Result<Self, ConfigError> {
        let mut game = Game::new(config)?;
        game.board = board;
        if to_move == Color::Black {
            game.move_number = 2;
        }
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.move_number % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Pieces `color` has lost so far, in capture order.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Nodes visited by the most recent engine search
    #[must_use]
    pub fn last_search_nodes(&self) -> u64 {
        self.search.stats().nodes
    }

    /// Check and checkmate state of `color`. Refreshes the king's sticky
    /// checked flag.
    pub fn status(&mut self, color: Color) -> Status {
        let in_check = self.board.is_in_check(color);
        let checkmate = in_check && !self.board.has_legal_move(color);
        Status {
            in_check,
            checkmate,
        }
    }

    /// Validate and play a human move.
    pub fn play_human(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let human = self.config.human;
        self.ensure_turn(human)?;

        if !self.board.cell(mv.from).is_color(human) {
            return Err(MoveError::NotYourPiece {
                square: mv.from,
                color: human,
            });
        }
        if !self.config.cheat && !self.board.is_pseudo_legal_destination(mv.from, mv.to) {
            #[cfg(feature = "logging")]
            log::trace!("rejected {mv}: not a destination of the piece");
            return Err(MoveError::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }

        let snapshot = self.snapshot();
        let report = self.apply(mv, human);
        if self.board.king_attacked(human) {
            self.restore(snapshot);
            #[cfg(feature = "logging")]
            log::trace!("rejected {mv}: own king left in check");
            return Err(MoveError::LeavesKingInCheck {
                from: mv.from,
                to: mv.to,
            });
        }
        self.previous = Some(snapshot);
        Ok(report)
    }

    /// Let the engine choose and play the human's move.
    ///
    /// The chosen move is not checked for own-king safety; if it exposes the
    /// king, the engine's reply reports `EngineReply::KingExposed`.
    pub fn play_for_human(&mut self) -> Result<MoveReport, MoveError> {
        let human = self.config.human;
        self.ensure_turn(human)?;

        self.board.is_in_check(human);
        let result = find_best_move(&mut self.board, human, &mut self.search);
        let Some(mv) = result.best_move.filter(|_| !result.is_no_move()) else {
            return Err(MoveError::NoMovesAvailable { color: human });
        };

        let snapshot = self.snapshot();
        let report = self.apply(mv, human);
        self.previous = Some(snapshot);
        Ok(report)
    }

    /// Search and play the engine's move.
    pub fn play_engine(&mut self) -> Result<EngineReply, MoveError> {
        let engine = self.config.engine();
        self.ensure_turn(engine)?;

        self.board.is_in_check(engine);
        let result = find_best_move(&mut self.board, engine, &mut self.search);
        let nodes = self.search.stats().nodes;

        let Some(mv) = result.best_move.filter(|_| !result.is_no_move()) else {
            self.outcome = Some(GameOutcome::Resigned { loser: engine });
            #[cfg(feature = "logging")]
            log::info!("{engine} has no move and resigns");
            return Ok(EngineReply::Resigned);
        };

        if self.board.cell(mv.to).holds(self.config.human, Piece::King) && self.undo() {
            #[cfg(feature = "logging")]
            log::info!("{mv} would take the king; human move taken back");
            return Ok(EngineReply::KingExposed { capture: mv });
        }

        let report = self.apply(mv, engine);
        Ok(EngineReply::Moved {
            report,
            score: result.score,
            nodes,
        })
    }

    /// Restore the position from before the last human move, undoing the
    /// engine's reply too if it has been played. Only one level is kept.
    pub fn undo(&mut self) -> bool {
        match self.previous.take() {
            Some(snapshot) => {
                self.restore(snapshot);
                #[cfg(feature = "logging")]
                log::info!("undo to move {}", self.move_number);
                true
            }
            None => false,
        }
    }

    fn ensure_turn(&self, color: Color) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.side_to_move() != color {
            return Err(MoveError::OutOfTurn { color });
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move, color: Color) -> MoveReport {
        let info = self.board.make_move(mv);
        let captured = info.captured();
        if let Some(piece) = captured {
            self.captured[color.opponent().index()].push(piece);
            if piece == Piece::King {
                self.outcome = Some(GameOutcome::KingCaptured { winner: color });
                #[cfg(feature = "logging")]
                log::info!("{color} captured the king with {mv}");
            }
        }
        self.move_number += 1;
        let gives_check = self.board.is_in_check(color.opponent());
        MoveReport {
            mv,
            color,
            captured,
            special: info.special(),
            gives_check,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            captured: self.captured.clone(),
            move_number: self.move_number,
            outcome: self.outcome,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.captured = snapshot.captured;
        self.move_number = snapshot.move_number;
        self.outcome = snapshot.outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SearchParams;

    fn sq(name: &str) -> crate::board::Square {
        name.parse().expect("valid square")
    }

    #[test]
    fn black_to_move_starts_on_even_number() {
        let game = Game::from_board(GameConfig::default(), Board::new(), Color::Black)
            .expect("default config is valid");
        assert_eq!(game.move_number(), 2);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.config().engine(), Color::Black);
    }

    #[test]
    fn invalid_depth_is_rejected() {
        let mut config = GameConfig::default();
        config.search.depth = 99;
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn apply_tallies_captures_by_loser() {
        let mut game = Game::new(GameConfig::default()).expect("default config is valid");
        game.apply(Move::new(sq("e2"), sq("e4")), Color::White);
        game.apply(Move::new(sq("d7"), sq("d5")), Color::Black);
        let report = game.apply(Move::new(sq("e4"), sq("d5")), Color::White);

        assert_eq!(report.captured, Some(Piece::Pawn));
        assert_eq!(game.captured(Color::Black), &[Piece::Pawn]);
        assert!(game.captured(Color::White).is_empty());
        assert_eq!(game.move_number(), 4);
    }

    #[test]
    fn restore_returns_every_field() {
        let mut game = Game::new(GameConfig::default()).expect("default config is valid");
        let snapshot = game.snapshot();
        game.apply(Move::new(sq("g1"), sq("f3")), Color::White);
        game.outcome = Some(GameOutcome::Resigned {
            loser: Color::Black,
        });

        game.restore(snapshot);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn king_exposed_undoes_the_human_move() {
        let board = Board::from_fen("k3r3/8/8/8/8/8/4R3/4K3");
        let config = GameConfig::default().with_search(
            SearchParams::default()
                .with_depth(0)
                .expect("depth in range")
                .with_seed(5),
        );
        let mut game = Game::from_board(config, board.clone(), Color::White)
            .expect("config is valid");

        // Bypass the human-move checks to reach a position with the king hanging.
        game.previous = Some(game.snapshot());
        game.apply(Move::new(sq("e2"), sq("h2")), Color::White);

        let reply = game.play_engine().expect("engine to move");
        assert_eq!(
            reply,
            EngineReply::KingExposed {
                capture: Move::new(sq("e8"), sq("e1"))
            }
        );
        assert_eq!(*game.board(), board);
        assert_eq!(game.side_to_move(), Color::White);
    }
}
