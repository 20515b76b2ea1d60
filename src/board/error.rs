//! Error types for board and game operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty FEN string
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Placement field does not describe exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than eight files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} in FEN covers {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for invalid engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Search horizon at or beyond the supported maximum
    DepthOutOfRange { depth: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DepthOutOfRange { depth, max } => {
                write!(f, "Search depth {depth} out of range (must be below {max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for moves rejected by a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// It is the other side's turn
    OutOfTurn { color: Color },
    /// The source square does not hold a piece of the moving side
    NotYourPiece { square: Square, color: Color },
    /// The piece cannot reach the destination
    IllegalDestination { from: Square, to: Square },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck { from: Square, to: Square },
    /// The side to move has no move at all
    NoMovesAvailable { color: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::OutOfTurn { color } => write!(f, "It is not {color}'s turn"),
            MoveError::NotYourPiece { square, color } => {
                write!(f, "No {color} piece on {square}")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::LeavesKingInCheck { from, to } => {
                write!(f, "Move {from}{to} leaves the king in check")
            }
            MoveError::NoMovesAvailable { color } => {
                write!(f, "{color} has no moves available")
            }
        }
    }
}

impl std::error::Error for MoveError {}
