//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Cell` and `PieceCode` - per-square contents with move history
//! - `Move`, `SpecialMove`, `UnmakeInfo` and `DestinationList`

mod cell;
mod moves;
mod piece;
mod square;

pub use cell::{Cell, PieceCode};
pub use moves::{DestinationList, Move, SpecialMove, UnmakeInfo, MAX_DESTINATIONS};
pub use piece::{Color, Piece};
pub use square::Square;
