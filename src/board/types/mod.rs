//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rule engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate, row 0 being rank 8
//! - `Move` - source/destination pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
