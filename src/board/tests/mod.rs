//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal destinations per piece, pins and blocked rays
//! - `apply.rs` - Move validation and auto-promotion
//! - `status.rs` - Check, checkmate and stalemate positions
//! - `perft.rs` - Move tree counts against known values
//! - `parallel.rs` - Parallel generation agrees with sequential generation
//! - `proptest.rs` - Property-based tests over random games


use crate::board::{Board, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn position(placement: &str) -> Board {
    Board::from_placement(placement).expect("valid placement")
}

pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    sorted(names.iter().map(|s| sq(s)).collect())
}
