//! Per-piece parallel move generation.
//!
//! Each worker owns its own copy of the board, so no hypothetical position is
//! ever visible to another worker. Results are only merged after every worker
//! has finished.

use std::thread;

use parking_lot::Mutex;

use super::{Board, Color, Move};

impl Board {
    /// Same result, in the same order, as [`Board::all_legal_moves`], with one
    /// scoped thread per `color` piece.
    #[must_use]
    pub fn all_legal_moves_parallel(&self, color: Color) -> Vec<Move> {
        let results: Mutex<Vec<(usize, Vec<Move>)>> = Mutex::new(Vec::new());

        thread::scope(|scope| {
            for (ordinal, (from, _)) in self.pieces(color).enumerate() {
                let board = *self;
                let results = &results;
                scope.spawn(move || {
                    let moves: Vec<Move> = board
                        .legal_moves_from(from, color)
                        .into_iter()
                        .map(|to| Move::new(from, to))
                        .collect();
                    results.lock().push((ordinal, moves));
                });
            }
        });

        let mut per_piece = results.into_inner();
        per_piece.sort_unstable_by_key(|(ordinal, _)| *ordinal);
        per_piece.into_iter().flat_map(|(_, moves)| moves).collect()
    }
}
