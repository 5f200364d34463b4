//! Perft: count leaf positions of the legal move tree.

use super::{Board, Color};

impl Board {
    /// Number of legal move sequences of length `depth` starting with `color` to move.
    #[must_use]
    pub fn perft(&self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|m| {
                self.with_move_applied(m.from, m.to, color)
                    .perft(color.opponent(), depth - 1)
            })
            .sum()
    }
}
