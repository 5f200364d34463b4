//! Attack detection.
//!
//! Answers "could `by` capture on this square next move", ignoring turn order
//! and whether the capture would be legal.

use super::attack_tables::{king_steps, knight_jumps, ray, DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if any `by` piece attacks `target`. Off-board targets are never attacked.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        if !target.in_bounds() {
            return false;
        }

        // A `by` pawn attacks from one row behind the target, seen from its own side.
        let pawn_row = -by.pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = target.offset(pawn_row, dc) {
                if self.piece_at(sq) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if knight_jumps(target)
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if king_steps(target)
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::King)))
        {
            return true;
        }

        self.slider_attacks(target, by, &DIAGONAL_DIRS, Piece::attacks_diagonally)
            || self.slider_attacks(target, by, &ORTHOGONAL_DIRS, Piece::attacks_straight)
    }

    /// Scan each ray outward from `target`; only the first occupied square on a ray counts.
    fn slider_attacks(
        &self,
        target: Square,
        by: Color,
        dirs: &[(isize, isize)],
        moves_along: fn(Piece) -> bool,
    ) -> bool {
        dirs.iter().any(|&dir| {
            ray(target, dir)
                .find_map(|sq| self.piece_at(sq))
                .is_some_and(|(color, piece)| color == by && moves_along(piece))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_diagonally_forward() {
        let mut board = Board::empty();
        board.set_piece(sq("e4"), Color::White, Piece::Pawn);
        assert!(board.is_square_attacked(sq("d5"), Color::White));
        assert!(board.is_square_attacked(sq("f5"), Color::White));
        assert!(!board.is_square_attacked(sq("e5"), Color::White));
        assert!(!board.is_square_attacked(sq("d3"), Color::White));

        let mut board = Board::empty();
        board.set_piece(sq("e5"), Color::Black, Piece::Pawn);
        assert!(board.is_square_attacked(sq("d4"), Color::Black));
        assert!(board.is_square_attacked(sq("f4"), Color::Black));
        assert!(!board.is_square_attacked(sq("d6"), Color::Black));
    }

    #[test]
    fn test_attack_ignores_other_color() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Color::Black, Piece::Knight);
        assert!(board.is_square_attacked(sq("e6"), Color::Black));
        assert!(!board.is_square_attacked(sq("e6"), Color::White));
    }

    #[test]
    fn test_ray_blocked_by_first_piece() {
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Color::White, Piece::Rook);
        board.set_piece(sq("a4"), Color::Black, Piece::Pawn);
        assert!(board.is_square_attacked(sq("a3"), Color::White));
        assert!(board.is_square_attacked(sq("a4"), Color::White));
        assert!(!board.is_square_attacked(sq("a5"), Color::White));
    }

    #[test]
    fn test_blocker_of_wrong_kind_ends_ray() {
        // A rook on the diagonal does not attack, and hides the bishop behind it.
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Color::White, Piece::Bishop);
        board.set_piece(sq("c3"), Color::White, Piece::Rook);
        assert!(board.is_square_attacked(sq("b2"), Color::White));
        assert!(!board.is_square_attacked(sq("d4"), Color::White));
    }

    #[test]
    fn test_queen_attacks_both_ways() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Color::Black, Piece::Queen);
        assert!(board.is_square_attacked(sq("h8"), Color::Black));
        assert!(board.is_square_attacked(sq("d1"), Color::Black));
        assert!(!board.is_square_attacked(sq("e6"), Color::Black));
    }

    #[test]
    fn test_king_attacks_adjacent() {
        let mut board = Board::empty();
        board.set_piece(sq("e1"), Color::White, Piece::King);
        assert!(board.is_square_attacked(sq("f2"), Color::White));
        assert!(!board.is_square_attacked(sq("e3"), Color::White));
    }

    #[test]
    fn test_off_board_target_not_attacked() {
        let board = Board::new();
        assert!(!board.is_square_attacked(Square(8, 0), Color::White));
    }

    #[test]
    fn test_start_position_third_rank_covered() {
        let board = Board::new();
        for col in 0..8 {
            assert!(board.is_square_attacked(Square(5, col), Color::White));
            assert!(board.is_square_attacked(Square(2, col), Color::Black));
            assert!(!board.is_square_attacked(Square(4, col), Color::White));
        }
    }
}
