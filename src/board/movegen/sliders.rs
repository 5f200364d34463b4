use super::super::attack_tables::{ray, DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use super::super::{Board, Color, Piece, Square};

impl Board {
    pub(crate) fn generate_slider_targets(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        targets: &mut Vec<Square>,
    ) {
        let diagonals: &[(isize, isize)] = if piece.attacks_diagonally() {
            &DIAGONAL_DIRS
        } else {
            &[]
        };
        let orthogonals: &[(isize, isize)] = if piece.attacks_straight() {
            &ORTHOGONAL_DIRS
        } else {
            &[]
        };

        for &dir in diagonals.iter().chain(orthogonals) {
            for to in ray(from, dir) {
                match self.piece_at(to) {
                    None => targets.push(to),
                    Some((c, _)) => {
                        if c != color {
                            targets.push(to);
                        }
                        break;
                    }
                }
            }
        }
    }
}
