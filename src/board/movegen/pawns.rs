use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn generate_pawn_targets(
        &self,
        from: Square,
        color: Color,
        targets: &mut Vec<Square>,
    ) {
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                targets.push(forward_sq);
                if from.row() == color.pawn_start_row() {
                    if let Some(double_sq) = from.offset(2 * dir, 0) {
                        if self.is_empty(double_sq) {
                            targets.push(double_sq);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target_sq) = from.offset(dir, dc) {
                if let Some((target_color, _)) = self.piece_at(target_sq) {
                    if target_color != color {
                        targets.push(target_sq);
                    }
                }
            }
        }
    }
}
