use super::super::attack_tables::king_steps;
use super::super::{Board, Color, Square};

impl Board {
    // No castling: the king only steps to adjacent squares.
    pub(crate) fn generate_king_targets(
        &self,
        from: Square,
        color: Color,
        targets: &mut Vec<Square>,
    ) {
        targets.extend(
            king_steps(from)
                .iter()
                .copied()
                .filter(|&to| self.can_land_on(to, color)),
        );
    }
}
