use super::super::attack_tables::knight_jumps;
use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn generate_knight_targets(
        &self,
        from: Square,
        color: Color,
        targets: &mut Vec<Square>,
    ) {
        targets.extend(
            knight_jumps(from)
                .iter()
                .copied()
                .filter(|&to| self.can_land_on(to, color)),
        );
    }
}
