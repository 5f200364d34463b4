//! Precomputed destination tables for leaper pieces and ray directions for sliders.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn build_jump_table(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    (0..64)
        .map(|idx| {
            let from = Square::from_index(idx);
            deltas
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        })
        .collect()
}

/// Knight destinations per square index (only on-board squares).
pub(crate) static KNIGHT_JUMPS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| build_jump_table(&KNIGHT_DELTAS));

/// King destinations per square index (only on-board squares).
pub(crate) static KING_STEPS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| build_jump_table(&KING_DELTAS));

#[inline]
pub(crate) fn knight_jumps(from: Square) -> &'static [Square] {
    &KNIGHT_JUMPS[from.index()]
}

#[inline]
pub(crate) fn king_steps(from: Square) -> &'static [Square] {
    &KING_STEPS[from.index()]
}

/// Walk a ray from `from` (exclusive) until the board edge.
pub(crate) fn ray(from: Square, (dr, dc): (isize, isize)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(dr, dc), move |sq| sq.offset(dr, dc))
}
