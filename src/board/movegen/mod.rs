//! Legal move generation.
//!
//! Generation runs in two phases. Each piece family produces pseudo-legal
//! destinations (movement pattern and blocking only); then every candidate is
//! tried on a copy of the board and dropped if the mover's king is attacked
//! afterwards.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Legal destinations for the `color` piece on `from`.
    ///
    /// Empty when `from` is off the board, empty, or holds an opposing piece.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square, color: Color) -> Vec<Square> {
        let piece = match self.piece_at(from) {
            Some((c, piece)) if c == color => piece,
            _ => return Vec::new(),
        };

        let mut targets = Vec::new();
        self.pseudo_destinations(from, color, piece, &mut targets);
        targets.retain(|&to| self.keeps_king_safe(from, to, color));
        targets
    }

    /// Every legal move for `color`, grouped by source square in a8..h1 order.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces(color)
            .flat_map(|(from, _)| {
                self.legal_moves_from(from, color)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// True if `color` has at least one legal move. Stops at the first one found.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(from, _)| !self.legal_moves_from(from, color).is_empty())
    }

    pub(crate) fn pseudo_destinations(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        targets: &mut Vec<Square>,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_targets(from, color, targets),
            Piece::Knight => self.generate_knight_targets(from, color, targets),
            Piece::King => self.generate_king_targets(from, color, targets),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_targets(from, color, piece, targets)
            }
        }
    }

    /// Try `from -> to` on a copy and check the mover's king afterwards.
    ///
    /// The king is searched for on the copy, since it may be the piece that moved.
    /// A side without a king has nothing to expose.
    pub(crate) fn keeps_king_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let mut hypothetical = *self;
        hypothetical.relocate(from, to);
        match hypothetical.find_king(color) {
            Some(king) => !hypothetical.is_square_attacked(king, color.opponent()),
            None => true,
        }
    }

    /// Destination is empty or holds an opposing piece.
    #[inline]
    pub(crate) fn can_land_on(&self, to: Square, color: Color) -> bool {
        match self.piece_at(to) {
            Some((c, _)) => c != color,
            None => true,
        }
    }
}
