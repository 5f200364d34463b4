//! Move execution.

use log::{debug, trace};

use super::{Board, Color, MoveError, Piece, Square};

impl Board {
    /// Validate `from -> to` for `color` and return the resulting board.
    ///
    /// `self` is left untouched. A pawn landing on its promotion row becomes a
    /// queen of the mover's color.
    pub fn apply_move(&self, from: Square, to: Square, color: Color) -> Result<Board, MoveError> {
        if !from.in_bounds() || !to.in_bounds() {
            trace!("rejected {from:?} -> {to:?}: out of bounds");
            return Err(MoveError::OutOfBounds);
        }

        let piece = match self.piece_at(from) {
            Some((c, piece)) if c == color => piece,
            _ => {
                trace!("rejected {from}{to}: no {color} piece on {from}");
                return Err(MoveError::NoOwnPiece);
            }
        };

        if !self.legal_moves_from(from, color).contains(&to) {
            trace!("rejected {from}{to}: not a legal {piece} move");
            return Err(MoveError::IllegalMove);
        }

        if piece == Piece::Pawn && to.row() == color.promotion_row() {
            debug!("{color} pawn {from}{to} promotes to queen");
        } else {
            debug!("{color} {piece} {from}{to}");
        }
        Ok(self.with_move_applied(from, to, color))
    }

    /// Board after `from -> to` with auto-promotion, skipping validation.
    pub(crate) fn with_move_applied(&self, from: Square, to: Square, color: Color) -> Board {
        let mut next = *self;
        let Some((_, piece)) = next.clear_square(from) else {
            return next;
        };
        let placed = if piece == Piece::Pawn && to.row() == color.promotion_row() {
            Piece::Queen
        } else {
            piece
        };
        next.set_piece(to, color, placed);
        next
    }
}
