use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]` with row 0 = rank 8.
///
/// The board carries no side to move; every query takes the color it is
/// asked about. Boards are plain values: hypothetical positions are built on
/// copies and never touch the board they came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard initial arrangement.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.set_piece(Square(color.back_row(), col), color, *piece);
                board.set_piece(Square(color.pawn_start_row(), col), color, Piece::Pawn);
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if sq.in_bounds() {
            self.squares[sq.0][sq.1]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever was there. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if sq.in_bounds() {
            self.squares[sq.0][sq.1] = Some((color, piece));
        }
    }

    /// Remove and return the piece on `sq`.
    pub fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        if sq.in_bounds() {
            self.squares[sq.0][sq.1].take()
        } else {
            None
        }
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`. No rule checks.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let moving = self.squares[from.0][from.1].take();
        self.squares[to.0][to.1] = moving;
    }

    /// Full-board scan for `color`'s king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// All pieces of `color` with their squares, a8 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Number of `color` pieces of the given kind.
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces(color).filter(|&(_, p)| p == piece).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some((color, piece)) => write!(f, " {}", piece.to_board_char(color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}
