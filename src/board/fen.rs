//! Piece placement text (the first field of FEN).
//!
//! Ranks are listed from 8 down to 1, separated by `/`. Digits 1-8 count
//! empty squares, uppercase letters are White and lowercase Black. This maps
//! directly onto the board's row order, since row 0 is rank 8.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a piece placement such as `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// Any trailing FEN fields (side to move, castling, ...) are ignored.
    pub fn from_placement(text: &str) -> Result<Self, FenError> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if matches!(c, '1'..='8') {
                    col += c as usize - '0' as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankWidth {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankWidth {
                    rank: 8 - row,
                    files: col,
                });
            }
        }
        Ok(board)
    }

    /// Render the piece placement, the inverse of [`Board::from_placement`].
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_board_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}
