//! Board representation and the rules of the game.
//!
//! A mailbox 8x8 board with legal move generation, move application and
//! check / checkmate / stalemate classification. Castling, en passant and
//! draw rules are not part of this variant; pawns always promote to a queen.
//!
//! Every operation is a pure function of the board and the color passed in.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, GameStatus};
//!
//! let board = Board::new();
//! let moves = board.all_legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! let next = board.apply_move(e2, e4, Color::White).unwrap();
//! assert_eq!(next.status(Color::Black), GameStatus::Ongoing);
//! ```

mod apply;
mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod movegen;
mod parallel;
mod perft;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use state::Board;
pub use status::GameStatus;
pub use types::{Color, Move, Piece, Square};
