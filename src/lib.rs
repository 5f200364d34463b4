pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, Color, GameStatus, Move, MoveError, Piece, Square};
pub use game::Game;
