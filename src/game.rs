//! A game in progress: the current board, whose turn it is, and the moves so far.

use log::info;

use crate::board::{Board, Color, GameStatus, Move, MoveError, Square};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status(self.side_to_move)
    }

    /// Legal destinations from `from` for the side to move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        self.board.legal_moves_from(from, self.side_to_move)
    }

    /// Play `from -> to` for the side to move and return the status for the next side.
    ///
    /// On error nothing changes and the same side is still to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<GameStatus, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board = self.board.apply_move(from, to, self.side_to_move)?;
        self.history.push(Move::new(from, to));
        self.side_to_move = self.side_to_move.opponent();

        let status = self.status();
        if status.is_terminal() {
            info!(
                "game over after {} moves: {} is in {}",
                self.history.len(),
                self.side_to_move,
                status
            );
        }
        Ok(status)
    }

    /// Play a sequence of coordinate moves such as `["f2f3", "e7e5"]`.
    ///
    /// Stops at the first move that fails to parse or is refused, returning its index.
    pub fn play_all<'a, I>(&mut self, moves: I) -> Result<GameStatus, (usize, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut status = self.status();
        for (idx, text) in moves.into_iter().enumerate() {
            let mv: Move = text.parse().map_err(|e| (idx, format!("{e}")))?;
            status = self.play(mv.from, mv.to).map_err(|e| (idx, e.to_string()))?;
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_turn_alternates_on_success_only() {
        let mut game = Game::new();
        assert_eq!(game.play(sq("e2"), sq("e5")), Err(MoveError::IllegalMove));
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());

        assert_eq!(game.play(sq("e2"), sq("e4")), Ok(GameStatus::Ongoing));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history(), &[Move::new(sq("e2"), sq("e4"))]);

        assert_eq!(game.play(sq("d2"), sq("d4")), Err(MoveError::NoOwnPiece));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut game = Game::new();
        let status = game.play_all(["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();
        assert_eq!(status, GameStatus::Checkmate);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.play(sq("a2"), sq("a3")), Err(MoveError::GameOver));
    }

    #[test]
    fn test_play_all_reports_failing_index() {
        let mut game = Game::new();
        let err = game.play_all(["e2e4", "e2e4"]).unwrap_err();
        assert_eq!(err.0, 1);
        assert_eq!(game.history().len(), 1);

        let err = game.play_all(["zz"]).unwrap_err();
        assert_eq!(err.0, 0);
    }
}
