//! Text console for playing a game between two humans.
//!
//! Moves and queries are typed as board coordinates (`e2 e4`, `moves e2`).
//! All rule decisions are delegated to [`Game`]; this module only parses
//! lines and prints results.

use std::io::{self, BufRead, Write};

use crate::board::{GameStatus, Square};
use crate::game::Game;

pub mod command;

pub use command::{parse_console_command, ConsoleCommand};

const BANNER: &str = "Simple Console Chess (no castling/en passant). Enter moves like 'e2 e4'.\n\
Commands: 'moves e2' to list moves; 'quit' to exit.\n";

/// Run the console on stdin/stdout until the game ends or the user quits.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&mut Game::new(), stdin.lock(), stdout.lock())
}

/// Drive `game` from `input`, writing everything to `output`.
///
/// Returns when a terminal position is reached, on `quit`, or at end of input.
pub fn run_console<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{BANNER}")?;

    loop {
        write!(output, "{}", game.board())?;
        let side = game.side_to_move();
        match game.status() {
            GameStatus::Checkmate => {
                writeln!(output, "{side} is checkmated. {} wins!", side.opponent())?;
                break;
            }
            GameStatus::Stalemate => {
                writeln!(output, "Stalemate. Draw.")?;
                break;
            }
            GameStatus::Check => writeln!(output, "{side} to move - CHECK.")?,
            GameStatus::Ongoing => writeln!(output, "{side} to move.")?,
        }

        if !prompt_until_move(game, &mut input, &mut output)? {
            break;
        }
    }

    output.flush()
}

/// Read lines until a move is played (true) or input ends / the user quits (false).
fn prompt_until_move<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match parse_console_command(&line) {
            None => {
                writeln!(output, "Enter a move like: e2 e4")?;
            }
            Some(ConsoleCommand::Quit) => return Ok(false),
            Some(ConsoleCommand::Invalid(msg)) => writeln!(output, "{msg}")?,
            Some(ConsoleCommand::Moves(sq)) => print_moves(game, sq, output)?,
            Some(ConsoleCommand::Move(from, to)) => match game.play(from, to) {
                Ok(_) => return Ok(true),
                Err(e) => writeln!(output, "Error: {e}")?,
            },
        }
    }
}

fn print_moves<W: Write>(game: &Game, sq: Square, output: &mut W) -> io::Result<()> {
    let mut targets = game.legal_moves_from(sq);
    targets.sort();
    if targets.is_empty() {
        return writeln!(output, "No legal moves for {sq}");
    }
    let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
    writeln!(output, "Legal moves: {}", list.join(", "))
}
