use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

use chess_rules::console::run_console;
use chess_rules::{Color, Game, GameStatus};

fn run(input: &str) -> (Game, String) {
    let mut game = Game::new();
    let mut output = Vec::new();
    run_console(&mut game, Cursor::new(input.as_bytes()), &mut output).expect("console io");
    (game, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn console_plays_fools_mate() {
    let (game, output) = run("f2 f3\ne7 e5\ng2 g4\nd8 h4\n");
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert!(output.contains("White is checkmated. Black wins!"));
    assert!(output.contains("Black to move."));
}

#[test]
fn console_reports_errors_without_advancing() {
    let (game, output) = run("e2 e5\ne7 e5\nd4 d5\nquit\n");
    assert_eq!(game.side_to_move(), Color::White);
    assert!(game.history().is_empty());
    assert!(output.contains("Error: Illegal move."));
    assert!(output.contains("Error: No piece of yours on source."));
}

#[test]
fn console_lists_moves() {
    let (_, output) = run("moves g1\nmoves e4\nquit\n");
    assert!(output.contains("Legal moves: f3, h3"));
    assert!(output.contains("No legal moves for e4"));
}

#[test]
fn console_announces_check() {
    let (_, output) = run("e2 e4\nd7 d6\nf1 b5\nquit\n");
    assert!(output.contains("Black to move - CHECK."));
}

#[test]
fn console_prints_board() {
    let (_, output) = run("quit\n");
    assert!(output.contains("  +-----------------+"));
    assert!(output.contains("8 | r n b q k b n r |"));
    assert!(output.contains("1 | R N B Q K B N R |"));
    assert!(output.contains("    a b c d e f g h"));
}

#[test]
fn console_binary_stops_at_end_of_input() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"f2 f3\ne7 e5\ng2 g4\nd8 h4\n").unwrap();
    }

    let out = child.wait_with_output().expect("console did not exit");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("White is checkmated. Black wins!"));
}

#[test]
fn check_mate_status_binary() {
    let exe = env!("CARGO_BIN_EXE_check_mate_status");
    let out = Command::new(exe)
        .args(["f2f3", "e7e5", "g2g4", "d8h4"])
        .output()
        .expect("failed to run check_mate_status");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("side_to_move: white"));
    assert!(stdout.contains("legal_moves: 0"));
    assert!(stdout.contains("checkmate: true"));
    assert!(stdout.contains("stalemate: false"));

    let out = Command::new(exe)
        .args(["e2e5"])
        .output()
        .expect("failed to run check_mate_status");
    assert!(!out.status.success());
}
