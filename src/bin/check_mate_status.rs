use std::env;
use std::process::ExitCode;

use chess_rules::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    if let Err((idx, msg)) = game.play_all(args.iter().skip(1).map(String::as_str)) {
        eprintln!("move {} ({}) rejected: {}", idx + 1, args[idx + 1], msg);
        return ExitCode::FAILURE;
    }

    let side = game.side_to_move();
    let board = game.board();
    let legal_moves = board.all_legal_moves(side);
    println!("side_to_move: {}", side.to_string().to_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.in_check(side));
    println!("checkmate: {}", board.is_checkmate(side));
    println!("stalemate: {}", board.is_stalemate(side));
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
