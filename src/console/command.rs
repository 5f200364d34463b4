use crate::board::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `e2 e4`
    Move(Square, Square),
    /// `moves e2`
    Moves(Square),
    Quit,
    /// Input that could not be understood, with the message to show
    Invalid(&'static str),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "quit" | "exit" => ConsoleCommand::Quit,
        "moves" => {
            if parts.len() != 2 {
                return Some(ConsoleCommand::Invalid("Usage: moves <square>"));
            }
            match parts[1].parse::<Square>() {
                Ok(sq) => ConsoleCommand::Moves(sq),
                Err(_) => ConsoleCommand::Invalid("Bad square."),
            }
        }
        _ => {
            if parts.len() != 2 {
                return Some(ConsoleCommand::Invalid("Enter a move like: e2 e4"));
            }
            match (parts[0].parse::<Square>(), parts[1].parse::<Square>()) {
                (Ok(from), Ok(to)) => ConsoleCommand::Move(from, to),
                _ => ConsoleCommand::Invalid("Bad square."),
            }
        }
    };

    Some(cmd)
}
