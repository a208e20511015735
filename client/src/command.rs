/// A line of player input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark(usize),
    Restart,
    ShowScores,
    ResetScores,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let input = line.trim();
    if let Ok(cell) = input.parse::<usize>() {
        return Ok(ClientCommand::PlaceMark(cell));
    }

    match input.to_ascii_lowercase().as_str() {
        "r" | "restart" => Ok(ClientCommand::Restart),
        "s" | "scores" => Ok(ClientCommand::ShowScores),
        "reset" => Ok(ClientCommand::ResetScores),
        "h" | "help" | "?" => Ok(ClientCommand::Help),
        "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
        "" => Err("Enter a cell number (0-8) or 'h' for help".to_string()),
        other => Err(format!("Unknown command '{}', type 'h' for help", other)),
    }
}

pub fn is_confirmation(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8       place your mark (cells are numbered left to right, top to bottom)
  r         restart the round
  s         show scores
  reset     reset all scores
  h         show this help
  q         quit";
