use std::io::{self, BufRead, Write};

use tictactoe_common::config::{ConfigSerializer, ContentProvider};
use tictactoe_common::games::tictactoe::GameSession;
use tictactoe_common::log;
use tictactoe_common::scores::StoredScores;

use crate::command::{ClientCommand, HELP_TEXT, is_confirmation, parse_command};
use crate::game_ui::tictactoe::render_scores;

pub struct RunnerSettings {
    pub confirm_reset: bool,
}

/// Feeds player input into the session until `quit` or end of input.
pub fn run_tictactoe_game<TContentProvider, TSerializer, TInput>(
    session: &mut GameSession<TContentProvider, TSerializer>,
    input: &mut TInput,
    settings: &RunnerSettings,
) -> io::Result<()>
where
    TContentProvider: ContentProvider,
    TSerializer: ConfigSerializer<StoredScores>,
    TInput: BufRead,
{
    session.start();

    while let Some(line) = read_line(input)? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark(cell) => {
                if let Err(e) = session.submit_move(cell) {
                    // Already shown to the player through the observer.
                    log!("Rejected move at cell {}: {}", cell, e);
                }
            }
            ClientCommand::Restart => session.restart(),
            ClientCommand::ShowScores => println!("{}", render_scores(&session.scores())),
            ClientCommand::ResetScores => {
                if !settings.confirm_reset || confirm_reset(input)? {
                    session.reset_scores();
                    println!("Scores reset!");
                } else {
                    println!("Scores kept");
                }
            }
            ClientCommand::Help => println!("{}", HELP_TEXT),
            ClientCommand::Quit => break,
        }
    }

    if session.score_store().is_dirty() {
        log!("Exiting with unsaved scores");
    }
    Ok(())
}

fn confirm_reset<TInput: BufRead>(input: &mut TInput) -> io::Result<bool> {
    print!("Are you sure you want to reset all scores? This cannot be undone. [y/N] ");
    io::stdout().flush()?;
    Ok(read_line(input)?.is_some_and(|answer| is_confirmation(&answer)))
}

fn read_line<TInput: BufRead>(input: &mut TInput) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
