mod command;
mod config;
mod game_ui;
mod offline;

use std::io;

use clap::Parser;
use tictactoe_common::games::tictactoe::GameSession;
use tictactoe_common::scores::ScoreStore;
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use game_ui::tictactoe::TicTacToeGameUi;
use offline::{RunnerSettings, run_tictactoe_game};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Two-player tic-tac-toe with persistent scores")]
struct Args {
    /// Path to the client config file (defaults to one next to the executable).
    #[arg(long)]
    config: Option<String>,

    /// Where scores are stored, overriding the config file.
    #[arg(long)]
    scores: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Reset scores without asking.
    #[arg(long)]
    yes: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_result = get_config_manager(args.config.as_deref()).get_config();
    let config = config_result.clone().unwrap_or_default();

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    if let Err(e) = config_result {
        log!("Failed to load config, using defaults: {}", e);
    }

    let scores_path = args.scores.unwrap_or_else(|| config.scores.location.clone());
    log!("Scores stored at {}", scores_path);

    let mut session = GameSession::new(ScoreStore::from_yaml_file(&scores_path));
    session.subscribe(Box::new(TicTacToeGameUi::new()));

    let settings = RunnerSettings {
        confirm_reset: confirm_reset(&config, args.yes),
    };
    let stdin = io::stdin();
    run_tictactoe_game(&mut session, &mut stdin.lock(), &settings)?;

    log!("Goodbye");
    Ok(())
}

fn confirm_reset(config: &Config, skip_confirmation: bool) -> bool {
    config.scores.confirm_reset && !skip_confirmation
}
