mod tictactoe_runner;

pub use tictactoe_runner::{RunnerSettings, run_tictactoe_game};
