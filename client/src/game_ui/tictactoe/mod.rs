use tictactoe_common::MoveError;
use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, CELL_COUNT, GameObserver, GameState, GameStatus, Mark, MoveResult,
};
use tictactoe_common::scores::ScoreRecord;

/// Prints the table to stdout as events arrive.
#[derive(Default)]
pub struct TicTacToeGameUi;

impl TicTacToeGameUi {
    pub fn new() -> Self {
        Self
    }
}

impl GameObserver for TicTacToeGameUi {
    fn on_new_game(&mut self, state: &GameState) {
        println!("\nNew round!");
        println!("{}", render_board(state));
        println!("{}", render_turn(state));
    }

    fn on_move(&mut self, state: &GameState, _cell: usize, result: &MoveResult) {
        println!("\n{}", render_board(state));
        println!("{}", render_result(result));
    }

    fn on_invalid_move(&mut self, _cell: usize, error: &MoveError) {
        println!("{}", error);
    }

    fn on_scores_changed(&mut self, scores: &ScoreRecord) {
        println!("{}", render_scores(scores));
    }
}

fn render_cell(state: &GameState, index: usize) -> String {
    let highlighted = state
        .winning_line()
        .is_some_and(|line| line.contains(&index));
    match state.board().get(index) {
        Some(Mark::Empty) | None => format!(" {} ", index),
        Some(mark) if highlighted => format!("[{}]", mark),
        Some(mark) => format!(" {} ", mark),
    }
}

/// Empty cells show their index; cells of a winning line are bracketed.
pub fn render_board(state: &GameState) -> String {
    let rows: Vec<String> = (0..CELL_COUNT)
        .collect::<Vec<_>>()
        .chunks(BOARD_SIZE)
        .map(|row| {
            row.iter()
                .map(|&index| render_cell(state, index))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_turn(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("Player {} to move", state.current_turn()),
        GameStatus::Won(player) => format!("Player {} won this round, press 'r' to play again", player),
        GameStatus::Draw => "Round drawn, press 'r' to play again".to_string(),
    }
}

pub fn render_result(result: &MoveResult) -> String {
    match result {
        MoveResult::Win { winner, .. } => format!("Player {} Wins!", winner),
        MoveResult::Draw => "It's a Draw!".to_string(),
        MoveResult::Continue { next_turn } => format!("Player {} to move", next_turn),
    }
}

pub fn render_scores(scores: &ScoreRecord) -> String {
    format!("Scores  O: {}  X: {}  Draws: {}", scores.wins_o, scores.wins_x, scores.draws)
}
