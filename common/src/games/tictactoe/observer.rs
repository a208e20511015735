use crate::error::MoveError;
use crate::scores::ScoreRecord;
use super::game_state::GameState;
use super::types::MoveResult;

/// Receives structured events from a `GameSession`. Every hook defaults to a
/// no-op so presentation layers only implement what they render.
pub trait GameObserver {
    fn on_new_game(&mut self, _state: &GameState) {}

    fn on_move(&mut self, _state: &GameState, _cell: usize, _result: &MoveResult) {}

    fn on_invalid_move(&mut self, _cell: usize, _error: &MoveError) {}

    fn on_scores_changed(&mut self, _scores: &ScoreRecord) {}
}
