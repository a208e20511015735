use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{GameOutcome, Player};

/// Cumulative results across rounds. Field names match the stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "O")]
    pub wins_o: u32,
    #[serde(rename = "X")]
    pub wins_x: u32,
    #[serde(rename = "draw")]
    pub draws: u32,
}

impl ScoreRecord {
    pub fn new(wins_o: u32, wins_x: u32, draws: u32) -> Self {
        Self { wins_o, wins_x, draws }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::O => self.wins_o,
            Player::X => self.wins_x,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins_o
            .saturating_add(self.wins_x)
            .saturating_add(self.draws)
    }

    /// Returns a copy with exactly one counter bumped.
    pub fn with_outcome(self, outcome: GameOutcome) -> Self {
        let mut next = self;
        match outcome {
            GameOutcome::Win(Player::O) => next.wins_o = next.wins_o.saturating_add(1),
            GameOutcome::Win(Player::X) => next.wins_x = next.wins_x.saturating_add(1),
            GameOutcome::Draw => next.draws = next.draws.saturating_add(1),
        }
        next
    }
}
