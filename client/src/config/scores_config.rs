use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScoresConfig {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_confirm_reset")]
    pub confirm_reset: bool,
}

fn default_location() -> String {
    "tictactoe_scores.yaml".to_string()
}

fn default_confirm_reset() -> bool {
    true
}

impl Validate for ScoresConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("scores location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            confirm_reset: true,
        }
    }
}
