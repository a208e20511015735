mod config;
mod scores_config;

pub use config::{Config, get_config_manager};
pub use scores_config::ScoresConfig;
