pub mod config;
pub mod error;
pub mod games;
pub mod logger;
pub mod scores;

pub use error::{MoveError, PersistenceError};
