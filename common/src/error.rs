use thiserror::Error;

/// Why a move was rejected. The game state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Game is already over")]
    GameOver,

    #[error("Cell {0} is out of range (expected 0-8)")]
    OutOfRange(usize),

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),
}

/// Storage failures. None of these are fatal: the in-memory value stays
/// authoritative and callers retry on the next write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Failed to read storage: {0}")]
    Read(String),

    #[error("Failed to write storage: {0}")]
    Write(String),

    #[error("Failed to serialize: {0}")]
    Serialize(String),

    #[error("Failed to deserialize: {0}")]
    Deserialize(String),

    #[error("Validation error: {0}")]
    Invalid(String),
}
