use std::fmt;

/// One of the 8 winning triples, as cell indices.
pub type WinLine = [usize; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    O,
    X,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::O => Mark::O,
            Player::X => Mark::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    O,
    X,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::O => Some(Player::O),
            Mark::X => Some(Player::X),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "."),
            Mark::O => write!(f, "O"),
            Mark::X => write!(f, "X"),
        }
    }
}

/// Lifecycle of a round. `InProgress` is the only non-terminal status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Result of a finished round, as counted by the score store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// What an accepted move led to. Rejected moves surface as `MoveError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Win { winner: Player, line: WinLine },
    Draw,
    Continue { next_turn: Player },
}

impl MoveResult {
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            MoveResult::Win { winner, .. } => Some(GameOutcome::Win(*winner)),
            MoveResult::Draw => Some(GameOutcome::Draw),
            MoveResult::Continue { .. } => None,
        }
    }
}
