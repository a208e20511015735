use crate::error::MoveError;
use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, MoveResult, Player, WinLine};
use super::win_detector::check_win_with_line;

/// State of a single round. Only `place_mark` moves it forward, and only
/// while the status is `InProgress`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    filled_count: usize,
    status: GameStatus,
    winning_line: Option<WinLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::O,
            filled_count: 0,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn filled_count(&self) -> usize {
        self.filled_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Marks `cell` for the player to move. On error nothing is changed.
    pub fn place_mark(&mut self, cell: usize) -> Result<MoveResult, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if cell >= CELL_COUNT {
            return Err(MoveError::OutOfRange(cell));
        }

        if !self.board.is_valid_move(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        let player = self.current_turn;
        self.board.set(cell, player.mark());
        self.filled_count += 1;

        // A move filling the last cell may also complete a line.
        if let Some(line) = check_win_with_line(&self.board, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            return Ok(MoveResult::Win { winner: player, line });
        }

        if self.filled_count == CELL_COUNT {
            self.status = GameStatus::Draw;
            return Ok(MoveResult::Draw);
        }

        self.current_turn = player.opponent();
        Ok(MoveResult::Continue { next_turn: self.current_turn })
    }

    /// Value-style variant of `place_mark`: returns the successor state and
    /// leaves `self` as it was.
    pub fn apply_move(&self, cell: usize) -> Result<(GameState, MoveResult), MoveError> {
        let mut next = self.clone();
        let result = next.place_mark(cell)?;
        Ok((next, result))
    }
}

pub fn new_game() -> GameState {
    GameState::new()
}
