mod board;
mod game_state;
mod observer;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, row_col};
pub use game_state::{GameState, new_game};
pub use observer::GameObserver;
pub use session::GameSession;
pub use types::{GameOutcome, GameStatus, Mark, MoveResult, Player, WinLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
