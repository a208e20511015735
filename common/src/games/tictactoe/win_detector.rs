use super::board::Board;
use super::types::{Player, WinLine};

/// Rows, then columns, then diagonals. Detection reports the first match in
/// this order.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board, player: Player) -> Option<WinLine> {
    let mark = player.mark();
    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
        .copied()
}

pub fn check_win(board: &Board) -> Option<(Player, WinLine)> {
    [Player::O, Player::X]
        .into_iter()
        .find_map(|player| check_win_with_line(board, player).map(|line| (player, line)))
}
