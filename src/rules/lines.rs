//! Win and draw detection.
//!
//! Cells are valued empty = 0, `X` = +1, `O` = -1. A line summing to +3 is a
//! win for `X`, -3 a win for `O`. With no completed line, a full board is a
//! draw; otherwise the game continues.

use smallvec::SmallVec;

use crate::core::{Board, GameStatus, Player};

/// A winning triple of board positions.
pub type Line = [usize; 3];

/// The 8 winning triples: rows, columns, diagonals.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_sum(board: &Board, line: &Line) -> i8 {
    line.iter().map(|&pos| board[pos].value()).sum()
}

fn line_winner(board: &Board, line: &Line) -> Option<Player> {
    match line_sum(board, line) {
        3 => Some(Player::X),
        -3 => Some(Player::O),
        _ => None,
    }
}

fn is_full(board: &Board) -> bool {
    board.iter().all(|cell| !cell.is_empty())
}

/// Evaluate a board from scratch.
///
/// Lines are scanned in [`WINNING_LINES`] order; the first completed line
/// decides the winner.
#[must_use]
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(winner) = WINNING_LINES.iter().find_map(|line| line_winner(board, line)) {
        return GameStatus::win_for(winner);
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Playing
    }
}

/// The first completed line on the board, if any.
#[must_use]
pub fn winning_line(board: &Board) -> Option<Line> {
    WINNING_LINES
        .iter()
        .find(|line| line_winner(board, line).is_some())
        .copied()
}

/// The winning lines that contain `position` (2 to 4 of them).
///
/// Empty for positions off the board.
#[must_use]
pub fn lines_through(position: usize) -> SmallVec<[Line; 4]> {
    WINNING_LINES
        .iter()
        .filter(|line| line.contains(&position))
        .copied()
        .collect()
}

/// Status after a mark was placed at `position`.
///
/// Only the lines through `position` can have been completed by that move,
/// so for a board that was still playing before the move this equals
/// [`evaluate_status`].
#[must_use]
pub fn status_after_move(board: &Board, position: usize) -> GameStatus {
    if let Some(winner) = lines_through(position)
        .iter()
        .find_map(|line| line_winner(board, line))
    {
        return GameStatus::win_for(winner);
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Playing
    }
}
