//! Terminal detection: win scans and the derived game status

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH, WINDOW};

/// The outcome of a game so far
///
/// Always recomputed from the board after a placement, never stored.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    AiWon,
    Draw,
}

/// Whether `piece` has four contiguous cells in any direction
///
/// All four directions are scanned; a board can satisfy several at once.
pub fn has_four_in_a_row(board: &Board, piece: Cell) -> bool {
    // horizontal
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - WINDOW {
            if (0..WINDOW).all(|i| board.get(row, column + i) == piece) {
                return true;
            }
        }
    }

    // vertical
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - WINDOW {
            if (0..WINDOW).all(|i| board.get(row + i, column) == piece) {
                return true;
            }
        }
    }

    // rising diagonal
    for row in 0..=HEIGHT - WINDOW {
        for column in 0..=WIDTH - WINDOW {
            if (0..WINDOW).all(|i| board.get(row + i, column + i) == piece) {
                return true;
            }
        }
    }

    // falling diagonal
    for row in WINDOW - 1..HEIGHT {
        for column in 0..=WIDTH - WINDOW {
            if (0..WINDOW).all(|i| board.get(row - i, column + i) == piece) {
                return true;
            }
        }
    }

    false
}

/// Whether the game is over: either side has four, or the board is full
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Cell::Human)
        || has_four_in_a_row(board, Cell::Ai)
        || board.playable_columns().is_empty()
}

pub fn game_status(board: &Board) -> GameStatus {
    if has_four_in_a_row(board, Cell::Human) {
        GameStatus::PlayerWon
    } else if has_four_in_a_row(board, Cell::Ai) {
        GameStatus::AiWon
    } else if board.playable_columns().is_empty() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
