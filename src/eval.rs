//! The static positional evaluator
//!
//! Ranks non-terminal positions at the search depth cutoff by scoring every
//! 4-cell window on the board plus a bonus for occupying the center column.
//! This is a hand-tuned heuristic, not an estimate of true game value.

use crate::board::{Board, Cell};
use crate::{CENTER_COLUMN, HEIGHT, WIDTH, WINDOW};

/// Scores one 4-cell window for `piece`
///
/// The count-based conditions are mutually exclusive, so at most one
/// positive term and the single defensive penalty apply. A fully-owned
/// window scores +100 even though such a board is already terminal; partial
/// scans still rely on the branch, so it stays.
pub fn score_window(window: [Cell; WINDOW], piece: Cell) -> i32 {
    let opponent = piece.other();
    let mine = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|&&cell| cell.is_empty()).count();

    let mut score = 0;
    if mine == 4 {
        score += 100;
    } else if mine == 3 && empty == 1 {
        score += 5;
    } else if mine == 2 && empty == 2 {
        score += 2;
    }

    // only an open three by the opponent is penalised
    if theirs == 3 && empty == 1 {
        score -= 4;
    }

    score
}

/// Aggregate heuristic score of the whole board for `piece`
pub fn score_position(board: &Board, piece: Cell) -> i32 {
    let mut score = 0;

    // center column bias
    let center_count = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == piece)
        .count();
    score += center_count as i32 * 3;

    // horizontal windows
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - WINDOW {
            let window = [
                board.get(row, column),
                board.get(row, column + 1),
                board.get(row, column + 2),
                board.get(row, column + 3),
            ];
            score += score_window(window, piece);
        }
    }

    // vertical windows
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - WINDOW {
            let window = [
                board.get(row, column),
                board.get(row + 1, column),
                board.get(row + 2, column),
                board.get(row + 3, column),
            ];
            score += score_window(window, piece);
        }
    }

    // rising diagonal windows
    for row in 0..=HEIGHT - WINDOW {
        for column in 0..=WIDTH - WINDOW {
            let window = [
                board.get(row, column),
                board.get(row + 1, column + 1),
                board.get(row + 2, column + 2),
                board.get(row + 3, column + 3),
            ];
            score += score_window(window, piece);
        }
    }

    // falling diagonal windows
    for row in 0..=HEIGHT - WINDOW {
        for column in 0..=WIDTH - WINDOW {
            let window = [
                board.get(row + 3, column),
                board.get(row + 2, column + 1),
                board.get(row + 1, column + 2),
                board.get(row, column + 3),
            ];
            score += score_window(window, piece);
        }
    }

    score
}
