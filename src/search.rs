//! Depth-limited minimax with alpha-beta pruning
//!
//! The search alternates maximizing (computer) and minimizing (simulated
//! human) levels, bottoming out at terminal detection and the positional
//! evaluator. Trial placements mutate the shared board and are undone with a
//! single-cell clear before the level returns, so the caller's board is
//! always restored exactly.

use static_assertions::const_assert;

use crate::board::{Board, Cell};
use crate::eval::score_position;
use crate::rules::{has_four_in_a_row, is_terminal};
use crate::{HEIGHT, WIDTH, WINDOW};

/// Sentinel score for a forced win; a forced loss is its negation
pub const WIN_SCORE: i32 = 1_000_000;

/// Number of 4-cell windows the evaluator scores on one board
const WINDOW_COUNT: usize = HEIGHT * (WIDTH - WINDOW + 1)
    + WIDTH * (HEIGHT - WINDOW + 1)
    + 2 * (HEIGHT - WINDOW + 1) * (WIDTH - WINDOW + 1);

// the sentinel must dominate any sum the heuristic can produce
const_assert!(WIN_SCORE > (WINDOW_COUNT * 100 + HEIGHT * 3) as i32);

/// The move chosen by a search level and its backed-up score
///
/// `column` is `None` only at a leaf (depth exhausted or terminal board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// Searches `depth` plies ahead and returns the best column for the side to
/// move plus its score
///
/// Columns are tried in ascending order, the order of
/// [`Board::playable_columns`]; on equal scores the first enumerated column
/// wins. Call with `alpha = i32::MIN`, `beta = i32::MAX` and
/// `maximizing = true` for a top-level computer move.
pub fn alpha_beta(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> SearchResult {
    let columns = board.playable_columns();
    let terminal = is_terminal(board);

    if depth == 0 || terminal {
        let score = if terminal {
            if has_four_in_a_row(board, Cell::Ai) {
                WIN_SCORE
            } else if has_four_in_a_row(board, Cell::Human) {
                -WIN_SCORE
            } else {
                // board full with no winner
                0
            }
        } else {
            score_position(board, Cell::Ai)
        };
        return SearchResult { column: None, score };
    }

    // a full board was caught by the terminal check above, but an empty
    // enumeration must still not panic
    let first = match columns.first() {
        Some(&column) => column,
        None => {
            return SearchResult {
                column: None,
                score: score_position(board, Cell::Ai),
            }
        }
    };

    if maximizing {
        let mut best = SearchResult {
            column: Some(first),
            score: i32::MIN,
        };
        for &column in &columns {
            let row = board
                .next_open_row(column)
                .expect("playable column has an open row");
            board.place(row, column, Cell::Ai);
            let child = alpha_beta(board, depth - 1, alpha, beta, false);
            board.clear(row, column);

            if child.score > best.score {
                best = SearchResult {
                    column: Some(column),
                    score: child.score,
                };
            }
            alpha = alpha.max(best.score);
            // the child that raised alpha is already counted, so siblings
            // can be skipped
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = SearchResult {
            column: Some(first),
            score: i32::MAX,
        };
        for &column in &columns {
            let row = board
                .next_open_row(column)
                .expect("playable column has an open row");
            board.place(row, column, Cell::Human);
            let child = alpha_beta(board, depth - 1, alpha, beta, true);
            board.clear(row, column);

            if child.score < best.score {
                best = SearchResult {
                    column: Some(column),
                    score: child.score,
                };
            }
            beta = beta.min(best.score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
