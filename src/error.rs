use thiserror::Error;

use crate::WIDTH;

/// Recoverable failures surfaced by the engine
///
/// Every invalid input maps to exactly one of these kinds; a rejected move
/// leaves the board untouched and the caller decides whether to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid move, column {0} out of range: columns must be between 0 and {}", WIDTH - 1)]
    OutOfRangeColumn(i32),

    #[error("invalid move, column {0} is full")]
    ColumnFull(usize),

    #[error("search requested on a finished game")]
    InvalidSearchState,
}
