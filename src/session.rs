//! One full board lifecycle: human moves in, automated replies out
//!
//! A `GameSession` owns exactly one board. A transport layer serving several
//! simultaneous games must own one session per game; the engine defines no
//! sharing and therefore no locking.

use crate::board::{Board, Cell};
use crate::error::EngineError;
use crate::rules::{self, GameStatus};
use crate::search;
use crate::{HEIGHT, WIDTH};

/// A single game between the human player and the engine
pub struct GameSession {
    board: Board,
}

impl GameSession {
    /// Starts a session with a fresh, all-empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Starts a session from an existing position
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// Discards the current game and starts over on an empty board
    pub fn reset(&mut self) {
        self.board.reset();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The grid as rows x columns of `{0, 1, 2}` for serialization
    pub fn board_snapshot(&self) -> [[u8; WIDTH]; HEIGHT] {
        self.board.snapshot()
    }

    /// The game outcome so far, derived from the board
    pub fn status(&self) -> GameStatus {
        rules::game_status(&self.board)
    }

    /// Drops the human piece into `column` and reports the updated status
    ///
    /// Rejects the move with `OutOfRangeColumn` or `ColumnFull` without
    /// touching the board.
    pub fn apply_human_move(&mut self, column: i32) -> Result<GameStatus, EngineError> {
        if !self.board.is_column_playable(column)? {
            return Err(EngineError::ColumnFull(column as usize));
        }
        let column = column as usize;
        let row = self
            .board
            .next_open_row(column)
            .ok_or(EngineError::ColumnFull(column))?;
        self.board.place(row, column, Cell::Human);
        Ok(self.status())
    }

    /// Searches `depth` plies ahead, plays the chosen computer move and
    /// reports the updated status
    ///
    /// Fails with `InvalidSearchState` if the game is already over.
    pub fn request_automated_move(&mut self, depth: u32) -> Result<GameStatus, EngineError> {
        if rules::is_terminal(&self.board) {
            return Err(EngineError::InvalidSearchState);
        }

        let result = search::alpha_beta(&mut self.board, depth, i32::MIN, i32::MAX, true);
        let column = result.column.ok_or(EngineError::InvalidSearchState)?;
        let row = self
            .board
            .next_open_row(column)
            .ok_or(EngineError::ColumnFull(column))?;
        self.board.place(row, column, Cell::Ai);
        Ok(self.status())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
