//! An engine for playing the board game 'Connect 4' against the computer
//!
//! The engine keeps one mutable board per game session, detects wins and
//! draws, and picks the computer's replies with a depth-limited alpha-beta
//! search over a hand-tuned positional heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::session::GameSession;
//! use connect4_engine::rules::GameStatus;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = GameSession::new();
//!
//! game.apply_human_move(3)?;
//! let status = game.request_automated_move(5)?;
//!
//! assert_eq!(status, GameStatus::InProgress);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod error;

pub mod eval;

pub mod rules;

pub mod search;

pub mod session;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The length of a winning run, and of every window the evaluator scores
pub const WINDOW: usize = 4;

/// The column whose occupancy earns the evaluator's positional bonus
pub const CENTER_COLUMN: usize = WIDTH / 2;

// ensure that both scan dimensions fit at least one full window
const_assert!(WIDTH >= WINDOW);
const_assert!(HEIGHT >= WINDOW);
