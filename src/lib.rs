//! A minimax agent for playing the board game 'Connect 4'
//!
//! The agent looks a fixed number of moves ahead, scores the positions it
//! reaches with a sliding-window heuristic and picks the column with the best
//! minimax value. Plain minimax and alpha-beta pruning are both available and
//! report how many positions they looked at.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, search::minimax};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::new();
//! let result = minimax(&board, 1, true);
//!
//! // an empty board favours the center column
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod eval;

pub mod search;

pub mod session;

pub mod config;

pub mod error;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WINDOW_LENGTH: usize = 4;

// a board smaller than a window in either direction could never be won
const_assert!(WIDTH >= WINDOW_LENGTH);
const_assert!(HEIGHT >= WINDOW_LENGTH);
