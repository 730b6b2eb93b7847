//! Game tree search for the automated player
//!
//! Both strategies explore every legal column in ascending order, recurse on a
//! copy of the board and score leaves with [`leaf_value`]. The automated player
//! ([`Piece::Ai`]) is always the maximizer.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::{
    board::{Board, Piece},
    eval::{pick_best_move, score_position},
    rules::{has_four_in_a_row, is_terminal},
};

/// Value of a position won by the automated player
pub const AI_WIN_VALUE: i64 = 100_000_000_000_000;
/// Value of a position won by the human player.
///
/// Smaller in magnitude than [`AI_WIN_VALUE`]; the displayed evaluation
/// depends on these exact numbers
pub const PLAYER_WIN_VALUE: i64 = -10_000_000_000_000;

/// Lower bound for alpha-beta search
pub const NEG_INFINITY: i64 = i64::MIN;
/// Upper bound for alpha-beta search
pub const INFINITY: i64 = i64::MAX;

/// The outcome of a search call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen column, `None` for leaves and boards without a legal move
    pub column: Option<usize>,
    /// The minimax value of the position for the automated player
    pub value: i64,
    /// The number of children visited directly by this call
    pub nodes_explored: usize,
    /// The number of children visited anywhere below this call
    pub total_nodes: usize,
    /// Wall clock time spent in this call
    pub elapsed: Duration,
}

impl SearchResult {
    fn leaf(value: i64) -> Self {
        Self {
            column: None,
            value,
            nodes_explored: 0,
            total_nodes: 0,
            elapsed: Duration::from_secs(0),
        }
    }

    /// Elapsed time in milliseconds, as shown to the user
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// The value of `board` if the search stops here, or `None` if it must go deeper
///
/// Decided games take their fixed values, a draw is 0 and an undecided board at
/// depth 0 takes its heuristic score.
pub fn leaf_value(board: &Board, depth: usize) -> Option<i64> {
    if is_terminal(board) {
        if has_four_in_a_row(board, Piece::Ai) {
            Some(AI_WIN_VALUE)
        } else if has_four_in_a_row(board, Piece::Player) {
            Some(PLAYER_WIN_VALUE)
        } else {
            Some(0)
        }
    } else if depth == 0 {
        Some(score_position(board, Piece::Ai))
    } else {
        None
    }
}

fn mover(maximizing: bool) -> Piece {
    if maximizing {
        Piece::Ai
    } else {
        Piece::Player
    }
}

/// Plain minimax search to `depth` plies
///
/// `maximizing` is true when the automated player is to move. Every legal
/// column is explored; on equal values the leftmost column is kept.
pub fn minimax(board: &Board, depth: usize, maximizing: bool) -> SearchResult {
    let start = Instant::now();
    if let Some(value) = leaf_value(board, depth) {
        return SearchResult::leaf(value);
    }

    let piece = mover(maximizing);
    let columns = board.valid_columns();
    let mut result = SearchResult {
        column: columns.first().copied(),
        value: if maximizing { NEG_INFINITY } else { INFINITY },
        ..SearchResult::leaf(0)
    };

    for col in columns {
        let row = match board.next_open_row(col) {
            Some(row) => row,
            None => continue,
        };
        let mut next = *board;
        next.drop_piece(row, col, piece);

        let child = minimax(&next, depth - 1, !maximizing);
        result.nodes_explored += 1;
        result.total_nodes += 1 + child.total_nodes;

        let better = if maximizing {
            child.value > result.value
        } else {
            child.value < result.value
        };
        if better {
            result.value = child.value;
            result.column = Some(col);
        }
    }

    result.elapsed = start.elapsed();
    result
}

/// Minimax search with alpha-beta pruning
///
/// `alpha` is the value the maximizer is already guaranteed on this path and
/// `beta` the value the minimizer is guaranteed; start with
/// [`NEG_INFINITY`] and [`INFINITY`]. Returns the same column and value as
/// [`minimax`] while skipping siblings that cannot change the result.
pub fn alpha_beta(
    board: &Board,
    depth: usize,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
) -> SearchResult {
    let start = Instant::now();
    if let Some(value) = leaf_value(board, depth) {
        return SearchResult::leaf(value);
    }

    let piece = mover(maximizing);
    let columns = board.valid_columns();
    let mut result = SearchResult {
        column: columns.first().copied(),
        value: if maximizing { NEG_INFINITY } else { INFINITY },
        ..SearchResult::leaf(0)
    };

    for col in columns {
        let row = match board.next_open_row(col) {
            Some(row) => row,
            None => continue,
        };
        let mut next = *board;
        next.drop_piece(row, col, piece);

        let child = alpha_beta(&next, depth - 1, alpha, beta, !maximizing);
        result.nodes_explored += 1;
        result.total_nodes += 1 + child.total_nodes;

        if maximizing {
            if child.value > result.value {
                result.value = child.value;
                result.column = Some(col);
            }
            alpha = alpha.max(result.value);
        } else {
            if child.value < result.value {
                result.value = child.value;
                result.column = Some(col);
            }
            beta = beta.min(result.value);
        }

        // the opponent will never allow this line, skip the remaining columns
        if alpha >= beta {
            break;
        }
    }

    result.elapsed = start.elapsed();
    result
}

/// Greedy one-ply selection for the automated player, wrapped as a search result
pub fn greedy(board: &Board) -> SearchResult {
    let start = Instant::now();
    let column = match pick_best_move(board, Piece::Ai) {
        Some(column) => column,
        None => return SearchResult::leaf(leaf_value(board, 0).unwrap_or(0)),
    };

    let mut next = *board;
    if let Some(row) = next.next_open_row(column) {
        next.drop_piece(row, column, Piece::Ai);
    }

    let explored = board.valid_columns().len();
    SearchResult {
        column: Some(column),
        value: score_position(&next, Piece::Ai),
        nodes_explored: explored,
        total_nodes: explored,
        elapsed: start.elapsed(),
    }
}

/// The move selection strategy used by the automated player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    #[serde(alias = "alpha-beta")]
    AlphaBeta,
    Greedy,
}

impl Algorithm {
    /// Searches `board` for the automated player's move. `depth` is ignored
    /// by [`Algorithm::Greedy`]
    pub fn search(self, board: &Board, depth: usize) -> SearchResult {
        match self {
            Algorithm::Minimax => minimax(board, depth, true),
            Algorithm::AlphaBeta => alpha_beta(board, depth, NEG_INFINITY, INFINITY, true),
            Algorithm::Greedy => greedy(board),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
            Algorithm::Greedy => "Greedy",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Minimax
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            "greedy" => Ok(Algorithm::Greedy),
            other => Err(anyhow!(
                "unknown algorithm '{}' (expected 'minimax', 'alphabeta' or 'greedy')",
                other
            )),
        }
    }
}
