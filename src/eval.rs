//! Heuristic scoring of undecided positions

use crate::{
    board::{Board, Piece},
    rules::{window, window_starts, DIRECTIONS},
    HEIGHT, WIDTH, WINDOW_LENGTH,
};

/// Points for every own piece in the center column
pub const CENTER_WEIGHT: i64 = 3;

/// Score below any real position score, used to seed [`pick_best_move`]
const GREEDY_SENTINEL: i64 = -10_000;

/// Scores a single window of four cells for `piece`
///
/// | window                       | score |
/// |------------------------------|-------|
/// | four own pieces              | +100  |
/// | three own, one empty         | +5    |
/// | two own, two empty           | +2    |
/// | three opponent, one empty    | -4    |
pub fn score_window(window: &[Piece; WINDOW_LENGTH], piece: Piece) -> i64 {
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = match (own, empty) {
        (4, _) => 100,
        (3, 1) => 5,
        (2, 2) => 2,
        _ => 0,
    };
    if theirs == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Scores `board` from the point of view of `piece`
///
/// The score is the center column bonus plus the sum of [`score_window`] over
/// every horizontal, vertical and diagonal window. Higher is better for `piece`.
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    let center = (0..HEIGHT)
        .filter(|&row| board.get(row, WIDTH / 2) == piece)
        .count() as i64;

    let windows: i64 = DIRECTIONS
        .iter()
        .map(|&direction| {
            window_starts(direction)
                .map(|start| score_window(&window(board, start, direction), piece))
                .sum::<i64>()
        })
        .sum();

    center * CENTER_WEIGHT + windows
}

/// Picks the column whose immediate result scores best for `piece`, without
/// looking further ahead. Ties go to the leftmost column.
///
/// Returns `None` if the board is full
pub fn pick_best_move(board: &Board, piece: Piece) -> Option<usize> {
    let mut best_score = GREEDY_SENTINEL;
    let mut best_col = None;
    for col in board.valid_columns() {
        let row = match board.next_open_row(col) {
            Some(row) => row,
            None => continue,
        };
        let mut next = *board;
        next.drop_piece(row, col, piece);
        let score = score_position(&next, piece);
        if score > best_score || best_col.is_none() {
            best_score = score;
            best_col = Some(col);
        }
    }
    best_col
}
