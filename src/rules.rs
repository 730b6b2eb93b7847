//! Win and end-of-game detection

use crate::{
    board::{Board, Piece},
    HEIGHT, WIDTH, WINDOW_LENGTH,
};

/// Row and column steps of the four alignment directions
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal /
    (-1, 1), // diagonal \
];

/// The state of a game after the most recent move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Starting cells of every window in `direction`, given as (row, col)
pub(crate) fn window_starts(direction: (isize, isize)) -> impl Iterator<Item = (usize, usize)> {
    let (d_row, d_col) = direction;
    let span = WINDOW_LENGTH as isize - 1;
    (0..HEIGHT as isize)
        .flat_map(move |row| (0..WIDTH as isize).map(move |col| (row, col)))
        .filter(move |&(row, col)| {
            let (end_row, end_col) = (row + d_row * span, col + d_col * span);
            end_row >= 0 && end_row < HEIGHT as isize && end_col >= 0 && end_col < WIDTH as isize
        })
        .map(|(row, col)| (row as usize, col as usize))
}

/// The cells of the window starting at `start` and stepping along `direction`.
/// `start` must come from [`window_starts`] for the same direction
pub(crate) fn window(
    board: &Board,
    start: (usize, usize),
    direction: (isize, isize),
) -> [Piece; WINDOW_LENGTH] {
    let mut cells = [Piece::Empty; WINDOW_LENGTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        let row = start.0 as isize + direction.0 * i as isize;
        let col = start.1 as isize + direction.1 * i as isize;
        *cell = board.get(row as usize, col as usize);
    }
    cells
}

/// Whether `piece` has four aligned tiles anywhere on the board
pub fn has_four_in_a_row(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    DIRECTIONS.iter().any(|&direction| {
        window_starts(direction)
            .any(|start| window(board, start, direction).iter().all(|&cell| cell == piece))
    })
}

/// Whether the game has ended, by a win for either side or a full board
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Piece::Player)
        || has_four_in_a_row(board, Piece::Ai)
        || board.is_full()
}

/// Classifies a board. A full board that contains a win counts as the win
pub fn game_state(board: &Board) -> GameState {
    if has_four_in_a_row(board, Piece::Player) {
        GameState::PlayerWin
    } else if has_four_in_a_row(board, Piece::Ai) {
        GameState::AiWin
    } else if board.is_full() {
        GameState::Draw
    } else {
        GameState::Playing
    }
}
