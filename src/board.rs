//! Grid representation of a Connect 4 position

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{error::BoardError, rules::has_four_in_a_row, HEIGHT, WIDTH};

/// The contents of a single tile
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    Empty,
    /// The human player, minimized by the search
    Player,
    /// The automated player, maximized by the search
    Ai,
}

impl Piece {
    /// The other player's piece. `Empty` has no opponent and maps to itself
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Name shown to the user
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "Player 1",
            Piece::Ai => "Player 2",
            Piece::Empty => "nobody",
        }
    }

    fn symbol(self) -> char {
        match self {
            Piece::Player => 'X',
            Piece::Ai => 'O',
            Piece::Empty => '.',
        }
    }
}

/// A Connect 4 board
///
/// Row 0 is the bottom of the board and columns fill upwards. The board is
/// `Copy`, so exploring a hypothetical move is a matter of copying it and
/// dropping a piece into the copy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Piece; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Piece::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed column digits, e.g. `"4453"`.
    /// Pieces alternate starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Piece) -> Result<Self> {
        if first.is_empty() {
            return Err(anyhow!("the first piece must belong to a player"));
        }
        let mut board = Self::new();
        let mut piece = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board
                        .play(column - 1, piece)
                        .map_err(|_| anyhow!("Invalid move, column {} full", column))?;
                    // abort if the position is won at any point, including the last move
                    if has_four_in_a_row(&board, piece) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The piece at `row` (counted from the bottom) and `col`
    pub fn get(&self, row: usize, col: usize) -> Piece {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell ({}, {}) is off the board", row, col);
        self.cells[col + WIDTH * row]
    }

    /// Whether another piece fits in `col`. Out-of-range columns are never valid
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < WIDTH && self.get(HEIGHT - 1, col).is_empty()
    }

    /// The lowest empty row of `col`, or `None` if the column is full or out of range
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= WIDTH {
            return None;
        }
        (0..HEIGHT).find(|&row| self.get(row, col).is_empty())
    }

    /// Places `piece` at `row`, `col` without checking that the move is legal.
    /// Callers obtain `row` from [`Board::next_open_row`]
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell ({}, {}) is off the board", row, col);
        self.cells[col + WIDTH * row] = piece;
    }

    /// Drops `piece` into `col`, returning the row it landed on
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, BoardError> {
        if col >= WIDTH {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        let row = self.next_open_row(col).ok_or(BoardError::ColumnFull(col))?;
        self.drop_piece(row, col, piece);
        Ok(row)
    }

    /// Whether every column is full
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| !self.is_valid_column(col))
    }

    /// The playable columns in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// The number of pieces on the board
    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The piece to move next in a game that was opened by `first`
    pub fn to_move(&self, first: Piece) -> Piece {
        if self.num_moves() % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    // top row first, as the board is seen from the front
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            let line: String = (0..WIDTH).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        write!(f, "{}", cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Every column is a run of pieces from row 0 followed only by empty cells
    fn columns_are_contiguous(board: &Board) -> bool {
        (0..WIDTH).all(|col| {
            let height = (0..HEIGHT)
                .take_while(|&row| !board.get(row, col).is_empty())
                .count();
            (height..HEIGHT).all(|row| board.get(row, col).is_empty())
        })
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(board.get(row, col), Piece::Empty);
            }
        }
        assert_eq!(board.valid_columns(), (0..WIDTH).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_play_stacks_from_the_bottom() {
        let mut board = Board::new();
        assert_eq!(board.play(3, Piece::Player), Ok(0));
        assert_eq!(board.play(3, Piece::Ai), Ok(1));
        assert_eq!(board.get(0, 3), Piece::Player);
        assert_eq!(board.get(1, 3), Piece::Ai);
        assert_eq!(board.next_open_row(3), Some(2));
    }

    #[test]
    fn test_full_column() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board.play(0, Piece::Ai).unwrap();
        }
        assert!(!board.is_valid_column(0));
        assert_eq!(board.next_open_row(0), None);
        assert_eq!(board.play(0, Piece::Player), Err(BoardError::ColumnFull(0)));
        assert_eq!(board.valid_columns(), (1..WIDTH).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = Board::new();
        assert!(!board.is_valid_column(WIDTH));
        assert_eq!(board.next_open_row(WIDTH), None);
        assert_eq!(
            board.play(WIDTH, Piece::Player),
            Err(BoardError::ColumnOutOfRange(WIDTH))
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                board.play(col, Piece::Player).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());
        assert_eq!(board.num_moves(), WIDTH * HEIGHT);
    }

    #[test]
    fn test_copies_are_independent() {
        let board = Board::new();
        let mut copy = board;
        copy.play(2, Piece::Ai).unwrap();
        assert_eq!(board.get(0, 2), Piece::Empty);
        assert_eq!(copy.get(0, 2), Piece::Ai);
    }

    #[test]
    fn test_from_moves() -> Result<()> {
        let board = Board::from_moves("4453", Piece::Player)?;
        assert_eq!(board.get(0, 3), Piece::Player);
        assert_eq!(board.get(1, 3), Piece::Ai);
        assert_eq!(board.get(0, 4), Piece::Player);
        assert_eq!(board.get(0, 2), Piece::Ai);
        assert_eq!(board.num_moves(), 4);

        assert!(Board::from_moves("48", Piece::Player).is_err());
        assert!(Board::from_moves("1111111", Piece::Player).is_err());
        // player one completes a vertical four before the last move
        assert!(Board::from_moves("12121213", Piece::Player).is_err());
        // and with the last move
        assert!(Board::from_moves("1212121", Piece::Player).is_err());
        assert!(Board::from_moves("121212", Piece::Player).is_ok());
        Ok(())
    }

    #[test]
    fn test_to_move() -> Result<()> {
        assert_eq!(Board::new().to_move(Piece::Player), Piece::Player);
        assert_eq!(Board::from_moves("4", Piece::Player)?.to_move(Piece::Player), Piece::Ai);
        assert_eq!(Board::from_moves("45", Piece::Player)?.to_move(Piece::Player), Piece::Player);
        assert_eq!(Board::from_moves("4", Piece::Ai)?.to_move(Piece::Ai), Piece::Player);
        Ok(())
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_drop_piece_off_the_board() {
        let mut board = Board::new();
        board.drop_piece(0, WIDTH, Piece::Ai);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_get_off_the_board() {
        Board::new().get(HEIGHT, 0);
    }

    #[test]
    fn test_display() -> Result<()> {
        let board = Board::from_moves("44", Piece::Player)?;
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT + 1);
        assert_eq!(lines[HEIGHT - 1], "...X...");
        assert_eq!(lines[HEIGHT - 2], "...O...");
        assert_eq!(lines[HEIGHT], "1234567");
        Ok(())
    }

    proptest! {
        #[test]
        fn legal_drops_keep_columns_contiguous(cols in proptest::collection::vec(0..WIDTH, 0..60)) {
            let mut board = Board::new();
            let mut piece = Piece::Player;
            for col in cols {
                if let Some(row) = board.next_open_row(col) {
                    board.drop_piece(row, col, piece);
                    piece = piece.opponent();
                }
                prop_assert!(columns_are_contiguous(&board));
            }
        }
    }
}
