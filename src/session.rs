//! State of a game between a human and the automated player
//!
//! The session owns everything a front end needs between moves: the board,
//! whose turn it is, the selected algorithm and the statistics of the last
//! automated move. The search functions themselves keep no state.

use rand::Rng;

use crate::{
    board::{Board, Piece},
    config::{AppConfig, FirstPlayer},
    error::SessionError,
    rules::{game_state, GameState},
    search::{Algorithm, SearchResult},
};

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: Piece,
    state: GameState,
    algorithm: Algorithm,
    // applied by the next `new_game`
    selected_algorithm: Algorithm,
    depth: usize,
    first_player: FirstPlayer,
    last_search: Option<SearchResult>,
}

impl GameSession {
    pub fn new(config: &AppConfig) -> Self {
        let mut session = Self {
            board: Board::new(),
            turn: Piece::Player,
            state: GameState::Playing,
            algorithm: config.engine.algorithm,
            selected_algorithm: config.engine.algorithm,
            depth: config.engine.depth,
            first_player: config.game.first_player,
            last_search: None,
        };
        session.restart();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece of the side to move
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The algorithm the automated player is currently using
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The algorithm that will be used from the next new game on
    pub fn selected_algorithm(&self) -> Algorithm {
        self.selected_algorithm
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Statistics of the most recent automated move in this game
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_over() && self.turn == Piece::Ai
    }

    /// Chooses the algorithm for the next game
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.selected_algorithm = algorithm;
    }

    /// Starts a new game with the selected algorithm
    pub fn new_game(&mut self) {
        self.algorithm = self.selected_algorithm;
        self.restart();
    }

    /// Clears the board and picks the starting side again, keeping the algorithm
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.state = GameState::Playing;
        self.last_search = None;
        self.turn = match self.first_player {
            FirstPlayer::Player => Piece::Player,
            FirstPlayer::Ai => Piece::Ai,
            FirstPlayer::Random => {
                if rand::thread_rng().gen_bool(0.5) {
                    Piece::Player
                } else {
                    Piece::Ai
                }
            }
        };
    }

    /// Plays the human's move in `col`
    pub fn play_human(&mut self, col: usize) -> Result<GameState, SessionError> {
        self.check_turn(Piece::Player)?;
        self.apply(col, Piece::Player)
    }

    /// Searches for the automated player's move and plays it
    pub fn play_ai(&mut self) -> Result<SearchResult, SessionError> {
        self.check_turn(Piece::Ai)?;
        let result = self.algorithm.search(&self.board, self.depth);
        let column = result.column.ok_or(SessionError::NoMove)?;
        self.apply(column, Piece::Ai)?;
        self.last_search = Some(result);
        Ok(result)
    }

    fn check_turn(&self, piece: Piece) -> Result<(), SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.turn != piece {
            return Err(SessionError::WrongTurn(if piece == Piece::Player {
                "human player's"
            } else {
                "automated player's"
            }));
        }
        Ok(())
    }

    fn apply(&mut self, col: usize, piece: Piece) -> Result<GameState, SessionError> {
        self.board.play(col, piece)?;
        self.state = game_state(&self.board);
        self.turn = piece.opponent();
        Ok(self.state)
    }
}
