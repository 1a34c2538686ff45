//! Full game management with history tracking.
//!
//! The [`Game`] struct owns a board, whose turn it is, the move history and
//! the result once the game has ended. It is the entry point for front ends:
//! submit a human move with [`Game::attempt_move`], ask the engine for a reply
//! with [`Game::request_ai_move`] or [`Game::play_ai_move`], and query the
//! position with [`Game::status`].

use crate::board::{BoardError, Occupant};
use crate::movegen::MoveError;
use crate::rules::{GameResult, GameStatus, RuleSet, StandardXiangqi};
use crate::search::Searcher;
use crate::{Board, MoveList};
use thiserror::Error;
use tracing::{debug, info};
use xiangqi_core::{Color, Layout, Move};

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move played.
    pub mv: Move,
    /// Who played it.
    pub mover: Color,
    /// The piece it captured, if any.
    pub captured: Option<Occupant>,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move played.
    pub mv: Move,
    /// The piece it captured, if any.
    pub captured: Option<Occupant>,
    /// The side now to move.
    pub side_to_move: Color,
    /// Status of the side now to move.
    pub status: GameStatus,
}

/// Error type for game operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] MoveError),

    #[error("invalid move text: {0:?}")]
    InvalidNotation(String),

    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A complete xiangqi game with history tracking.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the initial position, red to move.
    pub fn new() -> Self {
        Game {
            board: StandardXiangqi.initial_board(),
            side_to_move: Color::Red,
            history: Vec::new(),
            result: None,
        }
    }

    /// Creates a game from a layout.
    ///
    /// The layout must have exactly one king per side, and the side that
    /// just moved must not be left in check. If the side to move is already
    /// checkmated or stalemated the game is created finished.
    pub fn from_layout(layout: &Layout) -> Result<Self, BoardError> {
        let board = Board::from_layout(layout);
        board.validate()?;
        let waiting = layout.side_to_move.opposite();
        if StandardXiangqi.is_in_check(&board, waiting) {
            return Err(BoardError::OpponentInCheck(waiting));
        }
        let mut game = Game {
            board,
            side_to_move: layout.side_to_move,
            history: Vec::new(),
            result: None,
        };
        game.check_game_end();
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut scratch = self.board.clone();
        StandardXiangqi.legal_moves(&mut scratch, self.side_to_move)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        StandardXiangqi.is_in_check(&self.board, self.side_to_move)
    }

    /// Returns the status of the side to move.
    pub fn status(&self) -> GameStatus {
        self.status_of(self.side_to_move)
    }

    /// Returns the status of `color`, whether or not it is its turn.
    pub fn status_of(&self, color: Color) -> GameStatus {
        let mut scratch = self.board.clone();
        StandardXiangqi.status(&mut scratch, color)
    }

    /// Plays a move for the side to move.
    ///
    /// Nothing changes when the move is refused.
    pub fn attempt_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let mover = self.side_to_move;
        let captured = StandardXiangqi.try_move(&mut self.board, mv, mover).map_err(|e| {
            debug!(%mv, %mover, error = %e, "move rejected");
            e
        })?;

        self.history.push(MoveRecord {
            mv,
            mover,
            captured,
        });
        self.side_to_move = mover.opposite();
        let status = self.check_game_end();

        Ok(MoveOutcome {
            mv,
            captured,
            side_to_move: self.side_to_move,
            status,
        })
    }

    /// Plays a move given in coordinate notation such as `h2e2`.
    pub fn attempt_move_coord(&mut self, text: &str) -> Result<MoveOutcome, GameError> {
        let mv = Move::from_coord(text).ok_or_else(|| GameError::InvalidNotation(text.to_string()))?;
        self.attempt_move(mv)
    }

    /// Asks the engine for the side to move's best move at `depth`.
    ///
    /// Returns `None` once the game is over.
    pub fn request_ai_move(&self, depth: u32) -> Option<Move> {
        if self.result.is_some() {
            return None;
        }
        let mut scratch = self.board.clone();
        Searcher::new().choose_move(&mut scratch, self.side_to_move, depth)
    }

    /// Lets the engine choose and play a move for the side to move.
    ///
    /// Returns `Ok(None)` if the side to move has no legal move.
    pub fn play_ai_move(&mut self, depth: u32) -> Result<Option<MoveOutcome>, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        match self.request_ai_move(depth) {
            Some(mv) => self.attempt_move(mv).map(Some),
            None => Ok(None),
        }
    }

    /// Starts a fresh game from the initial position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Returns the current position as a layout.
    pub fn to_layout(&self) -> Layout {
        self.board.to_layout(self.side_to_move)
    }

    /// Sets the result if the side to move is checkmated or stalemated.
    fn check_game_end(&mut self) -> GameStatus {
        let status = self.status();
        self.result = GameResult::from_status(status, self.side_to_move);
        if let Some(result) = self.result {
            info!(%result, %status, plies = self.history.len(), "game over");
        }
        status
    }
}
