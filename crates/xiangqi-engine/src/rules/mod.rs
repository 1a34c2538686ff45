//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait which abstracts over the rules
//! of the game. Callers that only need the standard rules can use
//! [`StandardXiangqi`] or the free functions in [`movegen`](crate::movegen)
//! directly.

mod standard;

pub use standard::StandardXiangqi;

use crate::board::Occupant;
use crate::movegen::MoveError;
use crate::{Board, MoveList};
use std::fmt;
use xiangqi_core::{Color, Move};

/// Status of one side in a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    InProgress,
    /// In check, with at least one legal move.
    InCheck,
    /// In check with no legal move.
    Checkmate,
    /// Not in check with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true if the side has no legal move.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::InCheck => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Red wins by checkmate.
    RedWins,
    /// Black wins by checkmate.
    BlackWins,
    /// Stalemate.
    Draw,
}

impl GameResult {
    /// The result when `color` is checkmated.
    pub const fn checkmated(color: Color) -> Self {
        match color {
            Color::Red => GameResult::BlackWins,
            Color::Black => GameResult::RedWins,
        }
    }

    /// The result once `to_move` is in `status`, or `None` while play goes on.
    pub const fn from_status(status: GameStatus, to_move: Color) -> Option<Self> {
        match status {
            GameStatus::Checkmate => Some(GameResult::checkmated(to_move)),
            GameStatus::Stalemate => Some(GameResult::Draw),
            GameStatus::InProgress | GameStatus::InCheck => None,
        }
    }

    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::RedWins => Some(Color::Red),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::RedWins => f.write_str("red wins"),
            GameResult::BlackWins => f.write_str("black wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// Trait for rule sets.
///
/// [`Game`](crate::Game) asks its rule set for the starting board, the legal
/// moves, check and status, and lets it validate and play submitted moves.
///
/// # Example
///
/// ```
/// use xiangqi_engine::rules::{RuleSet, StandardXiangqi};
/// use xiangqi_core::Color;
///
/// let mut board = StandardXiangqi.initial_board();
/// let moves = StandardXiangqi.legal_moves(&mut board, Color::Red);
/// assert_eq!(moves.len(), 44);
/// ```
pub trait RuleSet {
    /// Returns the starting board for this rule set.
    fn initial_board(&self) -> Board;

    /// Generates all legal moves for `color`.
    fn legal_moves(&self, board: &mut Board, color: Color) -> MoveList;

    /// Returns true if `color`'s king is attacked.
    fn is_in_check(&self, board: &Board, color: Color) -> bool;

    /// Plays `m` for `color` if it is legal, returning the captured piece.
    ///
    /// The board must be left untouched when the move is refused.
    fn try_move(
        &self,
        board: &mut Board,
        m: Move,
        color: Color,
    ) -> Result<Option<Occupant>, MoveError>;

    /// Classifies the position for `color`.
    fn status(&self, board: &mut Board, color: Color) -> GameStatus {
        let check = self.is_in_check(board, color);
        let stuck = self.legal_moves(board, color).is_empty();
        match (check, stuck) {
            (false, false) => GameStatus::InProgress,
            (true, false) => GameStatus::InCheck,
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(!GameStatus::InCheck.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn checkmated_side_loses() {
        assert_eq!(GameResult::checkmated(Color::Black), GameResult::RedWins);
        assert_eq!(GameResult::checkmated(Color::Red), GameResult::BlackWins);
        assert_eq!(GameResult::RedWins.winner(), Some(Color::Red));
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn result_from_status() {
        assert_eq!(
            GameResult::from_status(GameStatus::Checkmate, Color::Red),
            Some(GameResult::BlackWins)
        );
        assert_eq!(
            GameResult::from_status(GameStatus::Stalemate, Color::Black),
            Some(GameResult::Draw)
        );
        assert_eq!(GameResult::from_status(GameStatus::InCheck, Color::Red), None);
        assert_eq!(GameResult::from_status(GameStatus::InProgress, Color::Black), None);
    }

    #[test]
    fn display() {
        assert_eq!(GameStatus::InCheck.to_string(), "check");
        assert_eq!(GameResult::BlackWins.to_string(), "black wins");
    }
}
