//! Xiangqi rules engine and search opponent.
//!
//! This crate provides:
//! - [`Board`] - the 10×9 grid with reversible move application
//! - [`movegen`] - per-piece move rules, check detection and legal move generation
//! - [`RuleSet`] - trait over the rules, with [`StandardXiangqi`]
//! - [`Evaluator`] - static scoring, with [`MaterialEvaluator`]
//! - [`Searcher`] - fixed-depth minimax with alpha-beta pruning
//! - [`Game`] - complete game management with history tracking
//!
//! # Architecture
//!
//! Search and legality checks explore positions by playing a move on a
//! single board and taking it back. [`Board::make_move`] returns a guard that
//! undoes the move when dropped, so the board is restored on every path out
//! of a branch.
//!
//! # Example
//!
//! ```
//! use xiangqi_engine::{legal_moves, Board, Game, Searcher};
//! use xiangqi_core::Color;
//!
//! // Using a board directly
//! let mut board = Board::initial();
//! let moves = legal_moves(&mut board, Color::Red);
//! assert_eq!(moves.len(), 44);
//!
//! let reply = Searcher::new().choose_move(&mut board, Color::Red, 2);
//! assert!(reply.is_some());
//!
//! // Using Game for full game management
//! let mut game = Game::new();
//! game.attempt_move_coord("h2e2").unwrap();
//! let outcome = game.play_ai_move(2).unwrap();
//! assert!(outcome.is_some());
//! println!("{}", game.board());
//! ```

mod board;
pub mod eval;
mod game;
pub mod movegen;
pub mod rules;
pub mod search;

pub use board::{Board, BoardError, MoveGuard, Occupant, PieceId};
pub use eval::{Evaluator, MaterialEvaluator};
pub use game::{Game, GameError, MoveOutcome, MoveRecord};
pub use movegen::{
    generals_facing, is_checkmate, is_in_check, is_pseudo_legal, is_stalemate, legal_moves,
    leaves_king_in_check, perft::perft, status, try_move, MoveError, MoveList,
};
pub use rules::{GameResult, GameStatus, RuleSet, StandardXiangqi};
pub use search::{SearchResult, Searcher};
