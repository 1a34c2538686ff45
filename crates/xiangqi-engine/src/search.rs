//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Scores are always from the root mover's point of view: the root mover is
//! the maximizer, its opponent the minimizer. All branches are explored on a
//! single board through [`Board::make_move`], so the board a search is handed
//! comes back unchanged.

use crate::eval::{Evaluator, MaterialEvaluator};
use crate::movegen::{is_in_check, legal_moves};
use crate::Board;
use tracing::{debug, trace};
use xiangqi_core::{Color, Move};

/// Score of a position where the side to move is checkmated.
pub const MATE_SCORE: i32 = 100_000;

/// Bound larger than any reachable score.
pub const INFINITY: i32 = 1_000_000;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score of the best move from the mover's point of view.
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u32,
}

/// A fixed-depth game-tree searcher.
///
/// Every call to [`search`](Searcher::search) is self-contained; nothing is
/// carried over between searches except the evaluator.
#[derive(Debug, Clone, Default)]
pub struct Searcher<E = MaterialEvaluator> {
    evaluator: E,
    nodes: u64,
}

impl Searcher<MaterialEvaluator> {
    /// Creates a searcher using [`MaterialEvaluator`].
    pub fn new() -> Self {
        Self::with_evaluator(MaterialEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    /// Creates a searcher with a custom leaf evaluator.
    pub fn with_evaluator(evaluator: E) -> Self {
        Searcher {
            evaluator,
            nodes: 0,
        }
    }

    /// Returns the evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Chooses the best move for `color`, or `None` if it has no legal move.
    pub fn choose_move(&mut self, board: &mut Board, color: Color, depth: u32) -> Option<Move> {
        self.search(board, color, depth).best_move
    }

    /// Searches `depth` plies ahead with alpha-beta pruning.
    ///
    /// Candidates are tried in generation order and a later move replaces the
    /// current best only when it scores strictly higher. A depth of 0 is
    /// searched as 1.
    pub fn search(&mut self, board: &mut Board, color: Color, depth: u32) -> SearchResult {
        self.root(board, color, depth, true)
    }

    /// Same as [`search`](Searcher::search) but without pruning.
    ///
    /// Visits the whole tree, so it is only practical at small depths.
    pub fn search_full_width(&mut self, board: &mut Board, color: Color, depth: u32) -> SearchResult {
        self.root(board, color, depth, false)
    }

    fn root(&mut self, board: &mut Board, color: Color, depth: u32, prune: bool) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        debug!(%color, depth, prune, "search started");

        let moves = legal_moves(board, color);
        let mut best_move = None;
        let mut best_score = -INFINITY;

        for m in &moves {
            let score = {
                let mut child = board.make_move(*m);
                if prune {
                    self.minimax(&mut child, color, depth - 1, -INFINITY, INFINITY, false)
                } else {
                    self.full_width(&mut child, color, depth - 1, false)
                }
            };
            trace!(mv = %m, score, "root move");
            if score > best_score {
                best_score = score;
                best_move = Some(*m);
            }
        }

        if best_move.is_none() {
            best_score = 0;
        }
        debug!(
            best_move = ?best_move,
            score = best_score,
            nodes = self.nodes,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
            depth,
        }
    }

    /// Alpha-beta minimax value of `board` for `root`.
    ///
    /// `maximizing` says whose turn it is: `root` when true, its opponent
    /// otherwise. Siblings stop being searched as soon as `beta <= alpha`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        root: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, root);
        }

        let side = if maximizing { root } else { root.opposite() };
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return terminal_score(board, side, maximizing);
        }

        if maximizing {
            let mut best = -INFINITY;
            for m in &moves {
                let mut child = board.make_move(*m);
                let value = self.minimax(&mut child, root, depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for m in &moves {
                let mut child = board.make_move(*m);
                let value = self.minimax(&mut child, root, depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Plain minimax value of `board` for `root`, visiting every node.
    pub fn full_width(&mut self, board: &mut Board, root: Color, depth: u32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, root);
        }

        let side = if maximizing { root } else { root.opposite() };
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return terminal_score(board, side, maximizing);
        }

        let values = moves.as_slice().iter().map(|m| {
            let mut child = board.make_move(*m);
            self.full_width(&mut child, root, depth - 1, !maximizing)
        });
        if maximizing {
            values.fold(-INFINITY, i32::max)
        } else {
            values.fold(INFINITY, i32::min)
        }
    }
}

/// Value of a node whose side to move has no legal move.
fn terminal_score(board: &Board, side: Color, maximizing: bool) -> i32 {
    if !is_in_check(board, side) {
        0
    } else if maximizing {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}
