//! Move generation.
//!
//! Moves are produced in two stages: every move the piece rules allow
//! ([`is_pseudo_legal`]), then only those that do not leave the mover's own
//! king in check. The check test plays the move on the board and takes it
//! back, so generation needs `&mut Board` but leaves it unchanged.

mod check;
pub mod perft;
mod pieces;

use crate::board::Occupant;
use crate::rules::GameStatus;
use crate::Board;
use thiserror::Error;
use xiangqi_core::{Color, Move, Square};

pub use check::{generals_facing, is_in_check};
pub use pieces::is_pseudo_legal;

/// A list of moves with a fixed maximum capacity.
///
/// Xiangqi positions have far fewer than 256 legal moves, so we use a
/// fixed-size array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Capacity of a move list.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if the list holds `m`.
    #[inline]
    pub fn contains(&self, m: Move) -> bool {
        self.as_slice().contains(&m)
    }

    /// Retains only moves for which the predicate returns true, keeping order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {square} belongs to {owner}")]
    NotYourPiece { square: Square, owner: Color },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("move {0} leaves the king in check")]
    LeavesKingInCheck(Move),
}

/// Generates every move the piece rules allow for `color`, ignoring self-check.
///
/// Pieces are visited in row-major order, and for each piece its destinations
/// in row-major order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces_of(color) {
        for to in Square::iter() {
            let m = Move::new(from, to);
            if is_pseudo_legal(board, m) {
                moves.push(m);
            }
        }
    }
    moves
}

/// Generates all legal moves for `color`.
pub fn legal_moves(board: &mut Board, color: Color) -> MoveList {
    let mut moves = pseudo_legal_moves(board, color);
    moves.retain(|m| !leaves_king_in_check(board, *m, color));
    moves
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    pseudo_legal_moves(board, color)
        .as_slice()
        .iter()
        .any(|m| !leaves_king_in_check(board, *m, color))
}

/// Plays `mv`, asks whether `color`'s king is in check, and takes the move back.
pub fn leaves_king_in_check(board: &mut Board, mv: Move, color: Color) -> bool {
    let after = board.make_move(mv);
    is_in_check(&after, color)
}

/// Returns true if `color` is in check and has no legal move.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

/// Returns true if `color` is not in check but has no legal move.
pub fn is_stalemate(board: &mut Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

/// Classifies the position for `color`.
pub fn status(board: &mut Board, color: Color) -> GameStatus {
    match (is_in_check(board, color), has_legal_move(board, color)) {
        (false, true) => GameStatus::InProgress,
        (true, true) => GameStatus::InCheck,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}

/// Plays `mv` for `color` if it is legal, returning the captured piece.
///
/// The board is left untouched when the move is refused.
pub fn try_move(board: &mut Board, mv: Move, color: Color) -> Result<Option<Occupant>, MoveError> {
    let mover = board
        .piece_at(mv.from())
        .ok_or(MoveError::EmptySquare(mv.from()))?;
    if mover.color != color {
        return Err(MoveError::NotYourPiece {
            square: mv.from(),
            owner: mover.color,
        });
    }
    if !is_pseudo_legal(board, mv) {
        return Err(MoveError::IllegalMove(mv));
    }
    if leaves_king_in_check(board, mv, color) {
        return Err(MoveError::LeavesKingInCheck(mv));
    }
    Ok(board.apply_move(mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::{Layout, Piece};

    fn board(layout: &str) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap())
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Square::at(from.0, from.1), Square::at(to.0, to.1))
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = mv((6, 4), (5, 4));
        let m2 = mv((7, 7), (7, 4));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert!(list.contains(m2));
        assert_eq!((&list).into_iter().count(), 2);
    }

    #[test]
    fn movelist_retain_keeps_order() {
        let mut list = MoveList::new();
        list.push(mv((6, 0), (5, 0)));
        list.push(mv((6, 2), (5, 2)));
        list.push(mv((7, 1), (7, 0)));
        list.push(mv((6, 4), (5, 4)));

        list.retain(|m| m.from().row() == 6);
        assert_eq!(list.as_slice(), &[mv((6, 0), (5, 0)), mv((6, 2), (5, 2)), mv((6, 4), (5, 4))]);
    }

    #[test]
    fn initial_position_has_44_moves() {
        let mut b = Board::initial();
        assert_eq!(legal_moves(&mut b, Color::Red).len(), 44);
        assert_eq!(legal_moves(&mut b, Color::Black).len(), 44);
        assert_eq!(b, Board::initial());
    }

    #[test]
    fn generation_order_is_row_major() {
        let mut b = Board::initial();
        let moves = legal_moves(&mut b, Color::Red);
        let froms: Vec<u8> = moves.as_slice().iter().map(|m| m.from().index()).collect();
        let mut sorted = froms.clone();
        sorted.sort();
        assert_eq!(froms, sorted);
        // First red piece in row-major order is the pawn on (6,0).
        assert_eq!(moves[0], mv((6, 0), (5, 0)));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // Red chariot on (5,4) shields its king from the black chariot.
        let mut b = board("3k5/9/9/4r4/9/4R4/9/9/9/4K4 r");
        let moves = legal_moves(&mut b, Color::Red);
        assert!(moves.contains(mv((5, 4), (4, 4))));
        assert!(moves.contains(mv((5, 4), (3, 4))));
        assert!(!moves.contains(mv((5, 4), (5, 0))));
        assert!(!moves.contains(mv((5, 4), (5, 8))));
    }

    #[test]
    fn king_cannot_step_into_facing() {
        let mut b = board("3k5/9/9/9/9/9/9/9/9/4K4 r");
        let moves = legal_moves(&mut b, Color::Red);
        assert!(!moves.contains(mv((9, 4), (9, 3))));
        assert!(moves.contains(mv((9, 4), (9, 5))));
        assert!(moves.contains(mv((9, 4), (8, 4))));
    }

    #[test]
    fn checkmate_by_two_chariots() {
        let mut b = board("R3k4/8R/9/9/9/9/9/9/9/3K5 b");
        assert!(is_in_check(&b, Color::Black));
        assert!(legal_moves(&mut b, Color::Black).is_empty());
        assert!(is_checkmate(&mut b, Color::Black));
        assert!(!is_stalemate(&mut b, Color::Black));
        assert_eq!(status(&mut b, Color::Black), GameStatus::Checkmate);
        assert_eq!(status(&mut b, Color::Red), GameStatus::InProgress);
    }

    #[test]
    fn stalemate_without_check() {
        let mut b = board("3k5/8R/9/9/9/9/9/9/9/4K4 b");
        assert!(!is_in_check(&b, Color::Black));
        assert!(legal_moves(&mut b, Color::Black).is_empty());
        assert!(is_stalemate(&mut b, Color::Black));
        assert!(!is_checkmate(&mut b, Color::Black));
        assert_eq!(status(&mut b, Color::Black), GameStatus::Stalemate);
    }

    #[test]
    fn check_with_escape() {
        let mut b = board("R3k4/9/9/9/9/9/9/9/9/3K5 b");
        assert_eq!(status(&mut b, Color::Black), GameStatus::InCheck);
        let moves = legal_moves(&mut b, Color::Black);
        assert_eq!(moves.as_slice(), &[mv((0, 4), (1, 4))]);
    }

    #[test]
    fn try_move_rejections_leave_board_untouched() {
        let mut b = Board::initial();
        let before = b.clone();

        assert_eq!(
            try_move(&mut b, mv((4, 4), (5, 4)), Color::Red),
            Err(MoveError::EmptySquare(Square::at(4, 4)))
        );
        assert_eq!(
            try_move(&mut b, mv((3, 4), (4, 4)), Color::Red),
            Err(MoveError::NotYourPiece {
                square: Square::at(3, 4),
                owner: Color::Black
            })
        );
        assert_eq!(
            try_move(&mut b, mv((6, 4), (4, 4)), Color::Red),
            Err(MoveError::IllegalMove(mv((6, 4), (4, 4))))
        );
        assert_eq!(b, before);

        let mut pinned = board("3k5/9/9/4r4/9/4R4/9/9/9/4K4 r");
        let before = pinned.clone();
        assert_eq!(
            try_move(&mut pinned, mv((5, 4), (5, 0)), Color::Red),
            Err(MoveError::LeavesKingInCheck(mv((5, 4), (5, 0))))
        );
        assert_eq!(pinned, before);
    }

    #[test]
    fn try_move_applies_and_reports_capture() {
        let mut b = Board::initial();
        let captured = try_move(&mut b, mv((7, 1), (0, 1)), Color::Red).unwrap();
        assert_eq!(captured.map(|o| (o.piece, o.color)), Some((Piece::Horse, Color::Black)));
        assert!(!is_in_check(&b, Color::Red));
    }
}
