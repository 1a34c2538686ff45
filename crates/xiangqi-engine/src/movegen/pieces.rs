//! Per-piece movement rules.
//!
//! These decide whether a piece may travel from one square to another under
//! its movement rules alone. Whether the move exposes the mover's own king is
//! a separate question answered by the legal move filter.

use crate::Board;
use xiangqi_core::{Color, Move, Piece, Square};

/// Returns true if `mv` obeys the movement rules of the piece on `mv.from()`.
///
/// Self-check is ignored. The source must hold a piece, the destination must
/// not hold a piece of the same color, and a null move is never accepted.
pub fn is_pseudo_legal(board: &Board, mv: Move) -> bool {
    let (from, to) = (mv.from(), mv.to());
    if from == to {
        return false;
    }
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.color == mover.color) {
        return false;
    }
    if mover.piece.is_palace_bound() && !mover.color.palace_contains(to.row(), to.col()) {
        return false;
    }

    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    match mover.piece {
        Piece::King => d_row.abs() + d_col.abs() == 1,
        Piece::Advisor => d_row.abs() == 1 && d_col.abs() == 1,
        Piece::Elephant => elephant_move(board, mover.color, from, to, d_row, d_col),
        Piece::Horse => horse_move(board, from, d_row, d_col),
        Piece::Chariot => {
            (d_row == 0 || d_col == 0) && board.count_between(from, to) == 0
        }
        Piece::Cannon => {
            if d_row != 0 && d_col != 0 {
                return false;
            }
            let screens = board.count_between(from, to);
            match target {
                Some(_) => screens == 1,
                None => screens == 0,
            }
        }
        Piece::Pawn => pawn_move(mover.color, from, d_row, d_col),
    }
}

/// Two diagonal steps on its own side of the river, with an empty eye.
fn elephant_move(board: &Board, color: Color, from: Square, to: Square, d_row: i8, d_col: i8) -> bool {
    if d_row.abs() != 2 || d_col.abs() != 2 || !color.owns_row(to.row()) {
        return false;
    }
    from.offset(d_row / 2, d_col / 2)
        .is_some_and(|eye| board.is_empty(eye))
}

/// An L-shape whose leg, the square next to `from` along the long axis, is empty.
fn horse_move(board: &Board, from: Square, d_row: i8, d_col: i8) -> bool {
    let leg = match (d_row.abs(), d_col.abs()) {
        (2, 1) => from.offset(d_row / 2, 0),
        (1, 2) => from.offset(0, d_col / 2),
        _ => return false,
    };
    leg.is_some_and(|leg| board.is_empty(leg))
}

/// One step forward, or sideways once the pawn stands across the river.
fn pawn_move(color: Color, from: Square, d_row: i8, d_col: i8) -> bool {
    if d_row.abs() + d_col.abs() != 1 {
        return false;
    }
    if d_row != 0 {
        return d_row == color.forward();
    }
    !color.owns_row(from.row())
}
