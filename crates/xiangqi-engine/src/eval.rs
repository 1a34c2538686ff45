//! Static position evaluation.

use crate::Board;
use xiangqi_core::{Color, Piece};

/// Bonus for a pawn standing across the river.
pub const ADVANCED_PAWN_BONUS: i32 = 20;

/// Material value of a piece type.
pub const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::King => 10_000,
        Piece::Chariot => 900,
        Piece::Horse => 400,
        Piece::Cannon => 450,
        Piece::Advisor => 20,
        Piece::Elephant => 20,
        Piece::Pawn => 10,
    }
}

/// Scores a board from one side's point of view.
///
/// Higher is better for `perspective`. Implementations must be zero-sum:
/// `evaluate(b, Red) == -evaluate(b, Black)`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> i32;
}

/// Material count plus a bonus for pawns that have crossed the river.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|(sq, occupant)| {
                let mut value = piece_value(occupant.piece);
                if occupant.piece == Piece::Pawn && !occupant.color.owns_row(sq.row()) {
                    value += ADVANCED_PAWN_BONUS;
                }
                if occupant.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::Layout;

    fn board(layout: &str) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap())
    }

    #[test]
    fn initial_position_is_balanced() {
        let b = Board::initial();
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Red), 0);
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Black), 0);
    }

    #[test]
    fn extra_chariot() {
        let b = board("4k4/9/9/9/9/9/9/9/9/R3K4 r");
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Red), 900);
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Black), -900);
    }

    #[test]
    fn advanced_pawn_bonus() {
        // Red pawn on row 4 has crossed; black pawn on row 4 has not.
        let b = board("4k4/9/9/9/P7p/9/9/9/9/4K4 r");
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Red), 20);

        // Black pawn on row 5 has crossed.
        let b = board("4k4/9/9/9/9/p8/9/9/9/4K4 r");
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Black), 30);
    }

    #[test]
    fn missing_king_counts_against_its_side() {
        let b = board("9/9/9/9/9/9/9/9/9/4K4 r");
        assert_eq!(MaterialEvaluator.evaluate(&b, Color::Red), 10_000);
    }
}
