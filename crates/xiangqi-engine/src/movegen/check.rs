//! Check detection, including the flying general rule.

use super::is_pseudo_legal;
use crate::Board;
use xiangqi_core::{Color, Move};

/// Returns true if `color`'s king is attacked.
///
/// The king is attacked when some enemy piece could move onto its square, or
/// when the two kings face each other on an open palace column.
///
/// # Panics
///
/// Panics if `color` has no king. Such a board cannot arise from legal play;
/// boards from outside the engine are checked with [`Board::validate`] first.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        panic!("board has no {} king: {:?}", color, board);
    };

    let attacked = board
        .pieces_of(color.opposite())
        .any(|(from, _)| is_pseudo_legal(board, Move::new(from, king)));

    attacked || generals_facing(board)
}

/// Returns true if both kings stand on the same palace column with nothing
/// between them.
///
/// This is symmetric: when it holds, both sides count as being in check.
pub fn generals_facing(board: &Board) -> bool {
    let (Some(red), Some(black)) = (
        board.king_square(Color::Red),
        board.king_square(Color::Black),
    ) else {
        return false;
    };

    red.col() == black.col() && (3..=5).contains(&red.col()) && board.count_between(red, black) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::Layout;

    fn board(layout: &str) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap())
    }

    #[test]
    fn initial_position_not_in_check() {
        let b = Board::initial();
        assert!(!is_in_check(&b, Color::Red));
        assert!(!is_in_check(&b, Color::Black));
        assert!(!generals_facing(&b));
    }

    #[test]
    fn bare_kings_facing_both_in_check() {
        let b = board("4k4/9/9/9/9/9/9/9/9/4K4 r");
        assert!(generals_facing(&b));
        assert!(is_in_check(&b, Color::Red));
        assert!(is_in_check(&b, Color::Black));
    }

    #[test]
    fn kings_on_different_columns() {
        let b = board("3k5/9/9/9/9/9/9/9/9/4K4 r");
        assert!(!generals_facing(&b));
        assert!(!is_in_check(&b, Color::Red));
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn blocked_facing_is_not_check() {
        let b = board("4k4/9/9/9/4p4/9/9/9/9/4K4 r");
        assert!(!generals_facing(&b));
        assert!(!is_in_check(&b, Color::Red));
    }

    #[test]
    fn chariot_gives_check() {
        let b = board("R3k4/9/9/9/9/9/9/9/9/3K5 b");
        assert!(is_in_check(&b, Color::Black));
        assert!(!is_in_check(&b, Color::Red));
    }

    #[test]
    fn cannon_gives_check_over_screen() {
        let b = board("4k4/9/9/9/4p4/9/4C4/9/9/3K5 b");
        assert!(is_in_check(&b, Color::Black));

        let b = board("4k4/9/9/9/9/9/4C4/9/9/3K5 b");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn horse_check_respects_leg() {
        let b = board("4k4/9/3N5/9/9/9/9/9/9/3K5 b");
        assert!(is_in_check(&b, Color::Black));

        let b = board("4k4/3p5/3N5/9/9/9/9/9/9/3K5 b");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn pawn_gives_check() {
        let b = board("9/4k4/4P4/9/9/9/9/9/9/3K5 b");
        assert!(is_in_check(&b, Color::Black));

        // A pawn never attacks backwards.
        let b = board("9/4P4/4k4/9/9/9/9/9/9/3K5 b");
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    #[should_panic(expected = "no Red king")]
    fn missing_king_is_fatal() {
        let b = board("4k4/9/9/9/9/9/9/9/9/9 r");
        is_in_check(&b, Color::Red);
    }
}
