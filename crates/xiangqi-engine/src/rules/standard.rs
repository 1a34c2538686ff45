//! Standard xiangqi rules implementation.

use super::{GameStatus, RuleSet};
use crate::board::Occupant;
use crate::movegen::{self, MoveError};
use crate::{Board, MoveList};
use xiangqi_core::{Color, Move};

/// Standard xiangqi rules.
///
/// - Piece movement with palace, river, eye and leg restrictions
/// - Cannon captures over exactly one screen
/// - The flying general rule
/// - Check, checkmate, and stalemate detection
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardXiangqi;

impl RuleSet for StandardXiangqi {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn legal_moves(&self, board: &mut Board, color: Color) -> MoveList {
        movegen::legal_moves(board, color)
    }

    fn is_in_check(&self, board: &Board, color: Color) -> bool {
        movegen::is_in_check(board, color)
    }

    fn try_move(
        &self,
        board: &mut Board,
        m: Move,
        color: Color,
    ) -> Result<Option<Occupant>, MoveError> {
        movegen::try_move(board, m, color)
    }

    // Stops generating at the first legal move.
    fn status(&self, board: &mut Board, color: Color) -> GameStatus {
        movegen::status(board, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::{Layout, Square};

    fn board(layout: &str) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap())
    }

    #[test]
    fn initial_board() {
        let board = StandardXiangqi.initial_board();
        assert_eq!(board.to_layout(Color::Red).to_notation(), Layout::INITIAL);
    }

    #[test]
    fn generated_moves_are_accepted() {
        let mut board = StandardXiangqi.initial_board();
        let before = board.clone();
        for m in &StandardXiangqi.legal_moves(&mut board, Color::Red) {
            assert_eq!(
                StandardXiangqi.try_move(&mut board, *m, Color::Black),
                Err(MoveError::NotYourPiece {
                    square: m.from(),
                    owner: Color::Red
                })
            );
            let captured = StandardXiangqi.try_move(&mut board, *m, Color::Red).unwrap();
            board.undo_move(*m, captured);
        }
        assert_eq!(board, before);

        let pawn_jump = Move::new(Square::at(6, 4), Square::at(4, 4));
        assert_eq!(
            StandardXiangqi.try_move(&mut board, pawn_jump, Color::Red),
            Err(MoveError::IllegalMove(pawn_jump))
        );
    }

    #[test]
    fn status_matches_default_classification() {
        struct Plain;

        impl RuleSet for Plain {
            fn initial_board(&self) -> Board {
                StandardXiangqi.initial_board()
            }

            fn legal_moves(&self, board: &mut Board, color: Color) -> MoveList {
                StandardXiangqi.legal_moves(board, color)
            }

            fn is_in_check(&self, board: &Board, color: Color) -> bool {
                StandardXiangqi.is_in_check(board, color)
            }

            fn try_move(
                &self,
                board: &mut Board,
                m: Move,
                color: Color,
            ) -> Result<Option<Occupant>, MoveError> {
                StandardXiangqi.try_move(board, m, color)
            }
        }

        let cases = [
            (Layout::INITIAL, Color::Red, GameStatus::InProgress),
            ("R3k4/9/9/9/9/9/9/9/9/3K5 b", Color::Black, GameStatus::InCheck),
            ("R3k4/8R/9/9/9/9/9/9/9/3K5 b", Color::Black, GameStatus::Checkmate),
            ("3k5/8R/9/9/9/9/9/9/9/4K4 b", Color::Black, GameStatus::Stalemate),
        ];
        for (layout, color, expected) in cases {
            let mut b = board(layout);
            assert_eq!(StandardXiangqi.status(&mut b, color), expected, "{}", layout);
            assert_eq!(Plain.status(&mut b, color), expected, "{}", layout);
        }
    }
}
