//! Property tests over random legal playouts from the initial position.

use proptest::prelude::*;
use xiangqi_core::{Color, Move, Square};
use xiangqi_engine::{
    is_checkmate, is_in_check, is_stalemate, legal_moves, Board, Evaluator, Game,
    MaterialEvaluator, Searcher,
};

/// Plays the moves picked by `choices` from the initial position.
///
/// Each choice indexes into the legal moves of the side to move, modulo
/// their count. The playout stops early when a side has no legal move.
fn playout(choices: &[usize]) -> (Board, Color) {
    let mut board = Board::initial();
    let mut color = Color::Red;
    for choice in choices {
        let moves = legal_moves(&mut board, color);
        if moves.is_empty() {
            break;
        }
        board.apply_move(moves[choice % moves.len()]);
        color = color.opposite();
    }
    (board, color)
}

fn choices(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..256, 0..max_len)
}

proptest! {
    #[test]
    fn make_unmake_restores_every_cell(choices in choices(40)) {
        let (mut board, color) = playout(&choices);
        let before = board.clone();
        for m in &legal_moves(&mut board, color) {
            let captured = board.apply_move(*m);
            board.undo_move(*m, captured);
            prop_assert_eq!(&board, &before);

            {
                let _guard = board.make_move(*m);
            }
            prop_assert_eq!(&board, &before);
        }
    }

    #[test]
    fn identities_follow_their_pieces(choices in choices(40)) {
        let (mut board, color) = playout(&choices);
        for m in &legal_moves(&mut board, color) {
            let Some(mover) = board.piece_at(m.from()) else {
                panic!("legal move {m} from an empty square");
            };
            let guard = board.make_move(*m);
            prop_assert_eq!(guard.locate(mover.id), Some(m.to()));
            if let Some(captured) = guard.captured() {
                prop_assert_eq!(guard.locate(captured.id), None);
            }
        }
    }

    #[test]
    fn legal_moves_never_leave_the_mover_in_check(choices in choices(40)) {
        let (mut board, color) = playout(&choices);
        for m in &legal_moves(&mut board, color) {
            let after = board.make_move(*m);
            prop_assert!(!is_in_check(&after, color), "{} leaves {} in check", m, color);
        }
    }

    #[test]
    fn accepted_moves_never_leave_the_mover_in_check(
        steps in prop::collection::vec((0u8..90, 0u8..90, 0usize..256), 0..40),
    ) {
        let mut game = Game::new();
        for (from, to, choice) in steps {
            if game.is_game_over() {
                break;
            }
            let mover = game.side_to_move();
            let before = game.to_layout();

            // An arbitrary move first: it is either refused without a trace or sound.
            let wild = Move::new(
                Square::from_index(from).unwrap(),
                Square::from_index(to).unwrap(),
            );
            if game.attempt_move(wild).is_err() {
                prop_assert_eq!(game.to_layout(), before);
                let moves = game.legal_moves();
                let picked = moves[choice % moves.len()];
                prop_assert!(game.attempt_move(picked).is_ok(), "{} refused", picked);
            }
            prop_assert!(!is_in_check(game.board(), mover), "{} left in check", mover);
        }
    }

    #[test]
    fn no_moves_means_checkmate_or_stalemate(choices in choices(60)) {
        let (mut board, color) = playout(&choices);
        let stuck = legal_moves(&mut board, color).is_empty();
        let mate = is_checkmate(&mut board, color);
        let stale = is_stalemate(&mut board, color);
        prop_assert!(!(mate && stale));
        prop_assert_eq!(stuck, mate || stale);
    }

    #[test]
    fn evaluation_is_zero_sum(choices in choices(60)) {
        let (board, _) = playout(&choices);
        let red = MaterialEvaluator.evaluate(&board, Color::Red);
        let black = MaterialEvaluator.evaluate(&board, Color::Black);
        prop_assert_eq!(red, -black);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn pruning_does_not_change_the_result(choices in choices(30)) {
        let (mut board, color) = playout(&choices);
        let before = board.clone();
        let mut searcher = Searcher::new();
        let pruned = searcher.search(&mut board, color, 2);
        let full = searcher.search_full_width(&mut board, color, 2);
        prop_assert_eq!(pruned.best_move, full.best_move);
        prop_assert_eq!(pruned.score, full.score);
        prop_assert_eq!(board, before);
    }
}
