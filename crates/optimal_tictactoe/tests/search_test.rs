//! Tests for the minimax search engine.

use std::collections::HashSet;

use optimal_tictactoe::search::{DRAW, LOSS, WIN};
use optimal_tictactoe::{
    Board, GameError, Move, Outcome, Player, Round, Square, analyze, best_move, outcome, score,
};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);

fn in_progress_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut frontier = vec![Board::new()];
    let mut boards = Vec::new();
    while let Some(board) = frontier.pop() {
        if !seen.insert(board.clone()) || outcome(&board) != Outcome::InProgress {
            continue;
        }
        let mark = board.to_move();
        for mv in board.free_cells() {
            let mut child = board.clone();
            child.apply(mv, mark).unwrap();
            frontier.push(child);
        }
        boards.push(board);
    }
    boards
}

#[test]
fn test_completes_row_for_immediate_win() {
    let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    let mv = best_move(&board, Player::X).unwrap();
    assert_eq!(mv, Move::new(0, 2));

    let mut after = board.clone();
    after.apply(mv, Player::X).unwrap();
    assert_eq!(outcome(&after), Outcome::Win(Player::X));
}

#[test]
fn test_answers_corner_opening_with_center() {
    let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
    let mv = best_move(&board, Player::O).unwrap();

    let mut after = board.clone();
    after.apply(mv, Player::O).unwrap();
    assert!(score(&after, Player::O) >= DRAW);
    // The center is the only reply that does not lose.
    assert_eq!(mv, Move::new(1, 1));
}

#[test]
fn test_won_board_has_no_legal_moves() {
    let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    assert_eq!(
        best_move(&board, Player::O),
        Err(GameError::NoLegalMoves(Outcome::Win(Player::X)))
    );
}

#[test]
fn test_drawn_board_has_no_legal_moves() {
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(
        best_move(&board, Player::O),
        Err(GameError::NoLegalMoves(Outcome::Draw))
    );
}

#[test]
fn test_score_of_terminal_boards() {
    let x_wins = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    assert_eq!(score(&x_wins, Player::X), WIN);
    assert_eq!(score(&x_wins, Player::O), LOSS);

    let drawn = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(score(&drawn, Player::X), DRAW);
}

#[test]
fn test_search_leaves_board_unchanged_and_is_repeatable() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
    let snapshot = board.clone();

    let first = analyze(&board, Player::O).unwrap();
    let second = analyze(&board, Player::O).unwrap();
    assert_eq!(board, snapshot);
    assert_eq!(first, second);
}

#[test]
fn test_best_move_is_always_free_and_optimal() {
    for board in in_progress_boards() {
        let mark = board.to_move();
        let report = analyze(&board, mark).unwrap();
        let best = report.best();

        assert!(!board.is_occupied(best.mv), "occupied pick on {board}");
        assert_eq!(report.candidates().len(), board.free_cells().len());

        let top = report.candidates().iter().map(|c| c.score).max().unwrap();
        assert_eq!(best.score, top);
        let first_top = report.candidates().iter().find(|c| c.score == top).unwrap();
        assert_eq!(first_top.mv, best.mv, "tie not broken row-major on {board}");

        let mut after = board.clone();
        after.apply(best.mv, mark).unwrap();
        assert_eq!(score(&after, mark), best.score);
        assert_eq!(score(&board, mark), best.score);
    }
}

#[test]
fn test_optimal_self_play_draws() {
    assert_eq!(score(&Board::new(), Player::X), DRAW);

    let mut round = Round::new();
    while let Some(mark) = round.to_move() {
        let mv = best_move(round.board(), mark).unwrap();
        round.play(mv).unwrap();
    }
    assert_eq!(round.outcome(), Outcome::Draw);
    assert_eq!(round.history().len(), 9);
}

/// Plays every possible X line against the engine as O.
fn engine_as_o_never_loses(round: Round) {
    match round.to_move() {
        None => assert_ne!(
            round.outcome(),
            Outcome::Win(Player::X),
            "engine lost after {:?}",
            round.history()
        ),
        Some(Player::X) => {
            for mv in round.board().free_cells() {
                let mut next = round.clone();
                next.play(mv).unwrap();
                engine_as_o_never_loses(next);
            }
        }
        Some(Player::O) => {
            let mut next = round.clone();
            next.play(best_move(round.board(), Player::O).unwrap()).unwrap();
            engine_as_o_never_loses(next);
        }
    }
}

#[test]
fn test_engine_never_loses_as_second_player() {
    engine_as_o_never_loses(Round::new());
}

#[test]
fn test_engine_never_loses_as_first_player() {
    fn walk(round: Round) {
        match round.to_move() {
            None => assert_ne!(round.outcome(), Outcome::Win(Player::O)),
            Some(Player::O) => {
                for mv in round.board().free_cells() {
                    let mut next = round.clone();
                    next.play(mv).unwrap();
                    walk(next);
                }
            }
            Some(Player::X) => {
                let mut next = round.clone();
                next.play(best_move(round.board(), Player::X).unwrap()).unwrap();
                walk(next);
            }
        }
    }
    walk(Round::new());
}
