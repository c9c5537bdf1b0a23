//! History consistent invariant: the move list explains the board.

use super::super::{Player, Round, Square};
use super::Invariant;

/// Invariant: the board is exactly the marks the history placed.
///
/// History length equals filled squares, moves alternate starting with X,
/// and every recorded move is occupied by the player who made it.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        let history = round.history();

        let filled = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        if filled != history.len() {
            return false;
        }

        history.iter().enumerate().all(|(turn, mv)| {
            let player = if turn % 2 == 0 { Player::X } else { Player::O };
            mv.position()
                .is_ok_and(|pos| board.get(pos) == Square::Occupied(player))
        })
    }

    fn description() -> &'static str {
        "Board matches the alternating move history"
    }
}
