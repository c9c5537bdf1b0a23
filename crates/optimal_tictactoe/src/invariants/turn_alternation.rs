//! Turn alternation invariant: X moves first and players alternate.

use super::super::{Board, Player, Round};
use super::Invariant;

/// Invariant: count(X) - count(O) is 0 or 1.
pub struct TurnAlternationInvariant;

impl Invariant<Board> for TurnAlternationInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.mark_count(Player::X);
        let o_count = board.mark_count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}

impl Invariant<Round> for TurnAlternationInvariant {
    fn holds(round: &Round) -> bool {
        <Self as Invariant<Board>>::holds(round.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
