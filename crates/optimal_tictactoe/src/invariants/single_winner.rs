//! Single winner invariant: at most one player owns a line.

use super::super::rules::has_line;
use super::super::{Board, Player, Round};
use super::Invariant;

/// Invariant: X and O never both have three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player owns a winning line"
    }
}

impl Invariant<Round> for SingleWinnerInvariant {
    fn holds(round: &Round) -> bool {
        <Self as Invariant<Board>>::holds(round.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
