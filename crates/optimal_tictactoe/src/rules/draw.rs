//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a full board with no winner.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_one_gap_is_not_full() {
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, E]]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_blocked_full_board_draws() {
        let board = Board::from_rows([[O, X, O], [O, X, X], [X, O, X]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_a_line_is_not_a_draw() {
        // X owns the anti-diagonal.
        let board = Board::from_rows([[O, O, X], [X, X, O], [X, O, X]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
