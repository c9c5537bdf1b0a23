//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::{error, instrument};

/// The eight lines that win the game: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}

/// True if `player` occupies a complete row, column, or diagonal.
#[instrument(level = "trace", skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(player))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. A board where both players own a line cannot be
/// reached through legal play; it is logged and the first owner found
/// is reported.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let mut owners = LINES.into_iter().filter_map(|line| line_owner(board, line));
    let first = owners.next()?;
    if owners.any(|other| other != first) {
        error!(board = %board, "Both players own a winning line");
    }
    Some(first)
}
