//! Parsing of console input into core types.

use derive_more::{Display, Error};
use optimal_tictactoe::{Board, Mark, Move, Position, Square};

/// Input the console could not turn into a move or board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not of the form `row,col`.
    #[display("Expected row,col but got {_0:?}")]
    Malformed(#[error(not(source))] String),

    /// Row or column outside 1-3.
    #[display("Row and column must be between 1 and 3")]
    OutOfRange,

    /// A board description that is not nine cells of X, O or empty.
    #[display("Expected 9 cells of X, O or '.', got {_0:?}")]
    BadBoard(#[error(not(source))] String),

    /// A mark other than X or O.
    #[display("Expected X or O, got {_0:?}")]
    BadMark(#[error(not(source))] String),
}

/// Parses a 1-based `row,col` pair (e.g. `2,3`) into a zero-based move.
pub fn parse_move(s: &str) -> Result<Move, InputError> {
    let malformed = || InputError::Malformed(s.trim().to_string());

    let (row, col) = s.split_once(',').ok_or_else(malformed)?;
    let row: usize = row.trim().parse().map_err(|_| malformed())?;
    let col: usize = col.trim().parse().map_err(|_| malformed())?;

    if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return Err(InputError::OutOfRange);
    }
    Ok(Move::new(row - 1, col - 1))
}

/// Parses a board written row by row, e.g. `XX./OO./...`.
///
/// `X` and `O` (any case) are marks; `.`, `_`, `-` and the digits `1`-`9`
/// are empty cells. Whitespace, `|` and `/` are ignored, so the board's own
/// `Display` output parses back.
pub fn parse_board(s: &str) -> Result<Board, InputError> {
    let cells = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
        .map(|c| match c.to_ascii_uppercase() {
            'X' => Some(Square::Occupied(Mark::X)),
            'O' => Some(Square::Occupied(Mark::O)),
            '.' | '_' | '-' | '1'..='9' => Some(Square::Empty),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .filter(|cells| cells.len() == 9)
        .ok_or_else(|| InputError::BadBoard(s.to_string()))?;

    let mut board = Board::new();
    for (pos, square) in Position::ALL.into_iter().zip(cells) {
        board.set(pos, square);
    }
    Ok(board)
}

/// Parses `X` or `O`, any case.
pub fn parse_mark(s: &str) -> Result<Mark, InputError> {
    match s.trim().to_ascii_uppercase().as_str() {
        "X" => Ok(Mark::X),
        "O" => Ok(Mark::O),
        _ => Err(InputError::BadMark(s.to_string())),
    }
}
