//! Moves and the errors raised when applying them.
//!
//! A [`Move`] is raw coordinates as supplied by a caller. It is only
//! validated when it reaches the board, so that bad input surfaces as
//! [`GameError::IllegalMove`] rather than being unrepresentable.

use super::position::Position;
use super::types::Outcome;
use serde::{Deserialize, Serialize};

/// A (row, column) coordinate pair, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 (top) to 2 (bottom).
    pub row: usize,
    /// Column, 0 (left) to 2 (right).
    pub col: usize,
}

impl Move {
    /// Creates a new move. Coordinates are checked when the move is applied.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Resolves the coordinates to a board position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] when either coordinate is outside `0..=2`.
    pub fn position(self) -> Result<Position, GameError> {
        Position::from_coords(self.row, self.col)
            .ok_or(GameError::illegal(self, IllegalMoveReason::OutOfBounds))
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::new(pos.row(), pos.col())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IllegalMoveReason {
    /// Row or column outside `0..=2`.
    #[display("coordinates outside 0..=2")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
}

/// Error raised by the game core.
///
/// Both kinds are caller programming errors: the core reports them and
/// never retries or corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Target cell occupied or coordinates off the board.
    #[display("Illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Why the move was rejected.
        reason: IllegalMoveReason,
    },

    /// A move was requested on a board that is already over.
    #[display("No legal moves: game is already {_0}")]
    NoLegalMoves(#[error(not(source))] Outcome),
}

impl GameError {
    /// Builds an [`GameError::IllegalMove`] for `mv`.
    pub fn illegal(mv: Move, reason: IllegalMoveReason) -> Self {
        Self::IllegalMove {
            row: mv.row,
            col: mv.col,
            reason,
        }
    }
}
