//! Core domain types for tic-tac-toe.

use crate::action::{GameError, IllegalMoveReason, Move};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer in single-player mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares, top row first.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, squares) in rows.iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                board.squares[row * 3 + col] = *square;
            }
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// True if the target cell holds a mark.
    ///
    /// Coordinates off the board are never occupied.
    pub fn is_occupied(&self, mv: Move) -> bool {
        mv.position().is_ok_and(|pos| !self.is_empty(pos))
    }

    /// Places `player`'s mark at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the coordinates are outside
    /// `0..=2` or the cell is already occupied. The board is left untouched
    /// on error.
    #[instrument(level = "debug", skip(self), fields(row = mv.row, col = mv.col))]
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<(), GameError> {
        let pos = mv.position()?;
        if !self.is_empty(pos) {
            return Err(GameError::illegal(mv, IllegalMoveReason::Occupied));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Re-empties the cell at `mv`, undoing an earlier [`Board::apply`].
    #[instrument(level = "debug", skip(self), fields(row = mv.row, col = mv.col))]
    pub fn clear(&mut self, mv: Move) -> Result<(), GameError> {
        let pos = mv.position()?;
        self.set(pos, Square::Empty);
        Ok(())
    }

    /// Every empty cell, in row-major order.
    pub fn free_cells(&self) -> Vec<Move> {
        Position::valid_moves(self)
            .into_iter()
            .map(Move::from)
            .collect()
    }

    /// Number of squares holding `player`'s mark.
    pub fn mark_count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Side to move, derived from mark counts (X moves when counts are equal).
    pub fn to_move(&self) -> Player {
        if self.mark_count(Player::X) > self.mark_count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    #[display("in progress")]
    InProgress,
    /// A player owns a complete line.
    #[display("won by {_0}")]
    Win(Player),
    /// Board is full with no winner.
    #[display("drawn")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once the game can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
