//! Optimal tic-tac-toe - board model, rules, and a perfect opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its occupancy queries
//! - **Rules**: win, draw, and outcome classification
//! - **Search**: exhaustive minimax over the remaining game tree
//! - **Round**: the turn-taking state machine that drives a board to a
//!   win or draw
//! - **Invariants**: properties every legally reached state satisfies
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{best_move, Outcome, Player, Round};
//!
//! let mut round = Round::new();
//! while let Some(mark) = round.to_move() {
//!     let mv = best_move(round.board(), mark)?;
//!     round.play(mv)?;
//! }
//! assert_eq!(round.outcome(), Outcome::Draw);
//! # Ok::<(), optimal_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
mod round;
pub mod rules;
pub mod search;
mod types;

pub use action::{GameError, IllegalMoveReason, Move};
pub use position::Position;
pub use round::{Round, RoundState};
pub use rules::{outcome, winner};
pub use search::{analyze, best_move, score, Score, ScoredMove, SearchReport};
pub use types::{Board, Outcome, Player, Square};

/// Alias for clarity at call sites that talk about marks on the board.
pub type Mark = Player;
