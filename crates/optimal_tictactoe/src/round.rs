//! Turn-taking state machine for one round.
//!
//! A round starts on an empty board with X to move, applies one move per
//! turn, and stops at the first win or draw. Once terminal it accepts no
//! further moves; a new round is a new [`Round`].

use super::action::{GameError, Move};
use super::rules;
use super::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for X to move.
    AwaitingMoveX,
    /// Waiting for O to move.
    AwaitingMoveO,
    /// The round is over.
    Terminal(Outcome),
}

impl RoundState {
    /// State waiting on `player`.
    pub fn awaiting(player: Player) -> Self {
        match player {
            Player::X => RoundState::AwaitingMoveX,
            Player::O => RoundState::AwaitingMoveO,
        }
    }

    /// The player expected to move, or `None` once terminal.
    pub fn to_move(self) -> Option<Player> {
        match self {
            RoundState::AwaitingMoveX => Some(Player::X),
            RoundState::AwaitingMoveO => Some(Player::O),
            RoundState::Terminal(_) => None,
        }
    }
}

/// One round of play: the board, whose turn it is, and the moves so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) board: Board,
    state: RoundState,
    history: Vec<Move>,
}

impl Round {
    /// Starts a round on an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: RoundState::AwaitingMoveX,
            history: Vec::new(),
        }
    }

    /// Rebuilds a round by playing `moves` in order from the start.
    ///
    /// # Errors
    ///
    /// Fails on the first move that [`Round::play`] rejects.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, GameError> {
        let mut round = Self::new();
        for mv in moves {
            round.play(*mv)?;
        }
        Ok(round)
    }

    /// Plays `mv` for the player whose turn it is.
    ///
    /// Returns the state after the move: the other player's turn, or
    /// `Terminal` if the move won or filled the board.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalMove`] if the cell is occupied or off the
    ///   board; the round is unchanged and the same player is still to move.
    /// - [`GameError::NoLegalMoves`] if the round is already over.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play(&mut self, mv: Move) -> Result<RoundState, GameError> {
        let player = match self.state {
            RoundState::AwaitingMoveX => Player::X,
            RoundState::AwaitingMoveO => Player::O,
            RoundState::Terminal(outcome) => return Err(GameError::NoLegalMoves(outcome)),
        };

        self.board.apply(mv, player)?;
        self.history.push(mv);

        self.state = match rules::outcome(&self.board) {
            Outcome::InProgress => RoundState::awaiting(player.opponent()),
            outcome => {
                info!(%outcome, moves = self.history.len(), "Round finished");
                RoundState::Terminal(outcome)
            }
        };
        debug!(%player, %mv, board = %self.board, "Move applied");

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(self.state)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{InvariantSet, RoundInvariants};

        let result = RoundInvariants::check_all(self);
        if let Err(violations) = &result {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(%descriptions, "Round invariants violated");
        }
        debug_assert!(result.is_ok(), "Round invariants violated");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player to move, or `None` once the round is over.
    pub fn to_move(&self) -> Option<Player> {
        self.state.to_move()
    }

    /// The round's outcome; `InProgress` until terminal.
    pub fn outcome(&self) -> Outcome {
        match self.state {
            RoundState::Terminal(outcome) => outcome,
            RoundState::AwaitingMoveX | RoundState::AwaitingMoveO => Outcome::InProgress,
        }
    }

    /// True once the round has reached a win or draw.
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Terminal(_))
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
