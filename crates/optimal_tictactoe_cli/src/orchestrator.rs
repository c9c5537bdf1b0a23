//! Game orchestration between players.

use crate::players::Player;
use crate::ui::Console;
use anyhow::{Context, Result};
use optimal_tictactoe::{Board, GameError, Mark, Move, Outcome, Round};
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh round is about to begin.
    RoundStarted {
        /// The empty board.
        board: Board,
    },
    /// A move was made.
    MoveMade {
        /// The cell taken.
        mv: Move,
        /// True if the engine chose the move.
        by_computer: bool,
        /// Board after the move.
        board: Board,
    },
    /// Round ended.
    GameOver {
        /// Win or draw.
        outcome: Outcome,
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    round: Round,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh round.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            round: Round::new(),
            player_x,
            player_o,
        }
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the player holding `mark`.
    pub fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// Runs the round to a win or draw and returns the outcome.
    #[instrument(skip_all)]
    pub fn play_round(&mut self, console: &mut Console) -> Result<Outcome> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting round"
        );
        console.render(&GameEvent::RoundStarted {
            board: self.round.board().clone(),
        })?;

        while let Some(mark) = self.round.to_move() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = player.name(), %mark, "Waiting for move");
            let mv = player.get_move(&self.round, console)?;
            match self.round.play(mv) {
                Ok(_) => {}
                Err(e @ GameError::IllegalMove { .. }) => {
                    // Same player moves again
                    warn!(player = player.name(), error = %e, "Rejected move");
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("{} could not move", player.name()));
                }
            }

            console.render(&GameEvent::MoveMade {
                mv,
                by_computer: player.is_computer(),
                board: self.round.board().clone(),
            })?;
        }

        let outcome = self.round.outcome();
        let winner = outcome
            .winner()
            .map(|mark| self.player(mark).name().to_string());
        info!(%outcome, winner = ?winner, "Round over");
        console.render(&GameEvent::GameOver { outcome, winner })?;
        Ok(outcome)
    }

    /// Starts a new round with the same players.
    pub fn restart(&mut self) {
        self.round = Round::new();
    }
}
