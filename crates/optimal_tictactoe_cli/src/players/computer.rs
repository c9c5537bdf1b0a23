//! Computer player backed by the minimax search.

use super::Player;
use crate::ui::Console;
use anyhow::{Context, Result, anyhow};
use optimal_tictactoe::{Move, Round, search};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Perfect opponent: always plays the search's best move.
pub struct ComputerPlayer {
    name: String,
    think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses `think_delay` before each move.
    pub fn new(name: impl Into<String>, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            think_delay,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, round: &Round, console: &mut Console) -> Result<Move> {
        let mark = round
            .to_move()
            .ok_or_else(|| anyhow!("Round is already over"))?;

        console.thinking()?;
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }

        let report = search::analyze(round.board(), mark)
            .context("Computer could not choose a move")?;
        debug!(candidates = ?report.candidates(), "Candidate scores");

        let best = report.best();
        info!(%mark, mv = %best.mv, score = best.score, nodes = report.nodes(), "Computer chose move");
        Ok(best.mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
