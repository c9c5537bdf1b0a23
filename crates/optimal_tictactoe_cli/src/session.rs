//! A session: rounds played back to back with a running scoreboard.

use crate::orchestrator::Orchestrator;
use crate::scoreboard::Scoreboard;
use crate::ui::Console;
use anyhow::{Context, Result};
use optimal_tictactoe::Mark;
use tracing::{info, instrument};

/// Plays rounds until the user declines another.
pub struct Session {
    orchestrator: Orchestrator,
    scoreboard: Scoreboard,
}

impl Session {
    /// Creates a session with an empty scoreboard.
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Plays rounds, printing the tally after each, and returns the final
    /// scoreboard once the user answers anything but `Y`.
    #[instrument(skip_all)]
    pub fn run(mut self, console: &mut Console) -> Result<Scoreboard> {
        loop {
            let outcome = self.orchestrator.play_round(console)?;
            self.scoreboard.record(outcome);

            let x_name = self.orchestrator.player(Mark::X).name().to_string();
            let o_name = self.orchestrator.player(Mark::O).name().to_string();
            console.scoreboard(&self.scoreboard, &x_name, &o_name)?;

            let answer = console
                .read_line("Do you want to play again? (Y/N): ")
                .context("Failed to read answer")?;
            if !answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")) {
                info!(rounds = self.scoreboard.rounds(), "Session finished");
                console.farewell()?;
                return Ok(self.scoreboard);
            }
            self.orchestrator.restart();
        }
    }
}
