//! Human player that types moves on the console.

use super::Player;
use crate::input::parse_move;
use crate::ui::Console;
use anyhow::{Context, Result, anyhow, bail};
use optimal_tictactoe::{Move, Round};
use tracing::{debug, instrument};

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    /// Prompts until the line names a free cell on the board.
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, round: &Round, console: &mut Console) -> Result<Move> {
        let mark = round
            .to_move()
            .ok_or_else(|| anyhow!("Round is already over"))?;
        let prompt = format!(
            "{} ({}), enter your move as row,col (e.g., 2,3): ",
            self.name, mark
        );

        loop {
            let Some(line) = console.read_line(&prompt).context("Failed to read move")? else {
                bail!("Input closed while waiting for {}'s move", self.name);
            };

            match parse_move(&line) {
                Ok(mv) if round.board().is_occupied(mv) => {
                    debug!(%mv, "Cell already taken");
                    console.notice("Cell already taken. Try again.")?;
                }
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    debug!(error = %e, input = %line, "Rejected input");
                    console.notice("Invalid input. Enter as row,col (e.g., 2,3).")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
