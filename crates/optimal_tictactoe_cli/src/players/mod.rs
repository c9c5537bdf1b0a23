//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::ui::Console;
use anyhow::Result;
use optimal_tictactoe::{Move, Round};

/// Something that can choose moves for one side of a round.
pub trait Player {
    /// Gets a move from this player for the side to move in `round`.
    fn get_move(&mut self, round: &Round, console: &mut Console) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for engine-driven players.
    fn is_computer(&self) -> bool {
        false
    }
}
