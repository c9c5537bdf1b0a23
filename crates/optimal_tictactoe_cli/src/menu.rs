//! Match setup: mode and player names, from config or the console.

use crate::config::GameConfig;
use crate::mode::GameMode;
use crate::orchestrator::Orchestrator;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use crate::ui::Console;
use anyhow::{Context, Result, bail};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Name given to X when none is entered.
pub const DEFAULT_X_NAME: &str = "Player 1";
/// Name given to O in two-player mode when none is entered.
pub const DEFAULT_O_NAME: &str = "Player 2";
/// O's name in computer mode unless configured.
pub const COMPUTER_NAME: &str = "Computer";

const MENU: &str = "Choose mode:\n1. Play with Computer\n2. Play with Human";

/// Who plays, resolved before the first round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    /// Who plays O.
    pub mode: GameMode,
    /// X's display name.
    pub player_x_name: String,
    /// O's display name.
    pub player_o_name: String,
}

impl MatchSetup {
    /// Builds the orchestrator for this setup.
    ///
    /// X is always human; O is the engine in computer mode.
    pub fn orchestrator(&self, think_delay: Duration) -> Orchestrator {
        let player_x: Box<dyn Player> = Box::new(HumanPlayer::new(&self.player_x_name));
        let player_o: Box<dyn Player> = match self.mode {
            GameMode::Computer => Box::new(ComputerPlayer::new(&self.player_o_name, think_delay)),
            GameMode::Human => Box::new(HumanPlayer::new(&self.player_o_name)),
        };
        Orchestrator::new(player_x, player_o)
    }
}

/// Fills in whatever `config` leaves unset by asking on the console.
#[instrument(skip_all)]
pub fn resolve_setup(config: &GameConfig, console: &mut Console) -> Result<MatchSetup> {
    let mode = match config.mode() {
        Some(mode) => *mode,
        None => choose_mode(console)?,
    };
    debug!(%mode, "Mode selected");

    let (x_prompt, o_prompt) = match mode {
        GameMode::Computer => ("Please enter your name: ", None),
        GameMode::Human => (
            "Player 1, enter your name: ",
            Some("Player 2, enter your name: "),
        ),
    };

    let player_x_name = match config.player_x_name() {
        Some(name) => name.clone(),
        None => ask_name(console, x_prompt, DEFAULT_X_NAME)?,
    };
    let player_o_name = match (config.player_o_name(), o_prompt) {
        (Some(name), _) => name.clone(),
        (None, Some(prompt)) => ask_name(console, prompt, DEFAULT_O_NAME)?,
        (None, None) => COMPUTER_NAME.to_string(),
    };

    info!(%mode, x = %player_x_name, o = %player_o_name, "Match set up");
    Ok(MatchSetup {
        mode,
        player_x_name,
        player_o_name,
    })
}

fn choose_mode(console: &mut Console) -> Result<GameMode> {
    console.say(MENU)?;
    loop {
        let Some(choice) = console
            .read_line("Enter 1 or 2: ")
            .context("Failed to read mode")?
        else {
            bail!("Input closed before a mode was chosen");
        };
        match GameMode::from_menu_choice(&choice) {
            Some(mode) => return Ok(mode),
            None => console.notice("Invalid input. Please enter 1 or 2.")?,
        }
    }
}

fn ask_name(console: &mut Console, prompt: &str, default: &str) -> Result<String> {
    let name = console
        .read_line(prompt)
        .context("Failed to read name")?
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default.to_string());
    Ok(name)
}
