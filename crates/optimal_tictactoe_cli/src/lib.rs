//! Console front end for optimal_tictactoe.
//!
//! X is always a human at the keyboard. O is either the minimax engine or a
//! second human sharing the console. Rounds repeat until the user declines
//! another, with a running scoreboard.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod menu;
pub mod mode;
pub mod orchestrator;
pub mod players;
pub mod scoreboard;
pub mod session;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use menu::{MatchSetup, resolve_setup};
pub use mode::GameMode;
pub use orchestrator::{GameEvent, Orchestrator};
pub use scoreboard::Scoreboard;
pub use session::Session;
pub use ui::Console;
