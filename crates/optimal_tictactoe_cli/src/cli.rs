//! Command-line interface for optimal_tictactoe.

use crate::input::{parse_board, parse_mark};
use crate::mode::GameMode;
use clap::{Args, Parser, Subcommand};
use optimal_tictactoe::{Board, Mark};
use std::path::PathBuf;

/// Optimal Tic-Tac-Toe - play against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "optimal_tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Where to write logs
    #[arg(long, global = true, default_value = "optimal_tictactoe.log")]
    pub log_file: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds on the console
    Play(PlayArgs),

    /// Score every move on a board and print the best one
    Analyze {
        /// Board row by row, e.g. "XX./.O./..."
        #[arg(value_parser = parse_board)]
        board: Board,

        /// Side to move (defaults to whoever's turn it is)
        #[arg(long, value_parser = parse_mark)]
        mark: Option<Mark>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for `play`. Each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Config file (defaults to optimal_tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Opponent: computer or human
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Name for X
    #[arg(short, long)]
    pub name: Option<String>,

    /// Name for O
    #[arg(long)]
    pub opponent_name: Option<String>,

    /// Pause before computer moves, in milliseconds
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between moves
    #[arg(long)]
    pub no_clear: bool,
}
