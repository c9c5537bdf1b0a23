//! Optimal Tic-Tac-Toe - console game against a perfect opponent.

use anyhow::{Context, Result};
use clap::Parser;
use optimal_tictactoe::{Board, Mark, search};
use optimal_tictactoe_cli::cli::{Cli, Command, PlayArgs};
use optimal_tictactoe_cli::logging::init_tracing;
use optimal_tictactoe_cli::{Console, GameConfig, Session, resolve_setup};
use std::time::Duration;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Analyze { board, mark, json } => run_analyze(&board, mark, json),
    }
}

/// Play rounds on the console until the user stops
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = apply_overrides(GameConfig::load(args.config.as_deref())?, &args);
    info!(?config, "Starting play session");

    let mut console = Console::stdio()
        .with_color(*config.color())
        .with_clear_screen(*config.clear_screen());
    console.banner()?;

    let setup = resolve_setup(&config, &mut console)?;
    let orchestrator = setup.orchestrator(Duration::from_millis(*config.think_delay_ms()));
    let scoreboard = Session::new(orchestrator).run(&mut console)?;

    info!(
        x_wins = scoreboard.x_wins(),
        o_wins = scoreboard.o_wins(),
        draws = scoreboard.draws(),
        "Session ended"
    );
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(mut config: GameConfig, args: &PlayArgs) -> GameConfig {
    if let Some(mode) = args.mode {
        config = config.with_mode(Some(mode));
    }
    if let Some(name) = &args.name {
        config = config.with_player_x_name(Some(name.clone()));
    }
    if let Some(name) = &args.opponent_name {
        config = config.with_player_o_name(Some(name.clone()));
    }
    if let Some(delay) = args.think_delay_ms {
        config = config.with_think_delay_ms(delay);
    }
    if args.no_color {
        config = config.with_color(false);
    }
    if args.no_clear {
        config = config.with_clear_screen(false);
    }
    config
}

/// Print the engine's view of one board
#[instrument(skip(board), fields(board = %board))]
fn run_analyze(board: &Board, mark: Option<Mark>, json: bool) -> Result<()> {
    let mark = mark.unwrap_or_else(|| board.to_move());
    let report = search::analyze(board, mark).context("Nothing to analyze")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} to move on {}", mark, board);
    for candidate in report.candidates() {
        println!(
            "  row {}, col {}: {}",
            candidate.mv.row + 1,
            candidate.mv.col + 1,
            describe(candidate.score)
        );
    }
    let best = report.best();
    println!(
        "Best: row {}, col {} ({}, {} positions searched)",
        best.mv.row + 1,
        best.mv.col + 1,
        describe(best.score),
        report.nodes()
    );
    Ok(())
}

fn describe(score: search::Score) -> &'static str {
    match score {
        search::WIN => "win",
        search::LOSS => "loss",
        _ => "draw",
    }
}
