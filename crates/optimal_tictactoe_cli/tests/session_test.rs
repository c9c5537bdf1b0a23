//! Full console rounds driven by scripted input.

mod common;

use common::scripted_console;
use optimal_tictactoe::{Move, Outcome, Round};
use optimal_tictactoe_cli::players::{ComputerPlayer, Player};
use optimal_tictactoe_cli::{Console, GameMode, MatchSetup, Orchestrator, Session};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Tries the first cell ever played before each real move.
struct RetakesFirstCell {
    retrying: bool,
    calls: Rc<Cell<usize>>,
}

impl Player for RetakesFirstCell {
    fn get_move(&mut self, round: &Round, _console: &mut Console) -> anyhow::Result<Move> {
        self.calls.set(self.calls.get() + 1);
        self.retrying = !self.retrying;
        match round.history().first() {
            Some(first) if self.retrying => Ok(*first),
            _ => Ok(round.board().free_cells()[0]),
        }
    }

    fn name(&self) -> &str {
        "Retaker"
    }
}

fn setup(mode: GameMode, x: &str, o: &str) -> MatchSetup {
    MatchSetup {
        mode,
        player_x_name: x.to_string(),
        player_o_name: o.to_string(),
    }
}

#[test]
fn test_computer_punishes_a_weak_human() {
    // X: (1,1) (1,2) (2,1), with one attempt at the cell O just took.
    let (mut console, output) = scripted_console("1,1\n1,2\n1,3\n2,1\nn\n");
    let orchestrator = setup(GameMode::Computer, "Ada", "Computer").orchestrator(Duration::ZERO);

    let scoreboard = Session::new(orchestrator).run(&mut console).unwrap();
    assert_eq!(scoreboard.o_wins(), 1);
    assert_eq!(scoreboard.rounds(), 1);

    let output = output.contents();
    assert!(output.contains("Computer is thinking..."));
    assert!(output.contains("Computer chose position: row 2, col 2"));
    assert!(output.contains("Cell already taken. Try again."));
    assert!(output.contains("Computer chose position: row 3, col 1"));
    assert!(output.contains("Congratulations Computer! YOU WIN!"));
    assert!(output.contains("Computer: 1 | Draws: 0"));
    assert!(output.contains("Thanks for playing, have a wonderful day!"));
}

#[test]
fn test_play_again_keeps_score() {
    let input = [
        // Round 1: X takes the top row.
        "1,1", "2,1", "1,2", "2,2", "1,3", "y",
        // Round 2: X O X / X O O / O X X, a draw.
        "1,1", "1,2", "1,3", "2,2", "2,1", "2,3", "3,2", "3,1", "3,3", "N",
    ]
    .join("\n");
    let (mut console, output) = scripted_console(&input);
    let orchestrator = setup(GameMode::Human, "Ada", "Grace").orchestrator(Duration::ZERO);

    let scoreboard = Session::new(orchestrator).run(&mut console).unwrap();
    assert_eq!(scoreboard.x_wins(), 1);
    assert_eq!(scoreboard.o_wins(), 0);
    assert_eq!(scoreboard.draws(), 1);

    let output = output.contents();
    assert!(output.contains("Congratulations Ada! YOU WIN!"));
    assert!(output.contains("It's a draw!"));
    assert!(output.contains("Ada: 1 | Grace: 0 | Draws: 1"));
    assert_eq!(output.matches("Do you want to play again? (Y/N): ").count(), 2);
}

#[test]
fn test_bad_input_reprompts() {
    let input = "abc\n4,4\n1,1\n1,1\n2,1\n1,2\n2,2\n1,3\nn\n";
    let (mut console, output) = scripted_console(input);
    let orchestrator = setup(GameMode::Human, "Ada", "Grace").orchestrator(Duration::ZERO);

    let scoreboard = Session::new(orchestrator).run(&mut console).unwrap();
    assert_eq!(scoreboard.x_wins(), 1);

    let output = output.contents();
    assert_eq!(
        output
            .matches("Invalid input. Enter as row,col (e.g., 2,3).")
            .count(),
        2
    );
    assert_eq!(output.matches("Cell already taken. Try again.").count(), 1);
    assert!(output.contains("Grace (O), enter your move as row,col (e.g., 2,3): "));
}

#[test]
fn test_input_closed_mid_round() {
    let (mut console, _) = scripted_console("1,1\n");
    let orchestrator = setup(GameMode::Human, "Ada", "Grace").orchestrator(Duration::ZERO);
    assert!(Session::new(orchestrator).run(&mut console).is_err());
}

#[test]
fn test_engine_against_itself_draws() {
    let (mut console, output) = scripted_console("");
    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::new("Deep", Duration::ZERO)),
        Box::new(ComputerPlayer::new("Blue", Duration::ZERO)),
    );

    assert_eq!(orchestrator.play_round(&mut console).unwrap(), Outcome::Draw);
    assert_eq!(orchestrator.round().history().len(), 9);
    assert_eq!(
        output.contents().matches("Computer chose position").count(),
        9
    );

    orchestrator.restart();
    assert!(orchestrator.round().history().is_empty());
}

#[test]
fn test_illegal_move_asks_same_player_again() {
    let (mut console, _) = scripted_console("");
    let calls = Rc::new(Cell::new(0));
    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::new("Computer", Duration::ZERO)),
        Box::new(RetakesFirstCell {
            retrying: false,
            calls: Rc::clone(&calls),
        }),
    );

    let outcome = orchestrator.play_round(&mut console).unwrap();
    assert!(outcome.is_terminal());
    assert_ne!(outcome, Outcome::Win(optimal_tictactoe::Mark::O));

    // Every O move took one rejected attempt first.
    let o_moves = orchestrator.round().history().len() / 2;
    assert!(o_moves > 0);
    assert_eq!(calls.get(), o_moves * 2);
}
