//! Console rendering and line input.

use crate::orchestrator::GameEvent;
use crate::scoreboard::Scoreboard;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use optimal_tictactoe::{Board, Mark, Outcome, Position, Square};
use std::io::{self, BufRead, Write};

/// Line-oriented console: reads answers, writes the board and messages.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    color: bool,
    clear_screen: bool,
}

impl Console {
    /// Creates a console over arbitrary streams, with plain output.
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            input,
            output,
            color: false,
            clear_screen: false,
        }
    }

    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdin().lock()), Box::new(io::stdout()))
    }

    /// Enables or disables ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enables or disables clearing the terminal between redraws.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Writes `prompt` and reads one line, without the line ending.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes a plain line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes a yellow notice, used for rejected input.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        let text = self.paint(text, Color::Yellow);
        writeln!(self.output, "{}", text)
    }

    /// Announces that the computer is choosing a move.
    pub fn thinking(&mut self) -> io::Result<()> {
        let text = self.paint("Computer is thinking...", Color::Magenta);
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Prints the welcome banner.
    pub fn banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(30);
        let banner = format!("{rule}\n  WELCOME TO TIC TAC TOE!\n{rule}");
        let banner = self.paint(&banner, Color::Cyan);
        writeln!(self.output, "{}\n", banner)
    }

    /// Draws the view for one orchestrator event.
    pub fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::RoundStarted { board } => self.redraw(board),
            GameEvent::MoveMade {
                mv,
                by_computer,
                board,
            } => {
                self.redraw(board)?;
                if *by_computer {
                    let text = format!(
                        "Computer chose position: row {}, col {}",
                        mv.row + 1,
                        mv.col + 1
                    );
                    let text = self.paint(&text, Color::Red);
                    writeln!(self.output, "{}", text)?;
                }
                Ok(())
            }
            GameEvent::GameOver { outcome, winner } => self.result(*outcome, winner.as_deref()),
        }
    }

    /// Prints the running tally.
    pub fn scoreboard(
        &mut self,
        scoreboard: &Scoreboard,
        x_name: &str,
        o_name: &str,
    ) -> io::Result<()> {
        let title = self.paint("Scoreboard:", Color::Yellow);
        let x = self.paint(&format!("{}: {}", x_name, scoreboard.x_wins()), Color::Blue);
        let o = self.paint(&format!("{}: {}", o_name, scoreboard.o_wins()), Color::Red);
        writeln!(self.output, "\n{}", title)?;
        writeln!(self.output, "{} | {} | Draws: {}\n", x, o, scoreboard.draws())
    }

    /// Prints the goodbye line.
    pub fn farewell(&mut self) -> io::Result<()> {
        let text = self.paint("Thanks for playing, have a wonderful day!", Color::Magenta);
        writeln!(self.output, "\n{}\n", text)?;
        self.output.flush()
    }

    fn redraw(&mut self, board: &Board) -> io::Result<()> {
        if self.clear_screen {
            crossterm::queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.banner()?;
        let you = self.paint("You are X", Color::Blue);
        let them = self.paint("Computer or Player 2 is O", Color::Red);
        writeln!(self.output, "{}, {}.", you, them)?;
        for line in board_lines(board, self.color) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;
        self.output.flush()
    }

    fn result(&mut self, outcome: Outcome, winner: Option<&str>) -> io::Result<()> {
        let (text, color) = match (outcome, winner) {
            (Outcome::Win(Mark::X), Some(name)) => {
                (format!("Congratulations {}! YOU WIN! 🎉", name), Color::Green)
            }
            (Outcome::Win(Mark::O), Some(name)) => {
                (format!("Congratulations {}! YOU WIN! 🎉", name), Color::Red)
            }
            _ => ("It's a draw! 😐".to_string(), Color::Yellow),
        };
        let text = self.paint(&text, color);
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// The board as console lines: a column header, three rows with 1-based
/// row labels, and dividers between rows.
pub fn board_lines(board: &Board, color: bool) -> Vec<String> {
    let mut lines = vec!["      1   2   3".to_string()];
    for row in 0..3 {
        let cells = (0..3)
            .filter_map(|col| Position::from_coords(row, col))
            .map(|pos| cell_symbol(board.get(pos), color))
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(format!("   {}  {}", row + 1, cells));
        if row < 2 {
            lines.push("     ---+---+---".to_string());
        }
    }
    lines
}

fn cell_symbol(square: Square, color: bool) -> String {
    match (square, color) {
        (Square::Empty, _) => " ".to_string(),
        (Square::Occupied(mark), false) => mark.to_string(),
        (Square::Occupied(Mark::X), true) => "X".with(Color::Blue).to_string(),
        (Square::Occupied(Mark::O), true) => "O".with(Color::Red).to_string(),
    }
}
