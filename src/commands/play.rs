//! Console game mode
//!
//! A line-based `GameIo` that plays a full game through the `GameEngine`.

use crate::core::{Board, Code, CodeSpace, Winner};
use crate::game::{
    ComputerPlayer, GameConfig, GameEngine, GameIo, GameOutcome, HumanPlayer, Player,
};
use crate::output::formatters::{colored_code, colored_pegs};
use crate::solver::StrategyType;
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Who sits in a seat at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Seat {
    Human,
    Computer,
}

/// Console I/O over any line reader and writer
///
/// Malformed codes are reported and asked for again; end of input is an error.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed");
        }
        Ok(line.trim().to_string())
    }

    fn prompt_code(&mut self, prompt: &str, space: &CodeSpace) -> Result<Code> {
        loop {
            let line = self.prompt(prompt)?;
            match space.parse_code(&line) {
                Ok(code) => return Ok(code),
                Err(e) => writeln!(self.output, "{} {e}", "✗".red())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> GameIo for ConsoleIo<R, W> {
    fn start_game(&mut self, config: &GameConfig) -> Result<()> {
        let range = config.value_range();
        writeln!(self.output, "\n{}", "═".repeat(60).cyan())?;
        writeln!(self.output, " {}", "MASTERMIND".bright_cyan().bold())?;
        writeln!(self.output, "{}", "═".repeat(60).cyan())?;
        writeln!(
            self.output,
            "Codes have {} values from {} to {}; the code breaker has {} turns.",
            config.code_length(),
            range.start(),
            range.end(),
            config.max_turns()
        )?;
        writeln!(
            self.output,
            "Enter codes as digits (\"0011\") or separated values (\"0 0 1 1\").\n"
        )?;
        Ok(())
    }

    fn create_secret_code(&mut self, space: &CodeSpace) -> Result<Code> {
        let code = self.prompt_code("Code maker, enter the secret code", space)?;
        // Scroll the secret off a shared screen
        writeln!(self.output, "{}", "\n".repeat(40))?;
        Ok(code)
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "{}", "─".repeat(40).bright_black())?;
        for (i, turn) in board.turns().iter().enumerate() {
            writeln!(
                self.output,
                "{:>3}. {}  {}",
                i + 1,
                colored_code(turn.guess()),
                colored_pegs(turn.feedback(), board.code_length())
            )?;
        }
        writeln!(
            self.output,
            "{} turns remaining",
            board.turns_remaining()
        )?;
        Ok(())
    }

    fn make_guess(&mut self, board: &Board, space: &CodeSpace) -> Result<Code> {
        let prompt = format!("Guess {}", board.turns().len() + 1);
        self.prompt_code(&prompt, space)
    }

    fn announce_winner(&mut self, board: &Board, winner: Winner) -> Result<()> {
        self.show_board(board)?;
        let message = match winner {
            Winner::CodeBreaker => format!(
                "The code breaker wins in {} turns!",
                board.turns().len()
            )
            .green()
            .bold(),
            Winner::CodeMaker => "The code maker wins!".yellow().bold(),
        };
        writeln!(self.output, "\n{message}")?;
        writeln!(
            self.output,
            "The secret code was {}",
            colored_code(board.secret_code())
        )?;
        Ok(())
    }
}

fn seat_player(seat: Seat, name: &str, strategy_name: &str, space: CodeSpace) -> Box<dyn Player> {
    match seat {
        Seat::Human => Box::new(HumanPlayer::new(name)),
        Seat::Computer => Box::new(ComputerPlayer::new(
            format!("Computer ({name})"),
            StrategyType::from_name(strategy_name, space),
        )),
    }
}

/// Play one console game
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    config: GameConfig,
    maker: Seat,
    breaker: Seat,
    strategy_name: &str,
    io: &mut ConsoleIo<R, W>,
) -> Result<GameOutcome> {
    let space = config.space();
    let mut code_maker = seat_player(maker, "Code maker", strategy_name, space);
    let mut code_breaker = seat_player(breaker, "Code breaker", strategy_name, space);

    GameEngine::new(config).run(code_maker.as_mut(), code_breaker.as_mut(), io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleIo<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(io: ConsoleIo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(io.into_output()).unwrap()
    }

    #[test]
    fn human_versus_human() {
        let mut io = console("1234\n1122\n1 2 3 4\n");

        let outcome =
            run_play(GameConfig::default(), Seat::Human, Seat::Human, "knuth", &mut io).unwrap();

        assert_eq!(outcome.winner, Winner::CodeBreaker);
        assert_eq!(outcome.guesses(), 2);
        assert!(output(io).contains("The code breaker wins in 2 turns!"));
    }

    #[test]
    fn malformed_guess_is_asked_again() {
        let mut io = console("1234\n12\n9999\nabcd\n1234\n");

        let outcome =
            run_play(GameConfig::default(), Seat::Human, Seat::Human, "knuth", &mut io).unwrap();

        assert_eq!(outcome.guesses(), 1);
        let text = output(io);
        assert_eq!(text.matches("Guess 1:").count(), 4);
    }

    #[test]
    fn computer_breaks_human_secret() {
        let mut io = console("0123\n");

        let outcome = run_play(
            GameConfig::default(),
            Seat::Human,
            Seat::Computer,
            "knuth",
            &mut io,
        )
        .unwrap();

        assert_eq!(outcome.winner, Winner::CodeBreaker);
        assert_eq!(outcome.guesses(), 3);
    }

    #[test]
    fn code_maker_wins_on_turn_limit() {
        let config = GameConfig::with_space(CodeSpace::classic(), 1).unwrap();
        let mut io = console("1234\n0000\n");

        let outcome = run_play(config, Seat::Human, Seat::Human, "knuth", &mut io).unwrap();

        assert_eq!(outcome.winner, Winner::CodeMaker);
        assert!(output(io).contains("The code maker wins!"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut io = console("1234\n");

        let err = run_play(GameConfig::default(), Seat::Human, Seat::Human, "knuth", &mut io)
            .unwrap_err();

        assert_eq!(err.to_string(), "Input closed");
    }
}
