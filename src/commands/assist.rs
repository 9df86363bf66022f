//! Codebreaking assistant
//!
//! Helps with a game played elsewhere: suggests minimax guesses and reads back
//! the feedback the code maker gave.

use crate::core::{CodeSpace, Feedback, Turn};
use crate::output::formatters::{colored_code, colored_pegs};
use crate::solver::KnuthGuessingStrategy;
use crate::solver::knuth::worst_case_remaining;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// How an assistant session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistSummary {
    pub games_solved: usize,
}

/// What the player typed at the feedback prompt
enum Reply {
    Feedback(Feedback),
    Undo,
    New,
    Quit,
}

fn parse_reply(line: &str, code_length: usize) -> Option<Reply> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Reply::Quit),
        "new" | "n" => Some(Reply::New),
        "undo" | "u" => Some(Reply::Undo),
        "win" | "solved" => Some(Reply::Feedback(Feedback::perfect(code_length))),
        other => other
            .parse::<Feedback>()
            .ok()
            .filter(|feedback| feedback.is_possible(code_length))
            .map(Reply::Feedback),
    }
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the assistant until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<R: BufRead, W: Write>(
    space: CodeSpace,
    mut input: R,
    mut output: W,
) -> Result<AssistSummary> {
    let code_length = space.code_length();
    let mut strategy = KnuthGuessingStrategy::new(space);
    let mut turns: Vec<Turn> = Vec::new();
    let mut games_solved = 0;

    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(output, " {}", "MASTERMIND ASSISTANT".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(output, "Play each suggested guess, then enter the feedback as")?;
    writeln!(output, "\"exact partial\" (e.g. \"1 2\"), or 'win' if it was right.")?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'\n")?;

    loop {
        strategy.observe(&turns);
        let candidates = strategy.possible_secret_codes().len();

        if candidates == 0 {
            writeln!(
                output,
                "\n{} No code fits that feedback; some of it must be wrong.",
                "✗".red()
            )?;
            writeln!(output, "Type 'undo' to go back, or 'new' to start over.")?;
        }

        let suggestion = if candidates == 0 {
            None
        } else {
            strategy.next_guess_for(&turns)
        };

        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(
            output,
            "Turn {}: {candidates} possible codes",
            turns.len() + 1
        )?;

        if let Some(guess) = &suggestion {
            let worst = worst_case_remaining(guess, strategy.possible_secret_codes());
            writeln!(output, "Suggested guess: {}", colored_code(guess))?;
            writeln!(output, "  Worst case:    {worst} codes remain")?;

            if candidates <= 10 {
                let listing: Vec<String> = strategy
                    .possible_secret_codes()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(output, "  Possible:      {}", listing.join(" "))?;
            }
        }

        let reply = loop {
            let Some(line) = read_line(&mut input, &mut output, "Feedback")? else {
                writeln!(output)?;
                return Ok(AssistSummary { games_solved });
            };

            match parse_reply(&line, code_length) {
                Some(Reply::Feedback(_)) if suggestion.is_none() => {
                    writeln!(output, "Nothing to score; 'undo' or 'new'.")?;
                }
                Some(reply) => break reply,
                None => writeln!(
                    output,
                    "{} Enter two numbers like \"1 2\", 'win', or a command.",
                    "✗".red()
                )?,
            }
        };

        match reply {
            Reply::Quit => {
                writeln!(output, "\nGoodbye!")?;
                return Ok(AssistSummary { games_solved });
            }
            Reply::New => {
                turns.clear();
                writeln!(output, "\nNew game started.")?;
            }
            Reply::Undo => {
                if turns.pop().is_some() {
                    writeln!(output, "Undone; back to turn {}.", turns.len() + 1)?;
                } else {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            Reply::Feedback(feedback) => {
                let Some(guess) = suggestion else {
                    continue;
                };
                writeln!(
                    output,
                    "  {}  {}",
                    colored_code(&guess),
                    colored_pegs(feedback, code_length)
                )?;
                turns.push(Turn::new(guess, feedback));
                debug!(turn = turns.len(), %feedback, "Feedback entered");

                if feedback.is_perfect(code_length) {
                    games_solved += 1;
                    writeln!(
                        output,
                        "\n{}",
                        format!("Solved in {} guesses!", turns.len()).green().bold()
                    )?;
                    turns.clear();
                    writeln!(output, "Starting a new game.\n")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn assist(input: &str) -> (AssistSummary, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let summary =
            run_assist(CodeSpace::classic(), Cursor::new(input.to_string()), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn follows_minimax_line() {
        // Secret 0123: 0011 scores 1 1, 0023 scores 3 0
        let (summary, text) = assist("1 1\n3 0\nwin\nquit\n");

        assert_eq!(summary.games_solved, 1);
        assert!(text.contains("Suggested guess: 0011"));
        assert!(text.contains("Suggested guess: 0023"));
        assert!(text.contains("Suggested guess: 0123"));
        assert!(text.contains("Solved in 3 guesses!"));
    }

    #[test]
    fn undo_restores_previous_suggestion() {
        let (_, text) = assist("1 1\nundo\n1 1\nquit\n");

        assert_eq!(text.matches("Suggested guess: 0023").count(), 2);
        assert!(text.contains("Undone; back to turn 1."));
    }

    #[test]
    fn impossible_feedback_is_rejected() {
        let (_, text) = assist("3 1\n5 0\nquit\n");

        assert_eq!(text.matches("Enter two numbers").count(), 2);
        assert_eq!(text.matches("Suggested guess: 0011").count(), 1);
    }

    #[test]
    fn contradictory_feedback_is_reported() {
        // Every rearrangement of 0011 has an even number of exact matches
        let (_, text) = assist("1 3\n1 1\nundo\nquit\n");

        assert!(text.contains("Turn 2: 0 possible codes"));
        assert!(text.contains("No code fits that feedback"));
        assert!(text.contains("Nothing to score"));
        assert!(text.contains("Undone; back to turn 1."));
    }

    #[test]
    fn new_game_resets_history() {
        let (_, text) = assist("1 1\nnew\nquit\n");

        assert!(text.contains("New game started."));
        assert_eq!(text.matches("Turn 1:").count(), 2);
    }

    #[test]
    fn end_of_input_ends_session() {
        let (summary, _) = assist("");
        assert_eq!(summary.games_solved, 0);
    }

    #[test]
    fn parse_reply_accepts_commands_and_feedback() {
        assert!(matches!(parse_reply("Q", 4), Some(Reply::Quit)));
        assert!(matches!(parse_reply("undo", 4), Some(Reply::Undo)));
        assert!(matches!(parse_reply("n", 4), Some(Reply::New)));
        assert!(matches!(
            parse_reply("win", 4),
            Some(Reply::Feedback(f)) if f == Feedback::perfect(4)
        ));
        assert!(matches!(
            parse_reply("2/1", 4),
            Some(Reply::Feedback(f)) if f == Feedback::new(2, 1)
        ));
        assert!(parse_reply("3 1", 4).is_none());
        assert!(parse_reply("hello", 4).is_none());
    }
}
