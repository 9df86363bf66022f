//! Code solving command
//!
//! Plays a strategy against a known secret and records the solution path.

use crate::core::{Board, Code, CodeSpace, Feedback, Winner};
use crate::solver::knuth::{minimax_score, worst_case_remaining};
use crate::solver::{GuessingStrategy, KnuthGuessingStrategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub target: String,
    pub space: CodeSpace,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, space: CodeSpace, max_turns: usize) -> Self {
        Self {
            target,
            space,
            max_turns,
        }
    }
}

/// Result of solving a code
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
#[derive(Debug)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub minimax_score: Option<usize>,
    pub worst_case: Option<usize>,
}

/// Play `strategy` against `board` until the game is decided
///
/// Returns the winner, or `None` if the strategy ran out of guesses first.
pub fn play_out<S: GuessingStrategy>(strategy: &mut S, board: &mut Board) -> Option<Winner> {
    while board.winner().is_none() {
        let guess = strategy.next_guess(board)?;
        board.add_guess(guess).ok()?;
    }
    board.winner()
}

/// Solve a specific code using the given strategy
///
/// Candidate counts come from a separate minimax tracker, so they are reported
/// the same way whichever strategy is guessing.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid code for the configured space
/// - The maximum number of turns is zero
/// - The strategy cannot provide a guess
pub fn solve_code<S: GuessingStrategy>(
    config: SolveConfig,
    strategy: &mut S,
) -> Result<SolveResult, String> {
    let secret = config
        .space
        .parse_code(&config.target)
        .map_err(|e| format!("Invalid secret code: {e}"))?;

    if config.max_turns == 0 {
        return Err("Maximum turns must be at least 1".to_string());
    }

    let mut tracker = KnuthGuessingStrategy::new(config.space);
    let mut board = Board::new(secret.clone(), config.max_turns);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !board.game_over() {
        let candidates_before = tracker.possible_secret_codes().len();

        let guess = strategy
            .next_guess(&board)
            .ok_or_else(|| "No guesses remaining".to_string())?;

        // Scoring only means something while there is more than one candidate
        let (minimax, worst_case) = if candidates_before > 1 {
            let candidates = tracker.possible_secret_codes();
            (
                Some(minimax_score(&guess, candidates)),
                Some(worst_case_remaining(&guess, candidates)),
            )
        } else {
            (None, None)
        };

        let feedback = board
            .add_guess(guess.clone())
            .map_err(|e| e.to_string())?
            .feedback();

        tracker.observe(board.turns());

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: tracker.possible_secret_codes().len(),
            minimax_score: minimax,
            worst_case,
        });
    }

    Ok(SolveResult {
        success: board.winner() == Some(Winner::CodeBreaker),
        guesses,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueRange;
    use crate::solver::{RandomGuessingStrategy, StrategyType};

    fn knuth() -> StrategyType {
        StrategyType::from_name("knuth", CodeSpace::classic())
    }

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new("0123".to_string(), CodeSpace::classic(), 12);

        let result = solve_code(config, &mut knuth()).unwrap();

        assert!(result.success);
        assert_eq!(result.secret.to_string(), "0123");
        let path: Vec<String> = result.guesses.iter().map(|s| s.guess.to_string()).collect();
        assert_eq!(path, ["0011", "0023", "0123"]);
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let config = SolveConfig::new("5 4 3 2".to_string(), CodeSpace::classic(), 12);

        let result = solve_code(config, &mut knuth()).unwrap();

        assert_eq!(result.guesses[0].candidates_before, 1296);
        assert_eq!(result.guesses[0].minimax_score, Some(1296 - 256));
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let config = SolveConfig::new("0129".to_string(), CodeSpace::classic(), 12);

        let result = solve_code(config, &mut knuth());

        assert!(result.unwrap_err().starts_with("Invalid secret code"));
    }

    #[test]
    fn solve_with_max_turns_limit() {
        let config = SolveConfig::new("5432".to_string(), CodeSpace::classic(), 3);

        let result = solve_code(config, &mut knuth()).unwrap();

        // 5432 needs five guesses
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 3);
    }

    #[test]
    fn solve_zero_turns_is_an_error() {
        let config = SolveConfig::new("0123".to_string(), CodeSpace::classic(), 0);
        assert!(solve_code(config, &mut knuth()).is_err());
    }

    #[test]
    fn solve_with_random_strategy_respects_limit() {
        let space = CodeSpace::new(2, ValueRange::new(0, 1).unwrap()).unwrap();
        let config = SolveConfig::new("10".to_string(), space, 50);
        let mut strategy = RandomGuessingStrategy::with_seed(space, 11);

        let result = solve_code(config, &mut strategy).unwrap();

        // Four codes and fifty tries: a seeded random run finds it
        assert!(result.success);
        assert!(result.guesses.len() <= 50);
    }

    #[test]
    fn play_out_reports_winner() {
        let space = CodeSpace::classic();
        let mut board = Board::new(space.code(&[3, 3, 3, 3]).unwrap(), 12);
        let mut strategy = KnuthGuessingStrategy::new(space);

        assert_eq!(
            play_out(&mut strategy, &mut board),
            Some(Winner::CodeBreaker)
        );
        assert_eq!(board.turns().len(), 4);
    }
}
