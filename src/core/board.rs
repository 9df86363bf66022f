//! Game board: the secret, the turn limit and the history of turns
//!
//! The board is the only game state that changes, and it changes only through
//! `add_guess`. Once a winner is decided it rejects every further guess.

use super::{Code, Turn};
use std::fmt;
use tracing::trace;

/// Which side won a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The secret was guessed within the turn limit
    CodeBreaker,
    /// The turn limit ran out first
    CodeMaker,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeBreaker => write!(f, "code breaker"),
            Self::CodeMaker => write!(f, "code maker"),
        }
    }
}

/// Error returned when a guess is submitted after the game is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverError;

impl fmt::Display for GameOverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The game is over")
    }
}

impl std::error::Error for GameOverError {}

/// Mastermind board state
#[derive(Debug, Clone)]
pub struct Board {
    secret_code: Code,
    max_turns: usize,
    turns: Vec<Turn>,
}

impl Board {
    /// Start a new game against `secret_code` with at most `max_turns` guesses
    ///
    /// `max_turns` must be at least 1; `GameConfig` rejects zero.
    #[must_use]
    pub const fn new(secret_code: Code, max_turns: usize) -> Self {
        debug_assert!(max_turns > 0, "a board needs at least one turn");
        Self {
            secret_code,
            max_turns,
            turns: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret_code(&self) -> &Code {
        &self.secret_code
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[inline]
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret_code.len()
    }

    /// All turns played so far, oldest first
    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[inline]
    #[must_use]
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Guesses left before the code maker wins
    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        self.max_turns.saturating_sub(self.turns.len())
    }

    /// Score a guess against the secret and append the turn
    ///
    /// # Errors
    /// Returns `GameOverError` if the game is already decided; the board is
    /// left unchanged.
    pub fn add_guess(&mut self, guess: Code) -> Result<&Turn, GameOverError> {
        if self.game_over() {
            return Err(GameOverError);
        }

        debug_assert_eq!(guess.len(), self.code_length(), "guess length mismatch");

        let turn = Turn::scored(&self.secret_code, guess);
        trace!(
            turn = self.turns.len() + 1,
            guess = %turn.guess(),
            exact = turn.feedback().exact_matches(),
            partial = turn.feedback().partial_matches(),
            "Guess scored"
        );
        self.turns.push(turn);

        Ok(&self.turns[self.turns.len() - 1])
    }

    /// Decide the winner, if any
    ///
    /// - `CodeBreaker` if the latest guess matched every position
    /// - `CodeMaker` if `max_turns` guesses were made without that
    /// - `None` while the game is still in progress
    ///
    /// An exact match on the final allowed turn is a code breaker win.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        let last = self.turns.last()?;

        if last.feedback().is_perfect(self.code_length()) {
            return Some(Winner::CodeBreaker);
        }
        if self.turns.len() >= self.max_turns {
            return Some(Winner::CodeMaker);
        }
        None
    }

    /// True once a winner is decided
    #[inline]
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.winner().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeSpace, Feedback};

    fn code(values: &[u8]) -> Code {
        CodeSpace::classic().code(values).unwrap()
    }

    fn board() -> Board {
        Board::new(code(&[1, 2, 3, 4]), 3)
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one turn")]
    fn zero_turn_board_is_rejected() {
        let _ = Board::new(code(&[1, 2, 3, 4]), 0);
    }

    #[test]
    fn new_board_is_empty() {
        let board = board();
        assert_eq!(board.secret_code(), &code(&[1, 2, 3, 4]));
        assert_eq!(board.max_turns(), 3);
        assert!(board.turns().is_empty());
        assert_eq!(board.turns_remaining(), 3);
        assert_eq!(board.winner(), None);
        assert!(!board.game_over());
    }

    #[test]
    fn add_guess_records_turn() {
        let mut board = board();

        let turn = board.add_guess(code(&[1, 1, 2, 2])).unwrap();
        assert_eq!(turn.feedback(), Feedback::new(1, 1));

        assert_eq!(board.turns().len(), 1);
        assert_eq!(board.turns()[0].guess(), &code(&[1, 1, 2, 2]));
        assert_eq!(board.turns_remaining(), 2);
    }

    #[test]
    fn add_guess_keeps_order() {
        let mut board = board();
        board.add_guess(code(&[1, 1, 2, 2])).unwrap();
        board.add_guess(code(&[1, 2, 3, 3])).unwrap();

        assert_eq!(board.turns().len(), 2);
        assert_eq!(board.turns()[0].guess(), &code(&[1, 1, 2, 2]));
        assert_eq!(board.turns()[1].guess(), &code(&[1, 2, 3, 3]));
        assert_eq!(board.last_turn().unwrap().feedback(), Feedback::new(3, 0));
        assert!(!board.game_over());
    }

    #[test]
    fn add_guess_after_win_is_rejected() {
        let mut board = board();
        board.add_guess(code(&[1, 1, 2, 2])).unwrap();
        board.add_guess(code(&[1, 2, 3, 4])).unwrap();

        let result = board.add_guess(code(&[1, 2, 3, 4]));
        assert_eq!(result.unwrap_err(), GameOverError);
        assert_eq!(GameOverError.to_string(), "The game is over");
        assert_eq!(board.turns().len(), 2);
    }

    #[test]
    fn add_guess_after_turn_limit_is_rejected() {
        let mut board = board();
        for values in [[1, 1, 1, 1], [2, 2, 2, 2], [3, 3, 3, 3]] {
            board.add_guess(code(&values)).unwrap();
        }

        assert!(board.add_guess(code(&[4, 4, 4, 4])).is_err());
        assert!(board.add_guess(code(&[1, 2, 3, 4])).is_err());
        assert_eq!(board.turns().len(), 3);
    }

    #[test]
    fn winner_code_maker_after_max_turns() {
        let mut board = board();
        for values in [[1, 1, 1, 1], [2, 2, 2, 2], [3, 3, 3, 3]] {
            assert_eq!(board.winner(), None);
            board.add_guess(code(&values)).unwrap();
        }

        assert_eq!(board.winner(), Some(Winner::CodeMaker));
        assert!(board.game_over());
        assert_eq!(board.turns_remaining(), 0);
    }

    #[test]
    fn winner_code_breaker_before_limit() {
        let mut board = board();
        board.add_guess(code(&[1, 1, 2, 2])).unwrap();
        board.add_guess(code(&[1, 2, 3, 4])).unwrap();

        assert_eq!(board.winner(), Some(Winner::CodeBreaker));
        assert!(board.game_over());
    }

    #[test]
    fn winner_code_breaker_on_final_turn() {
        let mut board = board();
        board.add_guess(code(&[1, 1, 1, 1])).unwrap();
        board.add_guess(code(&[2, 2, 2, 2])).unwrap();
        board.add_guess(code(&[1, 2, 3, 4])).unwrap();

        assert_eq!(board.winner(), Some(Winner::CodeBreaker));
    }

    #[test]
    fn winner_display() {
        assert_eq!(Winner::CodeBreaker.to_string(), "code breaker");
        assert_eq!(Winner::CodeMaker.to_string(), "code maker");
    }
}
