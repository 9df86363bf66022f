//! Knuth's minimax strategy for Mastermind
//!
//! Keeps the set of secrets still consistent with every feedback seen, and
//! each turn picks the unused code whose worst-case feedback eliminates the
//! most of them.
//!
//! Scoring costs `|unused codes| × |possible secrets|` feedback computations
//! per turn. That is fine for the game's natural sizes (1296 codes for classic
//! Mastermind) and exponential in principle.

mod calculator;
mod selector;

pub use calculator::{minimax_score, partition_entropy, tally_outcomes, worst_case_remaining};
pub use selector::{choose_next_guess, select_best_guesses};

use super::GuessingStrategy;
use crate::core::{Board, Code, CodeSpace, Feedback, Turn};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The opening guess, independent of the secret
///
/// Fills the first half of the code (rounded up) with the range's first value
/// and the rest with its successor, generalising Knuth's `1122`. A
/// single-symbol range fills every position with that symbol.
///
/// # Examples
/// ```
/// use mastermind_solver::core::CodeSpace;
/// use mastermind_solver::solver::knuth::first_guess;
///
/// assert_eq!(first_guess(&CodeSpace::classic()).values(), &[0, 0, 1, 1]);
/// ```
#[must_use]
pub fn first_guess(space: &CodeSpace) -> Code {
    let range = space.value_range();
    let length = space.code_length();
    let first = range.start();

    let Some(second) = range.successor(first) else {
        return Code::from_trusted(vec![first; length]);
    };

    let first_half = length.div_ceil(2);
    let mut values = vec![first; first_half];
    values.resize(length, second);
    Code::from_trusted(values)
}

/// Minimax guessing strategy
///
/// Scoped to one game: the candidate set shrinks as turns are observed.
#[derive(Debug, Clone)]
pub struct KnuthGuessingStrategy {
    space: CodeSpace,
    all_possible_codes: Vec<Code>,
    possible_secret_codes: Vec<Code>,
    observed_turns: usize,
}

impl KnuthGuessingStrategy {
    /// Create a strategy for `space`, enumerating its whole universe up front
    #[must_use]
    pub fn new(space: CodeSpace) -> Self {
        let all_possible_codes: Vec<Code> = space.all_codes().collect();
        let possible_secret_codes = all_possible_codes.clone();

        Self {
            space,
            all_possible_codes,
            possible_secret_codes,
            observed_turns: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    /// Every code in the space, in lexicographic order
    #[inline]
    #[must_use]
    pub fn all_possible_codes(&self) -> &[Code] {
        &self.all_possible_codes
    }

    /// Secrets still consistent with every observed turn, in lexicographic order
    #[inline]
    #[must_use]
    pub fn possible_secret_codes(&self) -> &[Code] {
        &self.possible_secret_codes
    }

    /// Forget every observed turn and start again from the full universe
    pub fn reset(&mut self) {
        self.possible_secret_codes.clone_from(&self.all_possible_codes);
        self.observed_turns = 0;
    }

    /// Prune the candidate set with the turns not yet observed
    ///
    /// Only new turns are applied, since the candidate set already reflects
    /// earlier ones; called once per turn that is just the latest turn. A
    /// history shorter than what was already observed (an undo) restarts from
    /// the full universe.
    pub fn observe(&mut self, turns: &[Turn]) {
        if turns.len() < self.observed_turns {
            self.reset();
        }

        let before = self.possible_secret_codes.len();
        for turn in &turns[self.observed_turns..] {
            self.possible_secret_codes
                .retain(|secret| Feedback::compute(secret, turn.guess()) == turn.feedback());
        }
        self.observed_turns = turns.len();

        debug!(
            before,
            after = self.possible_secret_codes.len(),
            turns = turns.len(),
            "Pruned possible secrets"
        );
    }

    /// Choose the next guess from a bare turn history
    ///
    /// Works without a `Board`, so it can drive a game whose secret is unknown.
    /// Returns `None` only when every code has already been guessed. An empty
    /// history starts a new game.
    pub fn next_guess_for(&mut self, turns: &[Turn]) -> Option<Code> {
        self.observe(turns);

        if turns.is_empty() {
            return Some(first_guess(&self.space));
        }

        // Never repeat a guess
        let guessed: FxHashSet<&Code> = turns.iter().map(Turn::guess).collect();
        let unused_codes: Vec<&Code> = self
            .all_possible_codes
            .iter()
            .filter(|code| !guessed.contains(code))
            .collect();

        let best_guesses = select_best_guesses(&unused_codes, &self.possible_secret_codes);
        let guess = choose_next_guess(&best_guesses, &self.possible_secret_codes).cloned();

        debug!(
            unused = unused_codes.len(),
            tied = best_guesses.len(),
            possible = self.possible_secret_codes.len(),
            guess = ?guess.as_ref().map(ToString::to_string),
            "Selected minimax guess"
        );

        guess
    }
}

impl GuessingStrategy for KnuthGuessingStrategy {
    fn next_guess(&mut self, board: &Board) -> Option<Code> {
        self.next_guess_for(board.turns())
    }
}
