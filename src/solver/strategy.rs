//! Guessing strategies
//!
//! Defines the `GuessingStrategy` trait and the random baseline.

use super::KnuthGuessingStrategy;
use crate::core::{Board, Code, CodeSpace};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Produces the next code to guess for a game in progress
pub trait GuessingStrategy {
    /// Choose the next guess given the board so far
    ///
    /// Returns `None` only if the strategy has nothing left to guess.
    fn next_guess(&mut self, board: &Board) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Uniformly random guesses, ignoring history
    Random(RandomGuessingStrategy),
    /// Knuth's minimax search (default)
    Knuth(KnuthGuessingStrategy),
}

impl GuessingStrategy for StrategyType {
    fn next_guess(&mut self, board: &Board) -> Option<Code> {
        match self {
            Self::Random(s) => s.next_guess(board),
            Self::Knuth(s) => s.next_guess(board),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "knuth", "minimax".
    /// Defaults to Knuth if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, space: CodeSpace) -> Self {
        match name {
            "random" => Self::Random(RandomGuessingStrategy::new(space)),
            _ => Self::Knuth(KnuthGuessingStrategy::new(space)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Knuth(_) => "knuth",
        }
    }
}

/// Random strategy
///
/// Draws a fresh uniformly random code on every call. No memory, so it may
/// repeat itself; useful as a baseline only.
#[derive(Debug, Clone)]
pub struct RandomGuessingStrategy {
    space: CodeSpace,
    rng: StdRng,
}

impl RandomGuessingStrategy {
    /// Create a random strategy seeded from the operating system
    #[must_use]
    pub fn new(space: CodeSpace) -> Self {
        Self {
            space,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible random strategy
    #[must_use]
    pub fn with_seed(space: CodeSpace, seed: u64) -> Self {
        Self {
            space,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl GuessingStrategy for RandomGuessingStrategy {
    fn next_guess(&mut self, _board: &Board) -> Option<Code> {
        Some(self.space.random_code(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueRange;

    fn board(space: &CodeSpace) -> Board {
        Board::new(space.code(&vec![0; space.code_length()]).unwrap(), 12)
    }

    #[test]
    fn from_name_selects_strategy() {
        let space = CodeSpace::classic();

        assert!(matches!(
            StrategyType::from_name("random", space),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("knuth", space),
            StrategyType::Knuth(_)
        ));
        assert!(matches!(
            StrategyType::from_name("minimax", space),
            StrategyType::Knuth(_)
        ));
        assert!(matches!(
            StrategyType::from_name("nonsense", space),
            StrategyType::Knuth(_)
        ));
        assert_eq!(StrategyType::from_name("random", space).name(), "random");
    }

    #[test]
    fn random_guesses_fit_the_space() {
        let space = CodeSpace::new(5, ValueRange::new(3, 7).unwrap()).unwrap();
        let mut strategy = RandomGuessingStrategy::with_seed(space, 42);
        let board = board(&CodeSpace::new(5, ValueRange::new(0, 7).unwrap()).unwrap());

        for _ in 0..200 {
            let guess = strategy.next_guess(&board).unwrap();
            assert!(space.validate(&guess).is_ok());
        }
    }

    #[test]
    fn random_with_seed_is_reproducible() {
        let space = CodeSpace::classic();
        let board = board(&space);
        let mut first = RandomGuessingStrategy::with_seed(space, 7);
        let mut second = RandomGuessingStrategy::with_seed(space, 7);

        for _ in 0..20 {
            assert_eq!(first.next_guess(&board), second.next_guess(&board));
        }
    }

    #[test]
    fn random_guesses_vary() {
        let space = CodeSpace::classic();
        let board = board(&space);
        let mut strategy = RandomGuessingStrategy::with_seed(space, 1);

        let guesses: Vec<Code> = (0..50).filter_map(|_| strategy.next_guess(&board)).collect();
        assert!(guesses.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn strategy_type_dispatches_to_knuth() {
        let space = CodeSpace::classic();
        let mut strategy = StrategyType::from_name("knuth", space);

        let guess = strategy.next_guess(&board(&space)).unwrap();
        assert_eq!(guess.values(), &[0, 0, 1, 1]);
    }
}
