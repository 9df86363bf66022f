//! Players: the computer and people typing at the console

use super::GameIo;
use crate::core::{Board, Code, CodeSpace};
use crate::solver::{GuessingStrategy, StrategyType};
use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Someone who can make a secret code or break one
pub trait Player {
    fn name(&self) -> &str;

    /// Produce the secret code for a new game
    fn create_secret_code(&mut self, space: &CodeSpace, io: &mut dyn GameIo) -> Result<Code>;

    /// Produce the next guess for the game on `board`
    fn make_guess(&mut self, board: &Board, space: &CodeSpace, io: &mut dyn GameIo)
    -> Result<Code>;
}

/// A computer player
///
/// Makes uniformly random secret codes and guesses with its strategy. The
/// strategy keeps per-game state, so use one player per game.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    strategy: StrategyType,
    rng: StdRng,
}

impl ComputerPlayer {
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: StrategyType) -> Self {
        Self {
            name: name.into(),
            strategy,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a player whose secret codes are reproducible
    #[must_use]
    pub fn with_seed(name: impl Into<String>, strategy: StrategyType, seed: u64) -> Self {
        Self {
            name: name.into(),
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyType {
        &self.strategy
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_secret_code(&mut self, space: &CodeSpace, _io: &mut dyn GameIo) -> Result<Code> {
        Ok(space.random_code(&mut self.rng))
    }

    fn make_guess(
        &mut self,
        board: &Board,
        _space: &CodeSpace,
        _io: &mut dyn GameIo,
    ) -> Result<Code> {
        self.strategy
            .next_guess(board)
            .ok_or_else(|| anyhow!("{} has run out of codes to guess", self.name))
    }
}

/// A person at the console; every decision goes through the `GameIo`
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_secret_code(&mut self, space: &CodeSpace, io: &mut dyn GameIo) -> Result<Code> {
        io.create_secret_code(space)
    }

    fn make_guess(
        &mut self,
        board: &Board,
        space: &CodeSpace,
        io: &mut dyn GameIo,
    ) -> Result<Code> {
        io.make_guess(board, space)
    }
}
