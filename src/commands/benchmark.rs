//! Benchmark command
//!
//! Tests strategy performance across a sample of random secrets.

use super::solve::play_out;
use crate::core::{Board, Code, CodeSpace, Winner};
use crate::solver::StrategyType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed → number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` secrets from `space`, reproducibly for a given seed
#[must_use]
pub fn random_secrets(space: &CodeSpace, count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| space.random_code(&mut rng)).collect()
}

/// Run a benchmark over a set of secrets
///
/// Every game starts from a fresh copy of `strategy`, since strategies keep
/// per-game state. Averages and the distribution cover solved games only.
pub fn run_benchmark(
    strategy: &StrategyType,
    secrets: &[Code],
    max_turns: usize,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for secret in secrets {
        let mut game_strategy = strategy.clone();
        let mut board = Board::new(secret.clone(), max_turns);
        let winner = play_out(&mut game_strategy, &mut board);
        let guesses = board.turns().len();

        debug!(secret = %secret, guesses, ?winner, "Benchmark game finished");

        if winner == Some(Winner::CodeBreaker) {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    BenchmarkResult {
        total_games,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
