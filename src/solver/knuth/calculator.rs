//! Minimax scoring for Mastermind guesses
//!
//! Given a guess and the candidate secrets still possible, partitions the
//! candidates by the feedback each would produce and scores the worst case.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Count how many candidate secrets produce each feedback for `guess`
#[must_use]
pub fn tally_outcomes(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut tally = FxHashMap::default();

    for secret in candidates {
        let feedback = Feedback::compute(secret, guess);
        *tally.entry(feedback).or_insert(0) += 1;
    }

    tally
}

/// Calculate the minimax score of a guess
///
/// For every feedback the guess could receive, the candidates that do *not*
/// produce it are eliminated. The score is the smallest such elimination
/// count: what the guess is guaranteed to remove however the secret was chosen.
///
/// Returns 0 when there are no candidates.
///
/// # Examples
/// ```
/// use mastermind_solver::core::CodeSpace;
/// use mastermind_solver::solver::knuth::minimax_score;
///
/// let space = CodeSpace::classic();
/// let candidates = vec![
///     space.code(&[0, 0, 0, 0]).unwrap(),
///     space.code(&[1, 1, 1, 1]).unwrap(),
/// ];
///
/// // Guessing a candidate splits them apart: one is always eliminated
/// let guess = space.code(&[0, 0, 0, 0]).unwrap();
/// assert_eq!(minimax_score(&guess, &candidates), 1);
///
/// // A code sharing nothing with either tells them apart not at all
/// let blind = space.code(&[5, 5, 5, 5]).unwrap();
/// assert_eq!(minimax_score(&blind, &candidates), 0);
/// ```
#[must_use]
pub fn minimax_score(guess: &Code, candidates: &[Code]) -> usize {
    let total = candidates.len();

    tally_outcomes(guess, candidates)
        .values()
        .map(|&count| total - count)
        .min()
        .unwrap_or(0)
}

/// Worst-case number of candidates left after guessing `guess`
#[must_use]
pub fn worst_case_remaining(guess: &Code, candidates: &[Code]) -> usize {
    tally_outcomes(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Shannon entropy (bits) of the feedback distribution for `guess`
///
/// H = -Σ p * log₂(p), where p is the share of candidates giving each feedback
#[must_use]
pub fn partition_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total = candidates.len() as f64;
    tally_outcomes(guess, candidates)
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
