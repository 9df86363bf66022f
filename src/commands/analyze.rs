//! Guess analysis command
//!
//! Shows how a single guess partitions a set of candidate secrets.

use crate::core::{Code, CodeSpace, Feedback};
use crate::solver::knuth::{minimax_score, partition_entropy, tally_outcomes};

/// Result of analyzing a guess
#[derive(Debug)]
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    pub minimax_score: usize,
    pub worst_case_remaining: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
    /// Feedback and how many candidates give it, largest group first
    pub partitions: Vec<(Feedback, usize)>,
}

/// Analyze a guess against every code in `space`
///
/// # Errors
///
/// Returns an error if the guess is not a valid code for `space`.
pub fn analyze_guess(guess: &str, space: &CodeSpace) -> Result<AnalysisResult, String> {
    let guess = space
        .parse_code(guess)
        .map_err(|e| format!("Invalid guess: {e}"))?;
    let candidates: Vec<Code> = space.all_codes().collect();

    Ok(analyze_against(guess, &candidates))
}

/// Analyze a guess against an explicit candidate set
#[must_use]
pub fn analyze_against(guess: Code, candidates: &[Code]) -> AnalysisResult {
    let mut partitions: Vec<(Feedback, usize)> =
        tally_outcomes(&guess, candidates).into_iter().collect();
    // Largest first, then by feedback so the listing is stable
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    let entropy = partition_entropy(&guess, candidates);
    let total_candidates = candidates.len();

    AnalysisResult {
        minimax_score: minimax_score(&guess, candidates),
        worst_case_remaining: partitions.first().map_or(0, |&(_, count)| count),
        entropy,
        expected_remaining: total_candidates as f64 / entropy.exp2(),
        total_candidates,
        partitions,
        guess,
    }
}
