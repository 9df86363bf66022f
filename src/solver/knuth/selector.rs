//! Minimax guess selection
//!
//! Scores every unused code, keeps those tied for the best score, then breaks
//! the tie in favour of codes that could still be the secret.

use super::calculator::minimax_score;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select every guess tied for the highest minimax score
///
/// Scoring is read-only over `candidates`, so it runs in parallel; the
/// returned guesses keep the order of `guess_pool`.
///
/// Returns an empty vector if the guess pool is empty.
#[must_use]
pub fn select_best_guesses<'a>(guess_pool: &[&'a Code], candidates: &[Code]) -> Vec<&'a Code> {
    let scores: Vec<(&'a Code, usize)> = guess_pool
        .par_iter()
        .map(|&guess| (guess, minimax_score(guess, candidates)))
        .collect();

    let Some(highest) = scores.iter().map(|&(_, score)| score).max() else {
        return Vec::new();
    };

    scores
        .into_iter()
        .filter(|&(_, score)| score == highest)
        .map(|(guess, _)| guess)
        .collect()
}

/// Pick the next guess from the best-scoring guesses
///
/// Prefers best guesses that are still possible secrets, falling back to all
/// best guesses when none are. Either way the lexicographically smallest code
/// wins, so the choice is deterministic.
///
/// Returns `None` if `best_guesses` is empty.
#[must_use]
pub fn choose_next_guess<'a>(best_guesses: &[&'a Code], candidates: &[Code]) -> Option<&'a Code> {
    let possible: FxHashSet<&Code> = candidates.iter().collect();

    best_guesses
        .iter()
        .copied()
        .filter(|guess| possible.contains(guess))
        .min()
        .or_else(|| best_guesses.iter().copied().min())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeSpace;

    fn code(values: [u8; 4]) -> Code {
        CodeSpace::classic().code(&values).unwrap()
    }

    #[test]
    fn selects_all_tied_best() {
        let candidates = vec![code([0, 0, 0, 0]), code([1, 1, 1, 1])];
        let pool = [code([0, 0, 0, 0]), code([1, 1, 1, 1]), code([5, 5, 5, 5])];
        let pool_refs: Vec<&Code> = pool.iter().collect();

        let best = select_best_guesses(&pool_refs, &candidates);

        // Either candidate splits the pair; 5555 does not
        assert_eq!(best, vec![&pool[0], &pool[1]]);
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let candidates = vec![code([0, 0, 0, 0])];
        assert!(select_best_guesses(&[], &candidates).is_empty());
    }

    #[test]
    fn empty_candidates_ties_everything() {
        let pool = [code([2, 2, 2, 2]), code([1, 1, 1, 1])];
        let pool_refs: Vec<&Code> = pool.iter().collect();

        assert_eq!(select_best_guesses(&pool_refs, &[]).len(), 2);
    }

    #[test]
    fn prefers_smallest_possible_secret() {
        let best = [code([3, 3, 3, 3]), code([2, 2, 2, 2])];
        let best_refs: Vec<&Code> = best.iter().collect();
        let candidates = vec![code([0, 0, 0, 0]), code([1, 1, 1, 1]), code([3, 3, 3, 3])];

        let chosen = choose_next_guess(&best_refs, &candidates);

        // 2222 is smaller, but only 3333 could be the secret
        assert_eq!(chosen, Some(&code([3, 3, 3, 3])));
    }

    #[test]
    fn falls_back_to_smallest_best_guess() {
        let best = [code([3, 3, 3, 3]), code([2, 2, 2, 2])];
        let best_refs: Vec<&Code> = best.iter().collect();
        let candidates = vec![code([0, 0, 0, 0]), code([1, 1, 1, 1])];

        let chosen = choose_next_guess(&best_refs, &candidates);

        assert_eq!(chosen, Some(&code([2, 2, 2, 2])));
    }

    #[test]
    fn smallest_of_several_possible_secrets() {
        let best = [code([4, 0, 0, 0]), code([1, 2, 3, 4]), code([0, 5, 5, 5])];
        let best_refs: Vec<&Code> = best.iter().collect();
        let candidates = vec![code([4, 0, 0, 0]), code([1, 2, 3, 4])];

        let chosen = choose_next_guess(&best_refs, &candidates);

        // 0555 is smallest overall but not a candidate
        assert_eq!(chosen, Some(&code([1, 2, 3, 4])));
    }

    #[test]
    fn no_best_guesses() {
        let candidates = vec![code([0, 0, 0, 0])];
        assert_eq!(choose_next_guess(&[], &candidates), None);
    }
}
