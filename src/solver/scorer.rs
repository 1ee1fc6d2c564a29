//! Guess scoring by partition size
//!
//! Given a guess and set of candidates, groups the candidates by the feedback
//! they would produce and scores the guess by the sum of squared group sizes.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Score a guess against the remaining candidates (lower is better)
///
/// Returns `Σ count²` over the feedback groups. A guess that splits the
/// candidates into many small groups scores low; one dominant group scores
/// close to `candidates.len()²`.
///
/// # Examples
/// ```
/// use wordle_brute::core::Word;
/// use wordle_brute::solver::score;
///
/// let guess = Word::new("trace").unwrap();
/// let candidates = vec![Word::new("trace").unwrap(), Word::new("crate").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two groups of one
/// assert_eq!(score(&guess, &candidate_refs), 2);
/// ```
#[must_use]
pub fn score(guess: &Word, candidates: &[&Word]) -> usize {
    partition(guess, candidates)
        .values()
        .map(|&count| count * count)
        .sum()
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn partition(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Expected number of candidates left after a guess with the given score
///
/// Each candidate is equally likely to be the answer, so a group of size `k`
/// is hit with probability `k / n` and leaves `k` words: `Σ k² / n`.
#[must_use]
pub fn expected_remaining(score: usize, candidate_count: usize) -> f64 {
    if candidate_count == 0 {
        0.0
    } else {
        score as f64 / candidate_count as f64
    }
}
