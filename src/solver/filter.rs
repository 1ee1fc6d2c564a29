//! Candidate filtering

use crate::core::{Pattern, Word};

/// Keep the candidates that would have produced `pattern` for `guess`
///
/// Returns a new set; the input is left untouched.
///
/// # Examples
/// ```
/// use wordle_brute::core::{Pattern, Word};
/// use wordle_brute::solver::filter_candidates;
///
/// let words: Vec<Word> = ["raise", "trace", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let guess = Word::new("raise").unwrap();
/// let pattern = Pattern::parse("yy__g").unwrap();
/// let remaining = filter_candidates(&guess, &pattern, &candidates);
///
/// assert_eq!(remaining.len(), 2); // trace, crate
/// ```
#[must_use]
pub fn filter_candidates<'a>(guess: &Word, pattern: &Pattern, candidates: &[&'a Word]) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == *pattern)
        .collect()
}
