//! Best-guess selection
//!
//! Exhaustive scan of the whole dictionary for the guess with the lowest score.

use super::scorer::score;
use crate::core::Word;
use crate::error::{Result, SolverError};

/// Select the guess that minimizes [`score`] against the candidates
///
/// Every dictionary word is considered, not just the candidates: a guess that
/// cannot be the answer may still split the candidates better. Ties go to the
/// word that appears first in the dictionary. A single remaining candidate is
/// returned as-is with score 1.
///
/// Returns the chosen word and its score.
///
/// # Errors
/// Returns `SolverError::EmptyDictionary` if either the dictionary or the
/// candidate set is empty.
///
/// # Examples
/// ```
/// use wordle_brute::core::Word;
/// use wordle_brute::solver::select_best;
///
/// let dictionary: Vec<Word> = ["raise", "trace", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates = vec![&dictionary[1], &dictionary[2]];
///
/// let (best, best_score) = select_best(&dictionary, &candidates).unwrap();
/// assert_eq!(best.text(), "trace");
/// assert_eq!(best_score, 2);
/// ```
pub fn select_best<'a>(dictionary: &'a [Word], candidates: &[&'a Word]) -> Result<(&'a Word, usize)> {
    if dictionary.is_empty() || candidates.is_empty() {
        return Err(SolverError::EmptyDictionary);
    }

    if let [only] = candidates {
        return Ok((*only, 1));
    }

    let mut best: Option<(&'a Word, usize)> = None;
    for guess in dictionary {
        let guess_score = score(guess, candidates);
        if best.is_none_or(|(_, min)| guess_score < min) {
            best = Some((guess, guess_score));
        }
    }

    best.ok_or(SolverError::EmptyDictionary)
}
