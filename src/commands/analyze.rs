//! Word analysis command
//!
//! Scores a specific word as an opening guess against the whole dictionary.

use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::solver::{Solver, expected_remaining, partition};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: usize,
    pub groups: usize,
    pub largest_group: usize,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// The solver's own opening guess and its score, for comparison
    pub opening: Option<(String, usize)>,
}

/// Analyze how well a word splits the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a word of the solver's length
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, solver: &Solver) -> Result<AnalysisResult> {
    let word_obj = Word::with_length(word, solver.num_chars())?;

    if !solver.dictionary().contains(&word_obj) {
        return Err(SolverError::UnknownWord(word_obj.text().to_string()));
    }

    let candidates: Vec<&Word> = solver.dictionary().iter().collect();
    let total_candidates = candidates.len();

    let groups = partition(&word_obj, &candidates);
    let score: usize = groups.values().map(|&count| count * count).sum();
    let largest_group = groups.values().copied().max().unwrap_or(0);

    // Only worth reporting when it is already known; selecting it is a full scan
    let opening = solver
        .cache()
        .map(|cache| cache.guess())
        .or_else(|| solver.first_guess())
        .map(|guess| {
            (
                guess.text().to_string(),
                crate::solver::score(guess, &candidates),
            )
        });

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        score,
        groups: groups.len(),
        largest_group,
        expected_remaining: expected_remaining(score, total_candidates),
        total_candidates,
        opening,
    })
}
