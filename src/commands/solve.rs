//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::solver::{FeedbackProvider, KnownAnswer, Solver, expected_remaining, score};

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub score: Option<usize>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word, recording the score of every guess
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a word of the solver's length
/// - The target is not in the dictionary (feedback becomes inconsistent)
/// - The dictionary is empty
pub fn solve_word(solver: &Solver, target: &str) -> Result<SolveResult> {
    let target_word = Word::with_length(target, solver.num_chars())?;
    let mut provider = KnownAnswer::new(target_word);
    let mut session = solver.session();
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !session.is_solved() {
        let candidates_before = session.candidates().len();
        let guess = session.next_guess()?;

        // Scoring is only informative while there is something left to split
        let (guess_score, expected) = if candidates_before > 1 {
            let s = score(guess, session.candidates());
            (Some(s), Some(expected_remaining(s, candidates_before)))
        } else {
            (None, None)
        };

        let pattern = provider.feedback(guess)?;
        let turn = session.apply_feedback(pattern)?;

        guesses.push(GuessStep {
            word: turn.guess.text().to_string(),
            pattern: turn.pattern.clone(),
            candidates_before,
            candidates_after: turn.candidates_after,
            score: guess_score,
            expected_remaining: expected,
        });
    }

    Ok(SolveResult {
        target: provider.answer().text().to_string(),
        guesses,
    })
}
