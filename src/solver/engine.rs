//! Main Wordle solver interface

use super::cache::FirstGuessCache;
use super::config::SolverConfig;
use super::feedback::{FeedbackProvider, KnownAnswer};
use super::selector::select_best;
use super::session::{Session, SolveOutcome};
use crate::core::Word;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Main Wordle solver
///
/// Holds the validated configuration and the optional first-guess cache.
/// Immutable once built, so any number of sessions can share it, including
/// from different threads.
#[derive(Debug)]
pub struct Solver {
    dictionary: Vec<Word>,
    first_guess: Option<Word>,
    num_chars: usize,
    cache: Option<FirstGuessCache>,
    verbose: bool,
}

impl Solver {
    /// Validate the configuration and build the solver
    ///
    /// With caching enabled the opening guess is resolved here, choosing it
    /// with the selector when no first guess is configured, and the cache for
    /// it is built before any session starts.
    ///
    /// # Errors
    /// Returns `SolverError::Configuration` if:
    /// - `num_chars` is zero
    /// - the first guess is not a word of `num_chars` letters
    /// - a dictionary word does not have `num_chars` letters
    ///
    /// Repeated dictionary words are dropped, keeping the first occurrence.
    ///
    /// # Examples
    /// ```
    /// use wordle_brute::core::Word;
    /// use wordle_brute::solver::{Solver, SolverConfig};
    ///
    /// let dictionary = ["raise", "trace", "crate", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let solver = Solver::new(SolverConfig::new(dictionary).with_first_guess("RAISE")).unwrap();
    ///
    /// let outcome = solver.solve_answer("crate").unwrap();
    /// assert_eq!(outcome.guesses, 3);
    /// ```
    pub fn new(config: SolverConfig) -> Result<Self> {
        let SolverConfig {
            dictionary,
            first_guess,
            num_chars,
            use_cache,
            verbose,
        } = config;

        if num_chars == 0 {
            return Err(SolverError::Configuration(
                "word length must be positive".to_string(),
            ));
        }

        let first_guess = first_guess
            .map(|guess| {
                Word::with_length(guess, num_chars)
                    .map_err(|e| SolverError::Configuration(format!("first guess: {e}")))
            })
            .transpose()?;

        if let Some(word) = dictionary.iter().find(|w| w.len() != num_chars) {
            return Err(SolverError::Configuration(format!(
                "dictionary word {word} has {} letters, expected {num_chars}",
                word.len()
            )));
        }

        let dictionary = dedup_words(dictionary);

        let mut solver = Self {
            dictionary,
            first_guess,
            num_chars,
            cache: None,
            verbose,
        };

        if use_cache && !solver.dictionary.is_empty() {
            let opening = solver.opening_guess()?.clone();
            solver.cache = Some(FirstGuessCache::build(&opening, &solver.dictionary));
        }

        Ok(solver)
    }

    /// All allowed guesses
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub const fn first_guess(&self) -> Option<&Word> {
        self.first_guess.as_ref()
    }

    #[must_use]
    pub const fn num_chars(&self) -> usize {
        self.num_chars
    }

    #[must_use]
    pub const fn cache(&self) -> Option<&FirstGuessCache> {
        self.cache.as_ref()
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The first guess of every session
    ///
    /// The configured first guess if there is one, otherwise the dictionary
    /// word that best splits the whole dictionary.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` if it has to be selected from an
    /// empty dictionary.
    pub fn opening_guess(&self) -> Result<&Word> {
        if let Some(guess) = &self.first_guess {
            return Ok(guess);
        }
        if let Some(cache) = &self.cache {
            return Ok(cache.guess());
        }

        let start = Instant::now();
        let candidates: Vec<&Word> = self.dictionary.iter().collect();
        let (guess, score) = select_best(&self.dictionary, &candidates)?;
        log::debug!(
            "selected opening guess {guess} (score {score}) in {:.1?}",
            start.elapsed()
        );
        Ok(guess)
    }

    /// Start a new session
    #[must_use]
    pub fn session(&self) -> Session<'_> {
        Session::new(self)
    }

    /// Play a full game, asking `provider` for feedback after each guess
    ///
    /// # Errors
    /// Returns the first error from the provider or the session; the game is
    /// abandoned at that point.
    pub fn solve<P: FeedbackProvider + ?Sized>(&self, provider: &mut P) -> Result<SolveOutcome> {
        let mut session = self.session();

        while !session.is_solved() {
            let guess = session.next_guess()?;
            let pattern = provider.feedback(guess)?;
            session.apply_feedback(pattern)?;
        }

        session.into_outcome()
    }

    /// Play a full game against a known answer
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if `answer` is not a word of the
    /// configured length, or `SolverError::InconsistentFeedback` if it is not
    /// in the dictionary.
    pub fn solve_answer(&self, answer: &str) -> Result<SolveOutcome> {
        let answer = Word::with_length(answer, self.num_chars)?;
        self.solve(&mut KnownAnswer::new(answer))
    }
}

/// Drop repeated words, keeping the first occurrence of each
///
/// No guess can split copies of one word, so a candidate set made of them
/// would never shrink.
fn dedup_words(dictionary: Vec<Word>) -> Vec<Word> {
    let total = dictionary.len();
    let mut seen = FxHashSet::default();
    let unique: Vec<Word> = dictionary
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if unique.len() < total {
        log::debug!("dropped {} repeated dictionary words", total - unique.len());
    }
    unique
}
