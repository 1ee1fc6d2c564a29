//! Error types for the solver
//!
//! Every failure a solve session can hit is a variant of [`SolverError`].
//! None of them are retried: a session that returns an error is over.

use crate::core::{PatternError, WordError};
use thiserror::Error;

/// Errors raised while configuring or running the solver
#[derive(Debug, Error)]
pub enum SolverError {
    /// Invalid solver configuration (word length, first guess, dictionary)
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Feedback ruled out every remaining candidate
    #[error("feedback {pattern} for guess {guess} is inconsistent with every remaining word")]
    InconsistentFeedback { guess: String, pattern: String },

    /// The selector had no guesses or no candidates to work with
    #[error("no valid guess: the dictionary or candidate set is empty")]
    EmptyDictionary,

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// A well-formed word that the dictionary does not contain
    #[error("word {0} is not in the dictionary")]
    UnknownWord(String),

    /// Malformed feedback string or feedback of the wrong length
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    /// A session operation was called out of order
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),

    /// The feedback provider could not produce feedback
    #[error("feedback unavailable: {0}")]
    FeedbackUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<PatternError> for SolverError {
    fn from(err: PatternError) -> Self {
        Self::InvalidFeedback(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
