//! Solver configuration

use crate::core::Word;

/// Default number of letters per word
pub const DEFAULT_NUM_CHARS: usize = 5;

/// Settings for a [`Solver`](super::Solver)
///
/// Validated by `Solver::new`; the solver never changes them afterwards.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// All allowed guesses, and the initial candidate set
    pub dictionary: Vec<Word>,
    /// Fixed opening guess; chosen by the selector when `None`
    pub first_guess: Option<String>,
    /// Letters per word
    pub num_chars: usize,
    /// Precompute the candidate sets for every first feedback
    pub use_cache: bool,
    /// Log every turn at info level instead of debug
    pub verbose: bool,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(dictionary: Vec<Word>) -> Self {
        Self {
            dictionary,
            first_guess: None,
            num_chars: DEFAULT_NUM_CHARS,
            use_cache: true,
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_first_guess(mut self, first_guess: impl Into<String>) -> Self {
        self.first_guess = Some(first_guess.into());
        self
    }

    #[must_use]
    pub const fn with_num_chars(mut self, num_chars: usize) -> Self {
        self.num_chars = num_chars;
        self
    }

    #[must_use]
    pub const fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
