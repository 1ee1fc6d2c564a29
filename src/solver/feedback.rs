//! Feedback sources for the game loop

use crate::core::{Pattern, Word};
use crate::error::Result;

/// Something that can tell the solver how a guess scored
///
/// The game loop calls this once per guess. Implementations either know the
/// answer (simulation) or ask someone who does.
pub trait FeedbackProvider {
    /// Return the feedback pattern for `guess`
    ///
    /// # Errors
    /// Returns an error if no feedback can be produced; the session ends.
    fn feedback(&mut self, guess: &Word) -> Result<Pattern>;
}

/// Simulation mode: feedback computed against a known answer
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    answer: Word,
}

impl KnownAnswer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackProvider for KnownAnswer {
    fn feedback(&mut self, guess: &Word) -> Result<Pattern> {
        Ok(Pattern::calculate(guess, &self.answer))
    }
}

impl<P: FeedbackProvider + ?Sized> FeedbackProvider for &mut P {
    fn feedback(&mut self, guess: &Word) -> Result<Pattern> {
        (**self).feedback(guess)
    }
}
