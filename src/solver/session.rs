//! Game loop state machine
//!
//! A session alternates between asking for a guess and applying the feedback
//! for it: `AwaitingGuess -> AwaitingFeedback -> (Solved | AwaitingGuess)`.
//! It owns its candidate set and only reads from the solver.

use super::Solver;
use super::filter::filter_candidates;
use super::selector::select_best;
use crate::core::{Pattern, Word};
use crate::error::{Result, SolverError};
use log::Level;

/// Show the remaining candidates in the log once there are this few
const LIST_CANDIDATES_BELOW: usize = 10;

/// Where a session is in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'s> {
    AwaitingGuess,
    AwaitingFeedback(&'s Word),
    Solved { guesses: usize },
}

/// One guess and what it told us
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Guesses made, including the winning one
    pub guesses: usize,
    pub turns: Vec<Turn>,
}

/// A single solve session against a [`Solver`]
#[derive(Debug)]
pub struct Session<'s> {
    solver: &'s Solver,
    candidates: Vec<&'s Word>,
    state: SessionState<'s>,
    turns: Vec<Turn>,
}

impl<'s> Session<'s> {
    /// Start a session with the whole dictionary as candidates
    #[must_use]
    pub fn new(solver: &'s Solver) -> Self {
        Self {
            solver,
            candidates: solver.dictionary().iter().collect(),
            state: SessionState::AwaitingGuess,
            turns: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState<'s> {
        self.state
    }

    /// Words still consistent with every feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[&'s Word] {
        &self.candidates
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, SessionState::Solved { .. })
    }

    /// Pick the next guess
    ///
    /// The first guess is the solver's opening guess. After that, a lone
    /// remaining candidate is guessed directly; otherwise the best-scoring
    /// dictionary word is chosen. Asking again before feedback arrives returns
    /// the same guess.
    ///
    /// # Errors
    /// - `SolverError::InvalidState` if the session is already solved
    /// - `SolverError::EmptyDictionary` if there is nothing to guess
    pub fn next_guess(&mut self) -> Result<&'s Word> {
        match self.state {
            SessionState::AwaitingFeedback(guess) => Ok(guess),
            SessionState::Solved { .. } => Err(SolverError::InvalidState("session already solved")),
            SessionState::AwaitingGuess => {
                let guess = if self.turns.is_empty() {
                    self.solver.opening_guess()?
                } else if let [only] = self.candidates.as_slice() {
                    *only
                } else {
                    select_best(self.solver.dictionary(), &self.candidates)?.0
                };

                self.state = SessionState::AwaitingFeedback(guess);
                Ok(guess)
            }
        }
    }

    /// Apply the feedback for the pending guess
    ///
    /// All-Hit feedback solves the session. Otherwise the candidates are
    /// narrowed to those consistent with the feedback, reading the first turn
    /// from the solver's cache when it has one. The session is left unchanged
    /// if an error is returned.
    ///
    /// # Errors
    /// - `SolverError::InvalidState` if no guess is awaiting feedback
    /// - `SolverError::InvalidFeedback` if the pattern has the wrong length
    /// - `SolverError::InconsistentFeedback` if no candidate fits the feedback
    pub fn apply_feedback(&mut self, pattern: Pattern) -> Result<&Turn> {
        let guess = match self.state {
            SessionState::AwaitingFeedback(guess) => guess,
            SessionState::AwaitingGuess => {
                return Err(SolverError::InvalidState("no guess is awaiting feedback"));
            }
            SessionState::Solved { .. } => {
                return Err(SolverError::InvalidState("session already solved"));
            }
        };

        let num_chars = self.solver.num_chars();
        if pattern.len() != num_chars {
            return Err(SolverError::InvalidFeedback(format!(
                "expected {num_chars} marks, got {} in {pattern}",
                pattern.len()
            )));
        }

        let candidates_before = self.candidates.len();

        if pattern.is_solved() {
            self.candidates = vec![guess];
            self.state = SessionState::Solved {
                guesses: self.turns.len() + 1,
            };
        } else {
            let remaining: Vec<&'s Word> = match self.solver.cache() {
                Some(cache) if self.turns.is_empty() && cache.guess() == guess => {
                    cache.get(&pattern).iter().collect()
                }
                _ => filter_candidates(guess, &pattern, &self.candidates),
            };

            if remaining.is_empty() {
                return Err(SolverError::InconsistentFeedback {
                    guess: guess.to_string(),
                    pattern: pattern.to_string(),
                });
            }

            self.candidates = remaining;
            self.state = SessionState::AwaitingGuess;
        }

        self.turns.push(Turn {
            guess: guess.clone(),
            pattern,
            candidates_before,
            candidates_after: self.candidates.len(),
        });
        self.log_turn();

        Ok(&self.turns[self.turns.len() - 1])
    }

    /// Finish the session
    ///
    /// # Errors
    /// Returns `SolverError::InvalidState` if the session is not solved yet.
    pub fn into_outcome(self) -> Result<SolveOutcome> {
        match self.state {
            SessionState::Solved { guesses } => Ok(SolveOutcome {
                guesses,
                turns: self.turns,
            }),
            _ => Err(SolverError::InvalidState("session is not solved")),
        }
    }

    fn log_turn(&self) {
        let level = if self.solver.is_verbose() {
            Level::Info
        } else {
            Level::Debug
        };
        let Some(turn) = self.turns.last() else {
            return;
        };

        log::log!(
            level,
            "turn {}: {} -> {} ({} -> {} candidates)",
            self.turns.len(),
            turn.guess,
            turn.pattern,
            turn.candidates_before,
            turn.candidates_after
        );

        if !self.is_solved() && self.candidates.len() <= LIST_CANDIDATES_BELOW {
            let listed: Vec<&str> = self.candidates.iter().map(|w| w.text()).collect();
            log::log!(level, "remaining: {}", listed.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    fn solver(list: &[&str], first_guess: Option<&str>, use_cache: bool) -> Solver {
        let dictionary = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        let mut config = SolverConfig::new(dictionary).with_cache(use_cache);
        if let Some(guess) = first_guess {
            config = config.with_first_guess(guess);
        }
        Solver::new(config).unwrap()
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    const SCENARIO: [&str; 4] = ["raise", "trace", "crate", "slate"];

    #[test]
    fn walks_through_states() {
        for use_cache in [false, true] {
            let solver = solver(&SCENARIO, Some("raise"), use_cache);
            let mut session = solver.session();
            assert_eq!(session.state(), SessionState::AwaitingGuess);
            assert_eq!(session.candidates().len(), 4);

            let guess = session.next_guess().unwrap();
            assert_eq!(guess.text(), "raise");
            assert_eq!(session.state(), SessionState::AwaitingFeedback(guess));

            let turn = session.apply_feedback(pattern("yy__g")).unwrap();
            assert_eq!(turn.candidates_before, 4);
            assert_eq!(turn.candidates_after, 2);
            assert_eq!(session.state(), SessionState::AwaitingGuess);

            assert_eq!(session.next_guess().unwrap().text(), "trace");
            session.apply_feedback(pattern("yggyg")).unwrap();
            assert_eq!(session.candidates().len(), 1);

            assert_eq!(session.next_guess().unwrap().text(), "crate");
            session.apply_feedback(pattern("ggggg")).unwrap();
            assert_eq!(session.state(), SessionState::Solved { guesses: 3 });

            let outcome = session.into_outcome().unwrap();
            assert_eq!(outcome.guesses, 3);
            assert_eq!(outcome.turns.len(), 3);
        }
    }

    #[test]
    fn next_guess_is_stable_until_feedback() {
        let solver = solver(&SCENARIO, None, false);
        let mut session = solver.session();

        let first = session.next_guess().unwrap();
        let again = session.next_guess().unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn opening_guess_without_first_guess_uses_selector() {
        let solver = solver(&SCENARIO, None, false);
        let mut session = solver.session();

        let dictionary: Vec<&Word> = solver.dictionary().iter().collect();
        let (expected, _) = select_best(solver.dictionary(), &dictionary).unwrap();
        assert_eq!(session.next_guess().unwrap(), expected);
    }

    #[test]
    fn feedback_without_guess_is_rejected() {
        let solver = solver(&SCENARIO, Some("raise"), false);
        let mut session = solver.session();

        assert!(matches!(
            session.apply_feedback(pattern("ggggg")),
            Err(SolverError::InvalidState(_))
        ));
    }

    #[test]
    fn solved_session_rejects_more_play() {
        let solver = solver(&SCENARIO, Some("raise"), false);
        let mut session = solver.session();

        session.next_guess().unwrap();
        session.apply_feedback(pattern("ggggg")).unwrap();

        assert!(matches!(session.next_guess(), Err(SolverError::InvalidState(_))));
        assert!(matches!(
            session.apply_feedback(pattern("ggggg")),
            Err(SolverError::InvalidState(_))
        ));
    }

    #[test]
    fn wrong_length_feedback_is_rejected() {
        let solver = solver(&SCENARIO, Some("raise"), false);
        let mut session = solver.session();
        session.next_guess().unwrap();

        assert!(matches!(
            session.apply_feedback(pattern("gggg")),
            Err(SolverError::InvalidFeedback(_))
        ));
    }

    #[test]
    fn inconsistent_feedback_is_reported() {
        for use_cache in [false, true] {
            let solver = solver(&SCENARIO, Some("raise"), use_cache);
            let mut session = solver.session();
            session.next_guess().unwrap();

            let err = session.apply_feedback(pattern("_____")).unwrap_err();
            assert!(matches!(
                err,
                SolverError::InconsistentFeedback { ref guess, pattern: ref feedback }
                    if guess == "raise" && feedback == "_____"
            ));

            // Nothing was consumed; corrected feedback still applies
            assert_eq!(session.candidates().len(), 4);
            session.apply_feedback(pattern("_y_yg")).unwrap();
            assert_eq!(session.candidates().len(), 1);
        }
    }

    #[test]
    fn unsolved_session_has_no_outcome() {
        let solver = solver(&SCENARIO, Some("raise"), false);
        let session = solver.session();
        assert!(session.into_outcome().is_err());
    }
}
