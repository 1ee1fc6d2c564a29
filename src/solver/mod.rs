//! Brute-force Wordle solving
//!
//! Scores every dictionary word by how it partitions the remaining
//! candidates, guesses the best one, and filters on the feedback until solved.

mod cache;
mod config;
mod engine;
mod feedback;
mod filter;
mod scorer;
mod selector;
mod session;

pub use cache::FirstGuessCache;
pub use config::{DEFAULT_NUM_CHARS, SolverConfig};
pub use engine::Solver;
pub use feedback::{FeedbackProvider, KnownAnswer};
pub use filter::filter_candidates;
pub use scorer::{expected_remaining, partition, score};
pub use selector::select_best;
pub use session::{Session, SessionState, SolveOutcome, Turn};
