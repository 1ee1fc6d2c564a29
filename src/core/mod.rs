//! Core domain types for Wordle
//!
//! Words and feedback patterns. The feedback evaluator lives here as
//! [`Pattern::calculate`] since every other part of the crate is built on it.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern, PatternError};
pub use word::{ALPHABET_SIZE, Word, WordError};
