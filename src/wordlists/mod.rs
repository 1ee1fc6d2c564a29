//! Word lists for Wordle solving
//!
//! Loads dictionaries from disk.

pub mod loader;

pub use loader::{load_from_file, parse_words};

/// Dictionary file used when none is given
pub const DEFAULT_WORDLIST: &str = "wordle-words.txt";
