//! Word list loading utilities
//!
//! Dictionaries are plain text, one word per line.

use crate::core::Word;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load words of `num_chars` letters from a file
///
/// Blank lines are ignored. Lines that are not a word of the right length are
/// skipped with a warning.
///
/// # Errors
///
/// Returns `SolverError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_brute::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle-words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, num_chars: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, num_chars);

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words of `num_chars` letters
///
/// # Examples
/// ```
/// use wordle_brute::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n  SLATE \n\nirate\n", 5);
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn parse_words(content: &str, num_chars: usize) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::with_length(trimmed, num_chars) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: {e}", i + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[cfg(test)]
pub(crate) fn words_from_slice(slice: &[&str], num_chars: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, num_chars).ok())
        .collect()
}
