//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render a guess in uppercase, each letter colored by its feedback mark
///
/// Without a pattern the word is just shown bold.
#[must_use]
pub fn colorize_guess(word: &Word, pattern: Option<&Pattern>) -> String {
    let upper = word.text().to_uppercase();
    let Some(pattern) = pattern else {
        return upper.bright_white().bold().to_string();
    };

    upper
        .chars()
        .zip(pattern.marks())
        .map(|(ch, &mark)| colorize_letter(ch, mark).to_string())
        .collect()
}

fn colorize_letter(ch: char, mark: Mark) -> ColoredString {
    let letter = ch.to_string();
    match mark {
        Mark::Hit => letter.black().on_green().bold(),
        Mark::Present => letter.black().on_yellow().bold(),
        Mark::Absent => letter.bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_keeps_letters_in_order() {
        colored::control::set_override(false);
        let word = Word::new("crate").unwrap();
        let pattern = Pattern::parse("yggyg").unwrap();

        assert_eq!(colorize_guess(&word, Some(&pattern)), "CRATE");
        assert_eq!(colorize_guess(&word, None), "CRATE");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
