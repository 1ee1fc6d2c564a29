//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one [`Mark`] per letter of the guess. Its text form is the
//! wire format exchanged with human players:
//! - `_` = Absent (letter not in word, or no unmatched copy left)
//! - `y` = Present (letter in word, wrong position)
//! - `g` = Hit (letter in correct position)

use super::Word;
use super::word::ALPHABET_SIZE;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Hit,
}

impl Mark {
    /// Wire-format character for this mark
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => '_',
            Self::Present => 'y',
            Self::Hit => 'g',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨 and `_`/`-`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Hit),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            '_' | '-' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Hit => '🟩',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("feedback must not be empty")]
    Empty,
    #[error("invalid feedback character {0:?} (use g, y or _)")]
    InvalidMark(char),
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Vec<Mark>);

impl Pattern {
    /// Build a pattern from marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// The all-Hit pattern for words of `len` letters
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![Mark::Hit; len])
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Handles duplicate letters: a letter never earns more Hit and Present
    /// marks than it has occurrences in the answer.
    ///
    /// # Algorithm
    /// 1. Count the answer's letters
    /// 2. First pass: mark exact matches as Hit and remove them from the counts
    /// 3. Second pass: left to right, mark each remaining guess letter Present
    ///    while the answer still has an unmatched copy of it
    ///
    /// # Panics
    /// Panics if `guess` and `answer` differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_brute::core::{Pattern, Word};
    ///
    /// let guess = Word::new("raise").unwrap();
    /// let answer = Word::new("crate").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "yy__g");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        assert_eq!(
            guess.len(),
            answer.len(),
            "guess {guess} and answer {answer} must have the same length"
        );

        let mut marks = vec![Mark::Absent; guess.len()];
        let mut remaining: [usize; ALPHABET_SIZE] = answer.letter_counts();

        // First pass: exact position matches
        for ((mark, &g), &a) in marks.iter_mut().zip(guess.chars()).zip(answer.chars()) {
            if g == a {
                *mark = Mark::Hit;
                remaining[usize::from(g - b'a')] -= 1;
            }
        }

        // Second pass: right letter, wrong position
        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Hit {
                continue;
            }
            let count = &mut remaining[usize::from(g - b'a')];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Parse a feedback string such as `"_yggg"` or `"⬜🟨🟩🟩🟩"`
    ///
    /// # Errors
    /// Returns `PatternError` for an empty string or an unknown character.
    ///
    /// # Examples
    /// ```
    /// use wordle_brute::core::Pattern;
    ///
    /// let p1 = Pattern::parse("gy_gy").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        s.chars()
            .map(|ch| Mark::from_char(ch).ok_or(PatternError::InvalidMark(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is a Hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Hit)
    }

    /// Count the number of Hit marks
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Hit).count()
    }

    /// Count the number of Present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert pattern to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.as_emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[rstest]
    #[case("raise", "crate", "yy__g")]
    #[case("crane", "slate", "__g_g")]
    #[case("speed", "erase", "y_yy_")]
    #[case("robot", "floor", "yy_g_")]
    #[case("swiss", "sassy", "g__gy")]
    #[case("llama", "hello", "yy___")]
    #[case("abcde", "fghij", "_____")]
    #[case("trace", "crate", "yggyg")]
    #[case("cat", "act", "yyg")]
    fn calculate_matches_expected(#[case] guess: &str, #[case] answer: &str, #[case] expected: &str) {
        assert_eq!(calc(guess, answer).to_string(), expected);
    }

    #[test]
    fn pattern_all_hit_for_identical_words() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let pattern = calc(word, word);
            assert!(pattern.is_solved());
            assert_eq!(pattern.to_string(), "ggggg");
        }
        assert_eq!(calc("quixotic", "quixotic"), Pattern::solved(8));
    }

    #[test]
    fn hit_count_equals_identical_positions() {
        let pairs = [
            ("crane", "slate"),
            ("speed", "erase"),
            ("eerie", "sheen"),
            ("mamma", "maxim"),
        ];
        for (guess, answer) in pairs {
            let same = guess
                .bytes()
                .zip(answer.bytes())
                .filter(|(g, a)| g == a)
                .count();
            assert_eq!(calc(guess, answer).count_hits(), same, "{guess} vs {answer}");
        }
    }

    #[test]
    fn duplicate_letters_never_overcount() {
        let pairs = [
            ("speed", "erase"),
            ("eerie", "sheen"),
            ("mamma", "maxim"),
            ("geese", "egret"),
            ("sissy", "swiss"),
        ];
        for (guess, answer) in pairs {
            let g = Word::new(guess).unwrap();
            let a = Word::new(answer).unwrap();
            let pattern = Pattern::calculate(&g, &a);
            for letter in b'a'..=b'z' {
                let marked = g
                    .chars()
                    .iter()
                    .zip(pattern.marks())
                    .filter(|&(&ch, &m)| ch == letter && m != Mark::Absent)
                    .count();
                assert!(
                    marked <= a.count_of(letter),
                    "{guess} vs {answer}: letter {} overcounted",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn hit_never_consumes_present_slot() {
        // First S is a Hit, the trailing S still finds SASSY's spare S
        let pattern = calc("swiss", "sassy");
        assert_eq!(
            pattern.marks(),
            &[Mark::Hit, Mark::Absent, Mark::Absent, Mark::Hit, Mark::Present]
        );
    }

    #[test]
    fn long_words_with_many_repeats() {
        let guess = Word::new(format!("b{}", "a".repeat(299))).unwrap();
        let answer = Word::new(format!("{}b", "a".repeat(299))).unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.count_hits(), 298);
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn length_mismatch_panics() {
        let _ = calc("crane", "cat");
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("gyg__").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("GYG--").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count_hits(), 2);
        assert_eq!(p1.count_present(), 1);
        assert_eq!(p1.len(), 5);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("gxg__"), Err(PatternError::InvalidMark('x')));
        assert!("gy g_".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_display_is_wire_format() {
        let pattern = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
        assert_eq!(pattern.to_string(), "gy_gy");
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn solved_pattern() {
        assert!(Pattern::solved(5).is_solved());
        assert!(!Pattern::parse("gggg_").unwrap().is_solved());
        assert!(!Pattern::new(Vec::new()).is_solved());
    }
}
