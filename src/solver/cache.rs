//! One-level cache for the opening guess
//!
//! Every session opens with the same guess, so the candidate set left by each
//! possible first feedback can be computed once up front. Patterns no
//! dictionary word produces are absent and read back as an empty set.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Candidate sets for each feedback to a fixed opening guess
#[derive(Debug, Clone)]
pub struct FirstGuessCache {
    guess: Word,
    groups: FxHashMap<Pattern, Vec<Word>>,
}

impl FirstGuessCache {
    /// Partition the dictionary by the feedback each word gives to `guess`
    #[must_use]
    pub fn build(guess: &Word, dictionary: &[Word]) -> Self {
        let start = Instant::now();
        let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

        for word in dictionary {
            groups
                .entry(Pattern::calculate(guess, word))
                .or_default()
                .push(word.clone());
        }

        log::debug!(
            "cached {} feedback groups for opening guess {guess} in {:.1?}",
            groups.len(),
            start.elapsed()
        );

        Self {
            guess: guess.clone(),
            groups,
        }
    }

    /// The opening guess this cache was built for
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Candidates left after `pattern` was received for the opening guess
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> &[Word] {
        self.groups.get(pattern).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct feedback groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::filter_candidates;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn cache_matches_filtering() {
        let dictionary = words(&["raise", "trace", "crate", "slate", "irate", "stare"]);
        let candidates: Vec<&Word> = dictionary.iter().collect();
        let guess = Word::new("raise").unwrap();

        let cache = FirstGuessCache::build(&guess, &dictionary);
        assert_eq!(cache.guess(), &guess);

        for answer in &dictionary {
            let pattern = Pattern::calculate(&guess, answer);
            let cached: Vec<&Word> = cache.get(&pattern).iter().collect();
            assert_eq!(cached, filter_candidates(&guess, &pattern, &candidates));
        }
    }

    #[test]
    fn groups_cover_dictionary() {
        let dictionary = words(&["raise", "trace", "crate", "slate"]);
        let guess = Word::new("raise").unwrap();

        let cache = FirstGuessCache::build(&guess, &dictionary);

        // ggggg, yy__g (trace, crate), _y_yg (slate)
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&Pattern::parse("yy__g").unwrap()).len(), 2);
    }

    #[test]
    fn unseen_pattern_is_empty() {
        let dictionary = words(&["raise", "trace"]);
        let cache = FirstGuessCache::build(&Word::new("raise").unwrap(), &dictionary);

        assert!(cache.get(&Pattern::parse("_____").unwrap()).is_empty());
    }
}
