//! Letter multiset for feasibility checks
//!
//! A LetterPool counts how many of each letter a word offers. Spelling a word from the
//! pool spends one occurrence per letter used.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`, duplicates included
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the pool unchanged when the letter is used up.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool without modifying it
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("silkworm");
    /// assert!(pool.can_spell("milk"));
    /// assert!(!pool.can_spell("mill")); // only one 'l'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut working = self.clone();
        word.chars().all(|letter| working.take(letter))
    }
}
