//! Word validation
//!
//! Three independent checks decide whether a candidate earns points. They are pure: the
//! session passes in everything they need and keeps the state to itself.

mod rejection;

pub use rejection::Rejection;

use crate::config::GameConfig;
use crate::core::{Candidate, LetterPool};
use crate::dictionary::{Language, SpellChecker};

/// Minimum letters a word needs to count
pub const MIN_WORD_LENGTH: usize = 3;

/// Originality, feasibility and realness checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordValidator {
    min_length: usize,
    language: Language,
}

impl Default for WordValidator {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            language: Language::En,
        }
    }
}

impl WordValidator {
    #[must_use]
    pub const fn new(min_length: usize, language: Language) -> Self {
        Self {
            min_length,
            language,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.min_length, config.language)
    }

    /// True iff `candidate` has not been accepted already
    #[must_use]
    pub fn is_original<W: AsRef<str>>(candidate: &str, used_words: &[W]) -> bool {
        !used_words.iter().any(|used| used.as_ref() == candidate)
    }

    /// True iff `candidate` can be spelled from the letters of `root_word`
    ///
    /// Each letter of the root can be used as many times as it appears there.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validator::WordValidator;
    ///
    /// assert!(WordValidator::is_possible("worm", "silkworm"));
    /// assert!(!WordValidator::is_possible("word", "silkworm"));
    /// ```
    #[must_use]
    pub fn is_possible(candidate: &str, root_word: &str) -> bool {
        LetterPool::from_word(root_word).can_spell(candidate)
    }

    /// True iff `candidate` is long enough, is not the root word, and is spelled correctly
    #[must_use]
    pub fn is_real<S: SpellChecker>(
        &self,
        candidate: &str,
        root_word: &str,
        checker: &S,
    ) -> bool {
        if candidate.chars().count() < self.min_length {
            return false;
        }

        if candidate == root_word {
            return false;
        }

        checker.is_correctly_spelled(candidate, self.language)
    }

    /// Run every check in order: originality, feasibility, realness
    ///
    /// Stops at the first failure, so a word that is both reused and impossible is
    /// reported as reused.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` for the first check that fails.
    pub fn validate<W: AsRef<str>, S: SpellChecker>(
        &self,
        candidate: &Candidate,
        root_word: &str,
        used_words: &[W],
        checker: &S,
    ) -> Result<(), Rejection> {
        let word = candidate.text();

        if !Self::is_original(word, used_words) {
            return Err(Rejection::NotOriginal);
        }

        if !Self::is_possible(word, root_word) {
            return Err(Rejection::NotPossible {
                root_word: root_word.to_string(),
            });
        }

        if !self.is_real(word, root_word, checker) {
            return Err(Rejection::NotReal);
        }

        Ok(())
    }
}
