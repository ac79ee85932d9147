//! Game session
//!
//! A `GameSession` owns the state of one round: the root word, the words accepted so
//! far, and the score. Front-ends drive it with `start_round` and `submit`, then render
//! the returned outcome or a fresh `Snapshot`.

mod outcome;

pub use outcome::{GameEvent, Snapshot, SubmissionResult};

use crate::config::GameConfig;
use crate::core::Candidate;
use crate::dictionary::{Dictionary, SpellChecker};
use crate::validator::WordValidator;
use crate::wordlists::{WordListError, WordSource};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// State of the current round plus what is needed to judge submissions
pub struct GameSession<S: SpellChecker = Dictionary> {
    config: GameConfig,
    validator: WordValidator,
    checker: S,
    rng: StdRng,
    root_word: String,
    used_words: Vec<String>,
    score: i64,
}

impl<S: SpellChecker> GameSession<S> {
    /// Create a session sitting on the default root word
    ///
    /// Call `start_round` to pick a random root word.
    pub fn new(checker: S, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            validator: WordValidator::from_config(&config),
            root_word: config.default_root.clone(),
            config,
            checker,
            rng,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a new round with a root word picked uniformly from `word_list`
    ///
    /// Blank entries are skipped. Falls back to the configured default root word when
    /// nothing is left. Clears the used words and resets the score.
    pub fn start_round<W: AsRef<str>>(&mut self, word_list: &[W]) -> &str {
        let eligible: Vec<&str> = word_list
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();

        let root_word = eligible.choose(&mut self.rng).map_or_else(
            || {
                tracing::warn!(
                    default = %self.config.default_root,
                    "word list is empty, using default root word"
                );
                self.config.default_root.clone()
            },
            |w| w.to_lowercase(),
        );

        self.reset(root_word);
        &self.root_word
    }

    /// Start a new round drawing from a `WordSource`
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the source cannot produce a list at all. The current
    /// round is left untouched in that case.
    pub fn start_round_from<W: WordSource + ?Sized>(
        &mut self,
        source: &W,
    ) -> Result<&str, WordListError> {
        let words = source.words()?;
        Ok(self.start_round(&words))
    }

    /// Start a new round on a root word chosen by the caller
    ///
    /// Falls back to the default root word if `root_word` is blank.
    pub fn start_round_with(&mut self, root_word: &str) -> &str {
        self.start_round(&[root_word])
    }

    fn reset(&mut self, root_word: String) {
        tracing::info!(root_word = %root_word, "round started");
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
    }

    /// Judge one player submission
    ///
    /// Blank input is ignored. Otherwise the candidate is checked for originality,
    /// feasibility and realness, in that order. Acceptance adds the word to the front of
    /// the used words and earns one point per letter; any rejection costs the same.
    pub fn submit(&mut self, raw: &str) -> SubmissionResult {
        let Some(candidate) = Candidate::normalize(raw) else {
            return SubmissionResult::Ignored;
        };

        let points = candidate.letter_count() as i64;

        match self.validator.validate(
            &candidate,
            &self.root_word,
            &self.used_words,
            &self.checker,
        ) {
            Ok(()) => {
                self.score += points;
                let word = candidate.into_string();
                tracing::debug!(word = %word, score = self.score, "word accepted");
                self.used_words.insert(0, word.clone());
                SubmissionResult::Accepted {
                    word,
                    score: self.score,
                }
            }
            Err(rejection) => {
                self.score -= points;
                tracing::debug!(
                    word = %candidate,
                    reason = rejection.kind(),
                    score = self.score,
                    "word rejected"
                );
                SubmissionResult::Rejected {
                    word: candidate.into_string(),
                    rejection,
                    score: self.score,
                }
            }
        }
    }

    /// Copy of the current round state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
        }
    }

    /// Event announcing the current round
    #[must_use]
    pub fn round_started_event(&self) -> GameEvent {
        GameEvent::RoundStarted {
            root_word: self.root_word.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn validator(&self) -> &WordValidator {
        &self.validator
    }

    #[must_use]
    pub const fn checker(&self) -> &S {
        &self.checker
    }
}

impl GameSession<Dictionary> {
    /// Session backed by the embedded dictionary and default settings
    #[must_use]
    pub fn with_embedded_dictionary() -> Self {
        Self::new(Dictionary::embedded(), GameConfig::default())
    }
}
