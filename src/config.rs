//! Game configuration
//!
//! The knobs a front-end may turn before creating a session. Defaults reproduce the
//! standard game.

use crate::dictionary::Language;
use crate::validator::MIN_WORD_LENGTH;

/// Root word used when the word list is empty
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fallback root word for an empty word list
    pub default_root: String,
    /// Shortest word that can score
    pub min_length: usize,
    /// Language passed to the spell checker
    pub language: Language,
    /// Seed for root word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_root: DEFAULT_ROOT_WORD.to_string(),
            min_length: MIN_WORD_LENGTH,
            language: Language::En,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
