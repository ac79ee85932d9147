//! Spell checking
//!
//! The game never decides on its own whether a word is real; it asks a `SpellChecker`.
//! `Dictionary` is the bundled implementation backed by an in-memory word set.

use crate::wordlists::DICTIONARY_WORDS;
use crate::wordlists::loader::parse_word_list;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Language a word is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
}

impl Language {
    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }

    /// Parse an ISO 639-1 code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// "Is this token correctly spelled in language X?"
pub trait SpellChecker {
    fn is_correctly_spelled(&self, word: &str, language: Language) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_correctly_spelled(&self, word: &str, language: Language) -> bool {
        (**self).is_correctly_spelled(word, language)
    }
}

/// Failure to load a dictionary file
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

/// English word set used as a spell checker
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY_WORDS.iter().copied())
    }

    /// Build a dictionary from any list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a dictionary file, one word per line
    ///
    /// Lines starting with `#` are treated as comments.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unreadable` if the file cannot be read and
    /// `DictionaryError::Empty` if it holds no words.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(parse_word_list(&content));

        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    fn is_correctly_spelled(&self, word: &str, language: Language) -> bool {
        match language {
            Language::En => self.contains(word),
        }
    }
}
