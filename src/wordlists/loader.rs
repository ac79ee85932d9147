//! Word list loading utilities
//!
//! Provides the `WordSource` seam a game session draws root words from, with one
//! implementation backed by the embedded list and one backed by a file on disk.

use super::START_WORDS;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a word list at all
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Anything that can hand out the candidate root words for a round
pub trait WordSource {
    /// Return the words in source order
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the list cannot be obtained. An empty list is not an
    /// error; the session falls back to its default root word.
    fn words(&self) -> Result<Vec<String>, WordListError>;
}

/// The start words compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn words(&self) -> Result<Vec<String>, WordListError> {
        Ok(words_from_slice(START_WORDS))
    }
}

/// A plain-text word list on disk, one word per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn words(&self) -> Result<Vec<String>, WordListError> {
        load_from_file(&self.path)
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Unreadable` if the file cannot be opened or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split newline-delimited text into lowercase words
///
/// Blank lines and lines starting with `#` are skipped, the same rule `build.rs`
/// applies to the embedded lists.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
