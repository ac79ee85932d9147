//! Player input representation
//!
//! A Candidate is what the player typed, normalized so every check compares like with like.

use std::fmt;

/// A normalized word submitted by the player
///
/// Always lowercase, never empty, never surrounded by whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize raw player input
    ///
    /// Lowercases the input and strips leading and trailing whitespace. Returns `None`
    /// when nothing is left, which callers treat as "ignore this submission".
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::normalize("  Silk\n").unwrap();
    /// assert_eq!(candidate.text(), "silk");
    ///
    /// assert!(Candidate::normalize("   ").is_none());
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();

        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Get the candidate as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, which is also the number of points at stake
    ///
    /// Counts Unicode scalar values, not bytes and not grapheme clusters. A precomposed
    /// "café" counts 4, but a decomposed one ('e' followed by U+0301) counts 5 because
    /// the combining accent is its own `char`.
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Consume the candidate, keeping its text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
