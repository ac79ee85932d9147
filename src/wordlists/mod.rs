//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus loaders for lists on disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::{EmbeddedSource, FileSource, WordListError, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_eight_lowercase_letters() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_include_default_root() {
        assert!(START_WORDS.contains(&"silkworm"));
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY_WORDS.iter().collect();

        for word in START_WORDS {
            assert!(dictionary.contains(word), "Start word '{word}' not in dictionary");
        }
    }

    #[test]
    fn dictionary_has_no_blank_entries() {
        assert!(DICTIONARY_WORDS.iter().all(|w| !w.trim().is_empty()));
    }
}
