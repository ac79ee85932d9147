//! Anagram listing command
//!
//! Finds every dictionary word that would be accepted against a root word on a fresh round.

use crate::dictionary::Dictionary;
use crate::validator::WordValidator;

/// Result of listing the words hidden in a root word
pub struct AnagramsResult {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every word without a single mistake
    pub max_score: i64,
}

/// List every word the dictionary accepts for `root_word`
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn find_anagrams(
    root_word: &str,
    dictionary: &Dictionary,
    validator: &WordValidator,
) -> Result<AnagramsResult, String> {
    let root_word = root_word.trim().to_lowercase();
    if root_word.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let mut words: Vec<String> = dictionary
        .words()
        .filter(|word| WordValidator::is_possible(word, &root_word))
        .filter(|word| validator.is_real(word, &root_word, dictionary))
        .map(str::to_string)
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|w| w.chars().count() as i64).sum();

    Ok(AnagramsResult {
        root_word,
        words,
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "silk", "worm", "milk", "oil", "is", "word", "silkworm", "worms", "mow",
        ])
    }

    #[test]
    fn finds_possible_real_words() {
        let result = find_anagrams("silkworm", &dictionary(), &WordValidator::default()).unwrap();

        assert_eq!(result.root_word, "silkworm");
        assert_eq!(result.words, vec!["worms", "milk", "silk", "worm", "mow", "oil"]);
        assert_eq!(result.max_score, 5 + 4 + 4 + 4 + 3 + 3);
    }

    #[test]
    fn excludes_root_short_and_impossible_words() {
        let result = find_anagrams("silkworm", &dictionary(), &WordValidator::default()).unwrap();

        assert!(!result.words.contains(&"silkworm".to_string()));
        assert!(!result.words.contains(&"is".to_string()));
        assert!(!result.words.contains(&"word".to_string()));
    }

    #[test]
    fn root_is_normalized() {
        let result = find_anagrams(" SILKWORM ", &dictionary(), &WordValidator::default()).unwrap();
        assert_eq!(result.root_word, "silkworm");
        assert!(!result.words.is_empty());
    }

    #[test]
    fn blank_root_is_an_error() {
        assert!(find_anagrams("  ", &dictionary(), &WordValidator::default()).is_err());
    }

    #[test]
    fn every_listed_word_is_accepted_by_a_session() {
        use crate::config::GameConfig;
        use crate::session::GameSession;

        let dictionary = Dictionary::embedded();
        let result = find_anagrams("silkworm", &dictionary, &WordValidator::default()).unwrap();

        let mut session = GameSession::new(dictionary, GameConfig::default());
        session.start_round_with("silkworm");
        for word in &result.words {
            assert!(session.submit(word).is_accepted(), "{word} was rejected");
        }
        assert_eq!(session.score(), result.max_score);
    }
}
