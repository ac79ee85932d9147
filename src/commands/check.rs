//! Word checking command
//!
//! Plays a fixed list of words against a chosen root word and reports each outcome.

use crate::dictionary::SpellChecker;
use crate::session::{GameSession, SubmissionResult};

/// Configuration for a check run
pub struct CheckConfig {
    pub root_word: String,
    pub words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root_word: String, words: Vec<String>) -> Self {
        Self { root_word, words }
    }
}

/// Result of a check run
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    pub final_score: i64,
    /// Accepted words, most recent first
    pub used_words: Vec<String>,
}

/// One submitted word and what became of it
pub struct CheckStep {
    pub input: String,
    pub result: SubmissionResult,
}

impl CheckResult {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps.iter().filter(|s| s.result.is_accepted()).count()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.result.rejection().is_some())
            .count()
    }
}

/// Start a round on the configured root word and submit every word in order
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn check_words<S: SpellChecker>(
    config: CheckConfig,
    session: &mut GameSession<S>,
) -> Result<CheckResult, String> {
    if config.root_word.trim().is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let root_word = session.start_round_with(&config.root_word).to_string();

    let steps = config
        .words
        .into_iter()
        .map(|input| {
            let result = session.submit(&input);
            CheckStep { input, result }
        })
        .collect();

    let snapshot = session.snapshot();

    Ok(CheckResult {
        root_word,
        steps,
        final_score: snapshot.score,
        used_words: snapshot.used_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::dictionary::Dictionary;
    use crate::validator::Rejection;

    fn session() -> GameSession {
        GameSession::new(
            Dictionary::from_words(["silk", "worm", "milk", "is", "word"]),
            GameConfig::default(),
        )
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn check_scores_each_word() {
        let mut session = session();
        let config = CheckConfig::new("silkworm".to_string(), words(&["silk", "worm"]));

        let result = check_words(config, &mut session).unwrap();

        assert_eq!(result.root_word, "silkworm");
        assert_eq!(result.final_score, 8);
        assert_eq!(result.accepted_count(), 2);
        assert_eq!(result.used_words, vec!["worm", "silk"]);
    }

    #[test]
    fn check_reports_rejections_in_order() {
        let mut session = session();
        let config = CheckConfig::new(
            "silkworm".to_string(),
            words(&["silk", "silk", "word", "is", "silkworm"]),
        );

        let result = check_words(config, &mut session).unwrap();

        let reasons: Vec<Option<&str>> = result
            .steps
            .iter()
            .map(|s| s.result.rejection().map(Rejection::kind))
            .collect();
        assert_eq!(
            reasons,
            vec![
                None,
                Some("not-original"),
                Some("not-possible"),
                Some("not-real"),
                Some("not-real")
            ]
        );
        assert_eq!(result.final_score, 4 - 4 - 4 - 2 - 8);
        assert_eq!(result.rejected_count(), 4);
    }

    #[test]
    fn check_ignores_blank_words() {
        let mut session = session();
        let config = CheckConfig::new("silkworm".to_string(), words(&["", "  "]));

        let result = check_words(config, &mut session).unwrap();

        assert_eq!(result.final_score, 0);
        assert_eq!(result.accepted_count(), 0);
        assert_eq!(result.rejected_count(), 0);
    }

    #[test]
    fn check_blank_root_is_an_error() {
        let mut session = session();
        let config = CheckConfig::new(" ".to_string(), words(&["silk"]));

        assert!(check_words(config, &mut session).is_err());
    }

    #[test]
    fn check_resets_previous_round() {
        let mut session = session();
        session.start_round_with("silkworm");
        session.submit("silk");

        let config = CheckConfig::new("silkworm".to_string(), words(&["silk"]));
        let result = check_words(config, &mut session).unwrap();

        assert_eq!(result.final_score, 4);
        assert_eq!(result.accepted_count(), 1);
    }
}
