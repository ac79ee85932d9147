//! Values a session hands back to the presentation layer

use crate::validator::Rejection;

/// Immutable view of a round, rendered by front-ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub root_word: String,
    /// Most recent first
    pub used_words: Vec<String>,
    pub score: i64,
}

impl Snapshot {
    /// Letters across all accepted words, ignoring penalties
    #[must_use]
    pub fn letters_found(&self) -> usize {
        self.used_words.iter().map(|w| w.chars().count()).sum()
    }
}

/// What happened to a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Blank input, nothing changed
    Ignored,
    /// Added to the used words
    Accepted { word: String, score: i64 },
    /// Turned down and penalized
    Rejected {
        word: String,
        rejection: Rejection,
        score: i64,
    },
}

impl SubmissionResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected { rejection, .. } => Some(rejection),
            _ => None,
        }
    }

    /// Event to emit across the presentation boundary
    ///
    /// Ignored submissions emit nothing.
    #[must_use]
    pub fn event(&self) -> Option<GameEvent> {
        match self {
            Self::Ignored => None,
            Self::Accepted { word, score } => Some(GameEvent::Accepted {
                word: word.clone(),
                score: *score,
            }),
            Self::Rejected {
                rejection, score, ..
            } => Some(GameEvent::Rejected {
                title: rejection.title().to_string(),
                message: rejection.message(),
                score: *score,
            }),
        }
    }
}

/// One notification per core call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        root_word: String,
    },
    Accepted {
        word: String,
        score: i64,
    },
    Rejected {
        title: String,
        message: String,
        score: i64,
    },
}
