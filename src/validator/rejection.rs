//! Why a candidate was turned down
//!
//! Rejections are ordinary game outcomes, not errors: the player loses points and keeps
//! playing. Each one carries the title and message shown to the player.

use std::fmt;

/// The check a candidate failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Already accepted this round
    NotOriginal,
    /// Uses letters the root word does not have
    NotPossible { root_word: String },
    /// Too short, the root word itself, or not in the dictionary
    NotReal,
}

impl Rejection {
    /// Short heading for the alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::NotOriginal => "Word used already",
            Self::NotPossible { .. } => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Longer explanation for the alert
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotOriginal => "Be more original".to_string(),
            Self::NotPossible { root_word } => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::NotReal => "That isn't a real word.".to_string(),
        }
    }

    /// Stable machine-readable name
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotOriginal => "not-original",
            Self::NotPossible { .. } => "not-possible",
            Self::NotReal => "not-real",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}
