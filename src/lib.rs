//! Word Scramble
//!
//! A word game: spell new words from the letters of a randomly chosen root word. Each
//! accepted word scores its length; each rejected word costs the same.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::session::GameSession;
//!
//! let mut session = GameSession::with_embedded_dictionary();
//! session.start_round(&["silkworm"]);
//!
//! assert!(session.submit("silk").is_accepted());
//! assert!(!session.submit("silk").is_accepted());
//! assert_eq!(session.score(), 0);
//! ```

// Core domain types
pub mod core;

// Validation rules
pub mod validator;

// Spell checking
pub mod dictionary;

// Round state and scoring
pub mod session;

// Game settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
