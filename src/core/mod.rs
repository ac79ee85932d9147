//! Core domain types for the word game
//!
//! This module contains the fundamental value types with no knowledge of sessions or
//! dictionaries. Everything here is pure and cheap to test.

mod letters;
mod word;

pub use letters::LetterPool;
pub use word::Candidate;
