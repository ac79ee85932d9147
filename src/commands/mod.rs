//! Command implementations

pub mod anagrams;
pub mod check;
pub mod simple;

pub use anagrams::{AnagramsResult, find_anagrams};
pub use check::{CheckConfig, CheckResult, CheckStep, check_words};
pub use simple::{SimpleInput, run_simple, run_simple_with};
