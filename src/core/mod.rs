//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Everything here is pure: no I/O, no session state.

mod verdict;
mod word;

pub use verdict::{Feedback, LetterVerdict, evaluate};
pub use word::{Word, WordError};

/// Letters per word
pub const ANSWER_LENGTH: usize = 5;

/// Guess rows per game
pub const ROUNDS: usize = 6;
