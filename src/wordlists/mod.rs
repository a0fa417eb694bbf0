//! Word lists for offline play
//!
//! Provides a dictionary compiled into the binary, used when the remote word
//! service is not wanted.

pub mod loader;

/// Embedded dictionary, one lowercase five-letter word per line
pub const WORDS: &str = include_str!("../../data/words.txt");

/// Iterate over the non-empty lines of the embedded dictionary
pub fn embedded() -> impl Iterator<Item = &'static str> {
    WORDS.lines().map(str::trim).filter(|line| !line.is_empty())
}
