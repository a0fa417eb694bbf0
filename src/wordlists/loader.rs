//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert string slices to words, dropping anything that is not a 5-letter word
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// The embedded dictionary as words
#[must_use]
pub fn embedded_words() -> Vec<Word> {
    words_from_lines(super::embedded())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_converts_valid_words() {
        let words = words_from_lines(["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].as_str(), "CRANE");
        assert_eq!(words[1].as_str(), "SLATE");
        assert_eq!(words[2].as_str(), "IRATE");
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines(["crane", "toolong", "abc", "", "  slate  "]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].as_str(), "CRANE");
        assert_eq!(words[1].as_str(), "SLATE");
    }

    #[test]
    fn words_from_lines_empty() {
        let words = words_from_lines(std::iter::empty());
        assert!(words.is_empty());
    }

    #[test]
    fn embedded_words_all_convert() {
        assert_eq!(embedded_words().len(), crate::wordlists::embedded().count());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
