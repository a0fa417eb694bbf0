//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, LetterVerdict, Word};
use crate::game::GameSession;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Paint one letter tile according to its verdict
#[must_use]
pub fn tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn scored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .as_str()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, verdict)| tile(letter, Some(verdict)).to_string())
        .collect()
}

/// Three QWERTY rows, each key coloured by the best verdict seen for it
#[must_use]
pub fn keyboard(session: &GameSession) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| tile(key, session.keyboard_hint(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

/// Short praise for a win in `attempts` guesses
#[must_use]
pub const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        6 => "😅 PHEW! Got it in six! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn scored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("trace").unwrap();

        let row = scored_row(&guess, &evaluate(&secret, &guess));
        assert_eq!(row, " T  R  A  C  E ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = keyboard(&GameSession::new());

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn noun_pluralises() {
        assert_eq!(guesses_noun(1), "guess");
        assert_eq!(guesses_noun(4), "guesses");
    }

    #[test]
    fn celebration_varies_by_attempts() {
        assert_ne!(celebration(1), celebration(6));
        assert_eq!(celebration(9), "🎊 SOLVED! 🎊");
    }
}
