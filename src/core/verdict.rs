//! Guess evaluation against the secret word
//!
//! Each position of a committed guess receives one verdict:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere in the secret
//! - Absent: letter not in the secret (or all its copies already used up)

use std::fmt;

use super::word::alphabet_index;
use super::{ANSWER_LENGTH, Word};

/// Per-letter classification of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Single-character form used in pattern strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for all five positions of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterVerdict; ANSWER_LENGTH]);

impl Feedback {
    /// All five positions correct
    pub const SOLVED: Self = Self([LetterVerdict::Correct; ANSWER_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [LetterVerdict; ANSWER_LENGTH]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; ANSWER_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterVerdict {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterVerdict> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions carrying the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.iter().filter(|&v| v == verdict).count()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterVerdict::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.iter() {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a pattern such as "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != ANSWER_LENGTH {
            return Err(format!("Invalid pattern string: {s}"));
        }

        let mut verdicts = [LetterVerdict::Absent; ANSWER_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterVerdict::Correct,
                'Y' | 'y' | '🟨' => LetterVerdict::Present,
                '-' | '_' | '⬜' => LetterVerdict::Absent,
                _ => return Err(format!("Invalid pattern string: {s}")),
            };
        }
        Ok(Self(verdicts))
    }
}

/// Score `guess` against `secret`
///
/// Duplicate letters are handled with a remaining-count table:
/// 1. First pass: exact position matches become Correct and consume a copy
/// 2. Second pass, left to right: a letter with copies left becomes Present
///    and consumes one, otherwise Absent
///
/// Earlier positions therefore win Present when the guess holds more copies
/// of a letter than the secret does.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterVerdict::*, Word, evaluate};
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let feedback = evaluate(&secret, &guess);
///
/// assert_eq!(feedback.verdicts(), &[Absent, Correct, Correct, Present, Correct]);
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    let mut verdicts = [LetterVerdict::Absent; ANSWER_LENGTH];
    let mut remaining = secret.letter_counts();

    for (i, verdict) in verdicts.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if letter == secret.letter_at(i) {
            *verdict = LetterVerdict::Correct;
            remaining[alphabet_index(letter)] -= 1;
        }
    }

    for (i, verdict) in verdicts.iter_mut().enumerate() {
        if *verdict == LetterVerdict::Correct {
            continue;
        }
        let count = &mut remaining[alphabet_index(guess.letter_at(i))];
        if *count > 0 {
            *verdict = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Feedback(verdicts)
}

#[cfg(test)]
mod tests {
    use super::LetterVerdict::{Absent, Correct, Present};
    use super::*;
    use crate::wordlists::loader::embedded_words;

    fn score(secret: &str, guess: &str) -> Feedback {
        evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn crane_vs_trace() {
        assert_eq!(
            score("CRANE", "TRACE").verdicts(),
            &[Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn speed_vs_erase_caps_present_at_secret_count() {
        // SPEED holds two E's; ERASE holds two, both misplaced
        let feedback = score("SPEED", "ERASE");
        assert_eq!(feedback.verdicts(), &[Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn excess_duplicates_are_absent_left_to_right() {
        // One E in the secret, three in the guess: only the first wins Present
        let feedback = score("CRANE", "EERIE");
        assert_eq!(feedback.verdicts(), &[Absent, Absent, Present, Absent, Correct]);

        let feedback = score("ABBEY", "EEEXX");
        assert_eq!(feedback.verdicts(), &[Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn correct_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: second O sits on a correct slot, first O is still present
        let feedback = score("FLOOR", "ROBOT");
        assert_eq!(feedback.verdicts(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn identical_words_are_solved() {
        for word in ["CRANE", "SLATE", "AUDIO", "ZZZZZ", "AAAAA"] {
            assert!(score(word, word).is_solved());
        }
    }

    #[test]
    fn all_absent() {
        let feedback = score("FGHIJ", "ABCDE");
        assert_eq!(feedback.count(Absent), 5);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn matched_letters_equal_min_of_counts() {
        let words = embedded_words();
        for secret in &words {
            let secret_counts = secret.letter_counts();
            for guess in &words {
                let feedback = evaluate(secret, guess);
                let guess_counts = guess.letter_counts();

                let mut matched = [0u8; 26];
                for (i, verdict) in feedback.iter().enumerate() {
                    let letter = guess.letter_at(i);
                    assert_eq!(
                        verdict == Correct,
                        letter == secret.letter_at(i),
                        "{secret}/{guess} position {i}"
                    );
                    if verdict != Absent {
                        matched[alphabet_index(letter)] += 1;
                    }
                }

                for (idx, letter) in (b'A'..=b'Z').enumerate() {
                    assert_eq!(
                        matched[idx],
                        secret_counts[idx].min(guess_counts[idx]),
                        "{secret}/{guess} letter {}",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn hand_picked_duplicates_keep_min_count() {
        for (secret, guess) in [("LLAMA", "ALLAL"), ("MAMMA", "AMMAM"), ("ABBEY", "BABES")] {
            let feedback = score(secret, guess);
            let matched = feedback.count(Correct) + feedback.count(Present);
            let (s, g) = (Word::new(secret).unwrap(), Word::new(guess).unwrap());
            let expected: usize = s
                .letter_counts()
                .iter()
                .zip(g.letter_counts())
                .map(|(&a, b)| usize::from(a.min(b)))
                .sum();
            assert_eq!(matched, expected, "{secret}/{guess}");
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(score("LLAMA", "ALLAL"), score("LLAMA", "ALLAL"));
    }

    #[test]
    fn built_feedback_matches_parsed_and_evaluated() {
        let built = Feedback::new([Absent, Correct, Correct, Present, Correct]);
        assert_eq!(built, "-GGYG".parse().unwrap());
        assert_eq!(built, score("CRANE", "TRACE"));
        assert_eq!(built.count(Correct), 3);
        assert!(Feedback::new([Correct; ANSWER_LENGTH]).is_solved());
    }

    #[test]
    fn feedback_parse_and_display() {
        let p1: Feedback = "GY-G-".parse().unwrap();
        let p2: Feedback = "🟩🟨⬜🟩⬜".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.to_string(), "GY-G-");
        assert_eq!(p1.to_emoji(), "🟩🟨⬜🟩⬜");
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
    }
}
