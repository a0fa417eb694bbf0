//! One-shot scoring of a guess against a known secret

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback: evaluate(&secret, &guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_mixed_case_input() {
        let result = score_guess("Crane", "trace").unwrap();
        assert_eq!(result.secret.as_str(), "CRANE");
        assert_eq!(result.feedback.to_string(), "-GGYG");
    }

    #[test]
    fn solved_when_equal() {
        assert!(score_guess("slate", "SLATE").unwrap().feedback.is_solved());
    }

    #[test]
    fn invalid_words_are_errors() {
        assert_eq!(
            score_guess("crane", "cranes").err(),
            Some(WordError::InvalidLength(6))
        );
        assert!(score_guess("cr4ne", "crane").is_err());
    }
}
