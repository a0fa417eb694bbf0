//! Remote word collaborators
//!
//! The game needs two things from outside: the secret word for the day, and
//! a yes/no answer on whether a guess is a real word. `WordService` is that
//! contract; `HttpWordService` talks to the public API and
//! `OfflineWordService` answers from the embedded dictionary.

mod http;
mod offline;

use std::fmt;

use crate::core::Word;

pub use http::{DEFAULT_API_BASE, HttpWordService};
pub use offline::OfflineWordService;

/// Source of the secret word and authority on valid guesses
pub trait WordService: Send + Sync {
    /// Fetch the secret word for a new game
    ///
    /// # Errors
    /// Any transport, status or decoding problem is a `FetchFailure`.
    fn word_of_the_day(&self) -> Result<Word, FetchFailure>;

    /// Ask whether `guess` is an acceptable word
    ///
    /// # Errors
    /// `ValidationFailure::Rejected` when the word is unknown; other variants
    /// when the service could not answer.
    fn validate(&self, guess: &Word) -> Result<(), ValidationFailure>;
}

/// Word-of-the-day could not be obtained; the game cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    Transport(String),
    Status(u16),
    Malformed(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Could not reach word service: {err}"),
            Self::Status(code) => write!(f, "Word service answered with status {code}"),
            Self::Malformed(err) => write!(f, "Word service sent an unusable word: {err}"),
        }
    }
}

impl std::error::Error for FetchFailure {}

/// A guess was not accepted, either because it is not a word or because the
/// validator could not be asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    Rejected,
    Transport(String),
    Status(u16),
    Malformed(String),
}

impl ValidationFailure {
    /// True when the validator answered and said no
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => write!(f, "Not in word list"),
            Self::Transport(err) => write!(f, "Could not reach validator: {err}"),
            Self::Status(code) => write!(f, "Validator answered with status {code}"),
            Self::Malformed(err) => write!(f, "Validator sent a malformed reply: {err}"),
        }
    }
}

impl std::error::Error for ValidationFailure {}

impl<S: WordService + ?Sized> WordService for std::sync::Arc<S> {
    fn word_of_the_day(&self) -> Result<Word, FetchFailure> {
        (**self).word_of_the_day()
    }

    fn validate(&self, guess: &Word) -> Result<(), ValidationFailure> {
        (**self).validate(guess)
    }
}
