//! Messages flowing into and out of the game session

use std::fmt;

use super::session::Phase;
use crate::core::{ANSWER_LENGTH, LetterVerdict, Word};
use crate::service::{FetchFailure, ValidationFailure, WordService};

/// Identifies one game; bumped on every new game so late replies can be discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GameId(u64);

impl GameId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything that can happen to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    NewGame,
    LetterTyped(char),
    Backspace,
    CursorLeft,
    CursorRight,
    CommitRequested,
    SecretFetched {
        game: GameId,
        result: Result<Word, FetchFailure>,
    },
    ValidationResolved {
        game: GameId,
        guess: Word,
        result: Result<(), ValidationFailure>,
    },
}

/// Network work the session needs done before it can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    FetchSecret { game: GameId },
    Validate { game: GameId, guess: Word },
}

impl Request {
    /// Perform the request and wrap the reply as the event the session expects
    pub fn execute<S: WordService + ?Sized>(self, service: &S) -> GameEvent {
        match self {
            Self::FetchSecret { game } => GameEvent::SecretFetched {
                game,
                result: service.word_of_the_day(),
            },
            Self::Validate { game, guess } => GameEvent::ValidationResolved {
                game,
                guess,
                result: service.validate(&guess),
            },
        }
    }
}

/// One scored position of a committed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCell {
    pub position: usize,
    pub verdict: LetterVerdict,
    pub letter: char,
}

/// What the presentation layer is told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    LoadingStarted,
    LoadingEnded,
    BoardCleared,
    RowScored {
        row: usize,
        cells: [ScoredCell; ANSWER_LENGTH],
    },
    InvalidWordRejected {
        row: usize,
    },
    GameWon {
        attempts: usize,
        secret: Word,
    },
    GameLost {
        secret: Word,
    },
    FatalError {
        message: String,
    },
}

/// Why an event was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalInput {
    /// The session is loading, validating or finished
    Busy(Phase),
    NotALetter(char),
    RowIncomplete,
    /// Reply for a game that has since been replaced
    StaleResponse,
    /// Reply the session was not waiting for
    Unexpected,
}

/// Result of handling one event
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Step {
    pub notifications: Vec<Notification>,
    pub request: Option<Request>,
    pub rejected: Option<IllegalInput>,
}

impl Step {
    pub(crate) fn reject(reason: IllegalInput) -> Self {
        Self {
            rejected: Some(reason),
            ..Self::default()
        }
    }

    pub(crate) fn notify(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.rejected.is_some()
    }
}
