//! Scripted word service for driving whole games in tests

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::core::Word;
use crate::service::{FetchFailure, ValidationFailure, WordService};

/// Replies are consumed in order; once the script runs out every guess is valid
pub struct ScriptedService {
    secret: Result<Word, FetchFailure>,
    replies: Mutex<VecDeque<Result<(), ValidationFailure>>>,
    validated: Mutex<Vec<Word>>,
}

impl ScriptedService {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Ok(Word::new(secret).unwrap()),
            replies: Mutex::new(VecDeque::new()),
            validated: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: FetchFailure) -> Self {
        Self {
            secret: Err(failure),
            replies: Mutex::new(VecDeque::new()),
            validated: Mutex::new(Vec::new()),
        }
    }

    pub fn then(self, reply: Result<(), ValidationFailure>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn validated(&self) -> Vec<Word> {
        self.validated.lock().unwrap().clone()
    }
}

impl WordService for ScriptedService {
    fn word_of_the_day(&self) -> Result<Word, FetchFailure> {
        self.secret.clone()
    }

    fn validate(&self, guess: &Word) -> Result<(), ValidationFailure> {
        self.validated.lock().unwrap().push(*guess);
        self.replies.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}
