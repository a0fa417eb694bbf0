//! Runs a session against a word service on the calling thread

use super::event::{GameEvent, Notification};
use super::session::GameSession;
use crate::core::ANSWER_LENGTH;
use crate::service::WordService;

/// Owns a session and performs its requests synchronously
///
/// Each `dispatch` call runs to completion: if the event produces a request,
/// the request is executed and its reply fed back before returning.
pub struct Driver<S: WordService> {
    session: GameSession,
    service: S,
}

impl<S: WordService> Driver<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            session: GameSession::new(),
            service,
        }
    }

    /// Start a fresh game (fetches the secret word)
    pub fn new_game(&mut self) -> Vec<Notification> {
        self.dispatch(GameEvent::NewGame)
    }

    /// Apply `event` and any follow-up replies, collecting notifications in order
    pub fn dispatch(&mut self, event: GameEvent) -> Vec<Notification> {
        let mut notifications = Vec::new();
        let mut next = Some(event);

        while let Some(event) = next.take() {
            let step = self.session.handle(event);
            notifications.extend(step.notifications);
            next = step
                .request
                .map(|request| request.execute(&self.service));
        }

        notifications
    }

    /// Replace the active row with `text` and commit it
    ///
    /// Used by line-based front-ends where a whole guess arrives at once.
    pub fn enter_guess(&mut self, text: &str) -> Vec<Notification> {
        for _ in 1..ANSWER_LENGTH {
            self.dispatch(GameEvent::CursorRight);
        }
        for _ in 0..ANSWER_LENGTH {
            self.dispatch(GameEvent::Backspace);
        }
        for ch in text.chars() {
            self.dispatch(GameEvent::LetterTyped(ch));
        }
        self.dispatch(GameEvent::CommitRequested)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }
}
