//! The live game: cursor, partial guess, scored rows and the phase gate
//!
//! `GameSession` never performs I/O. Each call to [`GameSession::handle`]
//! returns a [`Step`] describing what to show and which request (if any) a
//! driver must run; the reply comes back in as another event.

use tracing::{debug, info, trace, warn};

use super::event::{GameEvent, GameId, IllegalInput, Notification, Request, ScoredCell, Step};
use crate::core::{ANSWER_LENGTH, Feedback, LetterVerdict, ROUNDS, Word, evaluate};
use crate::service::{FetchFailure, ValidationFailure};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Secret word not fetched yet
    Loading,
    AcceptingInput,
    /// Guess submitted, waiting on the validator
    Validating,
    Terminal(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A committed, scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// What one box of the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    pub letter: Option<char>,
    pub verdict: Option<LetterVerdict>,
}

/// Single owned game state; the only writer is whoever calls `handle`
#[derive(Debug, Clone)]
pub struct GameSession {
    game: GameId,
    phase: Phase,
    secret: Option<Word>,
    rows: Vec<ScoredRow>,
    guess: [Option<u8>; ANSWER_LENGTH],
    cursor: usize,
    load_error: Option<String>,
    hints: [Option<LetterVerdict>; 26],
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session in `Loading` that has not asked for a secret yet
    ///
    /// Call [`GameSession::start`] (or send `GameEvent::NewGame`) to get the
    /// fetch request.
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: GameId::default(),
            phase: Phase::Loading,
            secret: None,
            rows: Vec::with_capacity(ROUNDS),
            guess: [None; ANSWER_LENGTH],
            cursor: 0,
            load_error: None,
            hints: [None; 26],
        }
    }

    /// Begin the first game
    pub fn start(&mut self) -> Step {
        self.handle(GameEvent::NewGame)
    }

    /// Apply one event
    pub fn handle(&mut self, event: GameEvent) -> Step {
        let step = match event {
            GameEvent::NewGame => self.new_game(),
            GameEvent::LetterTyped(ch) => self.type_letter(ch),
            GameEvent::Backspace => self.delete_letter(),
            GameEvent::CursorLeft => self.move_cursor(-1),
            GameEvent::CursorRight => self.move_cursor(1),
            GameEvent::CommitRequested => self.commit(),
            GameEvent::SecretFetched { game, result } => self.secret_fetched(game, result),
            GameEvent::ValidationResolved {
                game,
                guess,
                result,
            } => self.validation_resolved(game, guess, result),
        };

        if let Some(reason) = step.rejected {
            trace!(game = %self.game, ?reason, "input ignored");
        }
        step
    }

    fn new_game(&mut self) -> Step {
        let game = self.game.next();
        *self = Self::new();
        self.game = game;
        info!(game = %game, "new game");

        Step {
            notifications: vec![Notification::BoardCleared, Notification::LoadingStarted],
            request: Some(Request::FetchSecret { game }),
            rejected: None,
        }
    }

    fn type_letter(&mut self, ch: char) -> Step {
        if self.phase != Phase::AcceptingInput {
            return Step::reject(IllegalInput::Busy(self.phase));
        }
        if !ch.is_ascii_alphabetic() {
            return Step::reject(IllegalInput::NotALetter(ch));
        }

        self.guess[self.cursor] = Some(ch.to_ascii_uppercase() as u8);
        if self.cursor < ANSWER_LENGTH - 1 {
            self.cursor += 1;
        }
        Step::default()
    }

    fn delete_letter(&mut self) -> Step {
        if self.phase != Phase::AcceptingInput {
            return Step::reject(IllegalInput::Busy(self.phase));
        }

        if self.guess[self.cursor].is_some() {
            self.guess[self.cursor] = None;
        } else if self.cursor > 0 {
            self.cursor -= 1;
            self.guess[self.cursor] = None;
        }
        Step::default()
    }

    fn move_cursor(&mut self, delta: isize) -> Step {
        if self.phase != Phase::AcceptingInput {
            return Step::reject(IllegalInput::Busy(self.phase));
        }

        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(ANSWER_LENGTH - 1);
        Step::default()
    }

    fn commit(&mut self) -> Step {
        if self.phase != Phase::AcceptingInput {
            return Step::reject(IllegalInput::Busy(self.phase));
        }
        let Some(guess) = self.assembled_guess() else {
            return Step::reject(IllegalInput::RowIncomplete);
        };

        self.phase = Phase::Validating;
        debug!(game = %self.game, row = self.current_row(), guess = %guess, "submitting guess");

        Step {
            notifications: vec![Notification::LoadingStarted],
            request: Some(Request::Validate {
                game: self.game,
                guess,
            }),
            rejected: None,
        }
    }

    fn secret_fetched(&mut self, game: GameId, result: Result<Word, FetchFailure>) -> Step {
        if game != self.game {
            return Step::reject(IllegalInput::StaleResponse);
        }
        if self.phase != Phase::Loading || self.secret.is_some() || self.load_error.is_some() {
            return Step::reject(IllegalInput::Unexpected);
        }

        match result {
            Ok(secret) => {
                self.secret = Some(secret);
                self.phase = Phase::AcceptingInput;
                debug!(game = %game, "secret word loaded");
                Step::notify(vec![Notification::LoadingEnded])
            }
            Err(err) => {
                warn!(game = %game, error = %err, "failed to load secret word");
                let message = format!("Failed to load word: {err}. Start a new game to retry.");
                self.load_error = Some(message.clone());
                Step::notify(vec![
                    Notification::LoadingEnded,
                    Notification::FatalError { message },
                ])
            }
        }
    }

    fn validation_resolved(
        &mut self,
        game: GameId,
        validated: Word,
        result: Result<(), ValidationFailure>,
    ) -> Step {
        if game != self.game {
            return Step::reject(IllegalInput::StaleResponse);
        }
        if self.phase != Phase::Validating {
            return Step::reject(IllegalInput::Unexpected);
        }
        let (Some(secret), Some(guess)) = (self.secret, self.assembled_guess()) else {
            return Step::reject(IllegalInput::Unexpected);
        };
        // The verdict only applies to the word that was sent
        if validated != guess {
            return Step::reject(IllegalInput::Unexpected);
        }

        let row = self.current_row();
        if let Err(failure) = result {
            if failure.is_rejection() {
                info!(game = %game, row, guess = %guess, "guess rejected as unknown word");
            } else {
                warn!(game = %game, row, guess = %guess, error = %failure, "validation failed");
            }
            self.phase = Phase::AcceptingInput;
            return Step::notify(vec![
                Notification::LoadingEnded,
                Notification::InvalidWordRejected { row },
            ]);
        }

        let feedback = evaluate(&secret, &guess);
        self.record_hints(&guess, &feedback);
        self.rows.push(ScoredRow { guess, feedback });
        self.guess = [None; ANSWER_LENGTH];
        self.cursor = 0;

        let mut notifications = vec![
            Notification::LoadingEnded,
            Notification::RowScored {
                row,
                cells: scored_cells(&guess, &feedback),
            },
        ];

        let attempts = self.rows.len();
        if feedback.is_solved() {
            self.phase = Phase::Terminal(Outcome::Won);
            info!(game = %game, attempts, "game won");
            notifications.push(Notification::GameWon { attempts, secret });
        } else if attempts == ROUNDS {
            self.phase = Phase::Terminal(Outcome::Lost);
            info!(game = %game, secret = %secret, "game lost");
            notifications.push(Notification::GameLost { secret });
        } else {
            self.phase = Phase::AcceptingInput;
            debug!(game = %game, row = attempts, feedback = %feedback, "row scored");
        }

        Step::notify(notifications)
    }

    fn assembled_guess(&self) -> Option<Word> {
        let mut letters = [0u8; ANSWER_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(self.guess) {
            *slot = cell?;
        }
        Some(Word::from_letters(letters))
    }

    fn record_hints(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, verdict) in guess.letters().iter().zip(feedback.iter()) {
            let hint = &mut self.hints[usize::from(letter - b'A')];
            *hint = (*hint).max(Some(verdict));
        }
    }

    #[must_use]
    pub const fn game_id(&self) -> GameId {
        self.game
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Terminal(Outcome::Won) => GameStatus::Won,
            Phase::Terminal(Outcome::Lost) => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// Index of the active row; equals `ROUNDS` only after a loss
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    /// Column of the cursor inside the active row
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Letters typed so far in the active row
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.guess.iter().flatten().map(|&b| char::from(b)).collect()
    }

    #[must_use]
    pub fn scored_rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// The secret, disclosed only once the game is over
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        match self.phase {
            Phase::Terminal(_) => self.secret.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Strongest verdict seen so far for `letter`, for keyboard colouring
    #[must_use]
    pub fn keyboard_hint(&self, letter: char) -> Option<LetterVerdict> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.hints[usize::from(letter.to_ascii_uppercase() as u8 - b'A')]
    }

    /// Contents of the box at (`row`, `col`)
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> CellView {
        if let Some(scored) = self.rows.get(row) {
            return CellView {
                letter: Some(char::from(scored.guess.letter_at(col))),
                verdict: Some(scored.feedback.at(col)),
            };
        }
        if row == self.current_row() {
            return CellView {
                letter: self.guess[col].map(char::from),
                verdict: None,
            };
        }
        CellView::default()
    }
}

fn scored_cells(guess: &Word, feedback: &Feedback) -> [ScoredCell; ANSWER_LENGTH] {
    std::array::from_fn(|position| ScoredCell {
        position,
        verdict: feedback.at(position),
        letter: char::from(guess.letter_at(position)),
    })
}
