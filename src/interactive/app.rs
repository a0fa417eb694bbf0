//! TUI application state and logic

use crate::core::ROUNDS;
use crate::game::{GameEvent, GameSession, Notification, Request};
use crate::output::formatters::celebration;
use crate::service::WordService;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long the active row stays red after an invalid word
const INVALID_FLASH: Duration = Duration::from_millis(600);

/// Redraw interval while idle; keeps the spinner moving
const TICK: Duration = Duration::from_millis(80);

/// Application state
pub struct App {
    pub session: GameSession,
    service: Arc<dyn WordService>,
    replies_tx: Sender<GameEvent>,
    replies_rx: Receiver<GameEvent>,
    pub loading: bool,
    pub invalid_flash: Option<(usize, Instant)>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub tick: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; ROUNDS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(service: Arc<dyn WordService>) -> Self {
        let (replies_tx, replies_rx) = mpsc::channel();

        Self {
            session: GameSession::new(),
            service,
            replies_tx,
            replies_rx,
            loading: false,
            invalid_flash: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            tick: 0,
            should_quit: false,
        }
    }

    /// Begin the first game
    pub fn start(&mut self) {
        self.dispatch(GameEvent::NewGame);
    }

    /// Feed one event to the session and act on the outcome
    pub fn dispatch(&mut self, event: GameEvent) {
        let step = self.session.handle(event);
        for notification in &step.notifications {
            self.apply(notification);
        }
        if let Some(request) = step.request {
            self.spawn_request(request);
        }
    }

    /// Run a request off the UI thread; the reply comes back through the channel
    fn spawn_request(&self, request: Request) {
        let service = Arc::clone(&self.service);
        let replies = self.replies_tx.clone();

        thread::spawn(move || {
            let reply = request.execute(service.as_ref());
            if replies.send(reply).is_err() {
                debug!("reply dropped, UI already closed");
            }
        });
    }

    /// Apply every reply that has arrived since the last frame
    pub fn poll_replies(&mut self) {
        while let Ok(event) = self.replies_rx.try_recv() {
            self.dispatch(event);
        }
    }

    /// Translate a key press into a game event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.dispatch(GameEvent::NewGame),
            KeyCode::Char(c) if !chord => self.dispatch(GameEvent::LetterTyped(c)),
            KeyCode::Backspace => self.dispatch(GameEvent::Backspace),
            KeyCode::Left => self.dispatch(GameEvent::CursorLeft),
            KeyCode::Right => self.dispatch(GameEvent::CursorRight),
            KeyCode::Enter => self.dispatch(GameEvent::CommitRequested),
            _ => {}
        }
    }

    fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::LoadingStarted => self.loading = true,
            Notification::LoadingEnded => self.loading = false,
            Notification::BoardCleared => {
                self.messages.clear();
                self.invalid_flash = None;
                self.add_message("New game started! Loading today's word...", MessageStyle::Info);
            }
            Notification::RowScored { .. } => self.invalid_flash = None,
            Notification::InvalidWordRejected { row } => {
                self.invalid_flash = Some((*row, Instant::now()));
                self.add_message("Not a valid word!", MessageStyle::Error);
            }
            Notification::GameWon { attempts, secret } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(*attempts) {
                    *slot += 1;
                }
                self.add_message(celebration(*attempts), MessageStyle::Success);
                self.add_message(
                    &format!("The word was {secret}. Ctrl-N for a new game."),
                    MessageStyle::Info,
                );
            }
            Notification::GameLost { secret } => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("You lose, the word was {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Ctrl-N for a new game.", MessageStyle::Info);
            }
            Notification::FatalError { message } => {
                self.add_message(message, MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// True while `row` should be drawn as rejected
    #[must_use]
    pub fn is_flashing(&self, row: usize) -> bool {
        self.invalid_flash
            .is_some_and(|(flash_row, at)| flash_row == row && at.elapsed() < INVALID_FLASH)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start();

    loop {
        app.poll_replies();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.tick = app.tick.wrapping_add(1);
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameStatus, Phase};
    use crate::service::OfflineWordService;
    use crate::wordlists::loader::embedded_words;

    fn app(secret: &str) -> App {
        let service =
            OfflineWordService::new(embedded_words()).with_secret(Word::new(secret).unwrap());
        App::new(Arc::new(service))
    }

    /// Block until the outstanding request has been answered and applied
    fn settle(app: &mut App) {
        let reply = app
            .replies_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker reply");
        app.dispatch(reply);
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn start_loads_secret_through_worker() {
        let mut app = app("crane");
        app.start();
        assert!(app.loading);

        settle(&mut app);
        assert!(!app.loading);
        assert_eq!(app.session.phase(), Phase::AcceptingInput);
    }

    #[test]
    fn keys_drive_a_winning_game() {
        let mut app = app("crane");
        app.start();
        settle(&mut app);

        type_word(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        assert!(app.loading);
        settle(&mut app);
        assert_eq!(app.session.current_row(), 1);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));
    }

    #[test]
    fn unknown_word_flashes_the_row() {
        let mut app = app("crane");
        app.start();
        settle(&mut app);

        type_word(&mut app, "xqzvp");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert!(app.is_flashing(0));
        assert!(!app.is_flashing(1));
        assert_eq!(app.session.current_row(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn ctrl_n_restarts_and_esc_quits() {
        let mut app = app("crane");
        app.start();
        settle(&mut app);
        let first = app.session.game_id();

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_ne!(app.session.game_id(), first);
        assert!(app.loading);
        settle(&mut app);

        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let mut app = app("crane");
        app.start();
        settle(&mut app);

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.session.current_guess(), "");
        assert_eq!(app.session.cursor(), 0);

        app.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
        assert_eq!(app.session.current_guess(), "T");
        assert!(!app.should_quit);
    }

    #[test]
    fn message_log_is_capped() {
        let mut app = app("crane");
        for i in 0..8 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "msg 3");
    }

    #[test]
    fn win_rate_handles_no_games() {
        let stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
