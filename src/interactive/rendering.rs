//! TUI rendering with ratatui
//!
//! Board, keyboard hints, message log and status bar.

use super::app::{App, MessageStyle};
use crate::core::{ANSWER_LENGTH, LetterVerdict, ROUNDS};
use crate::game::{CellView, GameStatus, Phase};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board + side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Board
            Constraint::Min(30),    // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.loading {
        format!("{} WORDLE - Loading...", spinner_frame(app.tick))
    } else {
        "🟩 WORDLE".to_string()
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let active = session.phase() == Phase::AcceptingInput;
    let mut lines = Vec::with_capacity(ROUNDS * 2);

    for row in 0..ROUNDS {
        let flashing = app.is_flashing(row);
        let mut spans = Vec::with_capacity(ANSWER_LENGTH * 2);
        for col in 0..ANSWER_LENGTH {
            let is_cursor =
                active && row == session.current_row() && col == session.cursor();
            let cell = session.cell(row, col);
            spans.push(Span::styled(
                format!(" {} ", cell.letter.unwrap_or('·')),
                cell_style(cell, is_cursor, flashing),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let hint = app.session.keyboard_hint(key);
                    Span::styled(format!(" {key} "), verdict_style(hint))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let session = &app.session;
    let state_text = match session.status() {
        GameStatus::Won => "Won!".to_string(),
        GameStatus::Lost => "Lost".to_string(),
        GameStatus::InProgress if session.load_error().is_some() => "No word".to_string(),
        GameStatus::InProgress => format!("Guess {}/{ROUNDS}", session.current_row() + 1),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if session.status() == GameStatus::InProgress {
        "Enter: Submit | ←/→: Move | Ctrl-N: New Game | Esc: Quit"
    } else {
        "Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Colours for a scored tile or keyboard key
fn verdict_style(verdict: Option<LetterVerdict>) -> Style {
    match verdict {
        Some(LetterVerdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterVerdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterVerdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn cell_style(cell: CellView, is_cursor: bool, flashing: bool) -> Style {
    let mut style = verdict_style(cell.verdict);
    if flashing {
        style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn spinner_frame(tick: usize) -> char {
    SPINNER[tick % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_cells_use_verdict_background() {
        let cell = CellView {
            letter: Some('A'),
            verdict: Some(LetterVerdict::Correct),
        };
        assert_eq!(cell_style(cell, false, false).bg, Some(Color::Green));

        let cell = CellView {
            letter: Some('A'),
            verdict: Some(LetterVerdict::Present),
        };
        assert_eq!(cell_style(cell, false, false).bg, Some(Color::Yellow));
    }

    #[test]
    fn cursor_and_flash_modify_pending_cells() {
        let cell = CellView::default();

        let style = cell_style(cell, true, false);
        assert!(style.add_modifier.contains(Modifier::REVERSED));

        let style = cell_style(cell, false, true);
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
