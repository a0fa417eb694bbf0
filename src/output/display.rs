//! Display functions for line-mode play

use super::formatters::{celebration, guesses_noun, keyboard, scored_row};
use crate::core::{Feedback, Word};
use crate::game::{GameSession, Notification};
use colored::Colorize;

/// Print the scored rows so far followed by the keyboard
pub fn print_board(session: &GameSession) {
    println!();
    for (i, row) in session.scored_rows().iter().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            scored_row(&row.guess, &row.feedback)
        );
    }
    println!();
    for line in keyboard(session) {
        println!("  {line}");
    }
    println!();
}

/// Print the user-facing part of a notification
///
/// Loading notifications are handled by the caller's spinner; scored rows are
/// shown through `print_board`.
pub fn print_notification(notification: &Notification) {
    match notification {
        Notification::InvalidWordRejected { row } => {
            println!(
                "{}",
                format!("❌ Row {} is not a valid word, try again", row + 1)
                    .red()
                    .bold()
            );
        }
        Notification::GameWon { attempts, secret } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("  {}", celebration(*attempts).bright_green().bold());
            println!(
                "  {} in {} {}",
                secret.as_str().bright_yellow().bold(),
                attempts.to_string().bright_cyan().bold(),
                guesses_noun(*attempts)
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Notification::GameLost { secret } => {
            println!("\n{}", "═".repeat(60).red());
            println!(
                "  {} The word was {}",
                "You lose.".red().bold(),
                secret.as_str().bright_yellow().bold()
            );
            println!("{}", "═".repeat(60).red());
        }
        Notification::FatalError { message } => {
            println!("{}", format!("⚠️  {message}").red().bold());
        }
        Notification::BoardCleared => println!("\n🔄 New game started!"),
        Notification::LoadingStarted
        | Notification::LoadingEnded
        | Notification::RowScored { .. } => {}
    }
}

/// Print the result of scoring one guess against a secret
pub fn print_score(secret: &Word, guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.as_str().bright_yellow().bold(),
        guess.as_str().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", scored_row(guess, feedback));
    println!("  {}  ({feedback})", feedback.to_emoji());
    if feedback.is_solved() {
        println!("\n{}", "✅ Solved!".green().bold());
    }
}
