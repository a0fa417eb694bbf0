//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::ProgressBar;

use crate::core::{ANSWER_LENGTH, ROUNDS, Word};
use crate::game::{Driver, GameStatus, Notification};
use crate::output::{print_board, print_notification};
use crate::service::WordService;

/// Run the line-based game until the player quits or stdin closes
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordService>(service: S) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Line Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {ANSWER_LENGTH}-letter word in {ROUNDS} tries.");
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word", " - ".white().on_bright_black());
    println!("\nCommands: 'new' for a new game, 'quit' to exit\n");

    let mut driver = Driver::new(service);
    let notes = with_spinner("Loading word...", || driver.new_game());
    show(&notes, &driver);

    loop {
        let session = driver.session();
        let prompt = if session.status() == GameStatus::InProgress {
            format!("Guess {}/{ROUNDS}", session.current_row() + 1)
        } else {
            "Play again? (yes/no)".to_string()
        };

        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let input = input.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let notes = with_spinner("Loading word...", || driver.new_game());
                show(&notes, &driver);
                continue;
            }
            _ => {}
        }

        if driver.session().status() != GameStatus::InProgress {
            if matches!(input.as_str(), "yes" | "y") {
                let notes = with_spinner("Loading word...", || driver.new_game());
                show(&notes, &driver);
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        if driver.session().load_error().is_some() {
            println!("No word loaded. Type 'new' to try again or 'quit' to exit.\n");
            continue;
        }

        if let Err(err) = Word::new(&input) {
            println!("❌ {err}\n");
            continue;
        }

        let notes = with_spinner("Checking word...", || driver.enter_guess(&input));
        show(&notes, &driver);
    }
}

fn show<S: WordService>(notes: &[Notification], driver: &Driver<S>) {
    for note in notes {
        print_notification(note);
    }
    if notes
        .iter()
        .any(|n| matches!(n, Notification::RowScored { .. }))
    {
        print_board(driver.session());
    }
}

/// Run `work` behind a spinner; the game blocks on the network meanwhile
fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = work();
    spinner.finish_and_clear();
    result
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
