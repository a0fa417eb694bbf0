//! Wordle - CLI
//!
//! Play Wordle in the terminal, with a TUI or line-based interface.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_simple, score_guess},
    config::GameConfig,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::print_score,
    service::DEFAULT_API_BASE,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the 5-letter word of the day in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word-of-the-day / validate-word API
    #[arg(long, global = true, env = "WORDLE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Give up on a network request after this many seconds (default: wait forever)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Play against the built-in dictionary instead of the API
    #[arg(long, global = true)]
    offline: bool,

    /// Fixed secret word (offline only)
    #[arg(long, global = true, requires = "offline")]
    secret: Option<String>,

    /// Dictionary file, one word per line (offline only)
    #[arg(short = 'w', long, global = true, requires = "offline")]
    wordlist: Option<PathBuf>,

    /// Write logs here (TUI mode logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a secret and exit
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            api_base: self.api_base.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            offline: self.offline,
            secret: self.secret.clone(),
            wordlist: self.wordlist.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let default_command = Commands::Play;
    let command = cli.command.as_ref().unwrap_or(&default_command);

    let log_target = match (&cli.log_file, command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    match command {
        Commands::Play => run_play_command(&cli.config()),
        Commands::Simple => run_simple_command(&cli.config()),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let service = config.build_service()?;
    run_tui(App::new(service))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let service = config.build_service()?;
    run_simple(service)
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score(&result.secret, &result.guess, &result.feedback);
    Ok(())
}
