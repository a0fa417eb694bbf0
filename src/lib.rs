//! Wordle Game
//!
//! A terminal Wordle: a daily secret word from a remote service, guesses
//! checked against a remote dictionary, duplicate-aware letter scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//!
//! let secret = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//!
//! let feedback = evaluate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "Y--YY");
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word-of-the-day and validation collaborators
pub mod service;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime settings
pub mod config;

// Diagnostic tracing
pub mod logging;
