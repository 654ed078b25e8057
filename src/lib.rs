//! Hangman
//!
//! A word-guessing game: a hidden word is drawn from a fixed pool and the player
//! guesses letters or the whole word before running out of tries.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::engine::GuessOutcomeKind;
//! use hangman::lexicon::Lexicon;
//! use hangman::session::{GameSession, Player};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let lexicon = Lexicon::embedded().unwrap();
//! let mut session = GameSession::new(lexicon, Player::new("Davis"), StdRng::seed_from_u64(7));
//! session.start();
//!
//! let report = session.submit_guess("a").unwrap();
//! assert_ne!(report.outcome.kind(), GuessOutcomeKind::Invalid);
//! println!("{}", report.snapshot.masked_word);
//! ```

// Core domain types
pub mod core;

// Word pool
pub mod lexicon;

// Match state machine
pub mod engine;

// Player and match lifecycle
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
