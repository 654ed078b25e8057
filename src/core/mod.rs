//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear invariants.

mod guess;
mod masked;
mod word;

pub use guess::{Guess, is_valid, is_word_correct, match_positions};
pub use masked::{HIDDEN, MaskedWord};
pub use word::{SecretWord, WordError};
