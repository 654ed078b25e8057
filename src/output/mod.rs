//! Terminal output formatting
//!
//! Display utilities for the console game and shared pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_guess_prompt, print_match_state, print_outcome, print_score_board,
};
