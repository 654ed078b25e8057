//! Guess evaluation and match state
//!
//! This module contains the match state machine and everything it needs to judge a
//! guess: try bookkeeping, outcome types and scoring.

mod error;
mod match_engine;
mod outcome;
mod scoring;
mod tries;

pub use error::MatchError;
pub use match_engine::{MatchEngine, MatchSnapshot};
pub use outcome::{GuessOutcome, GuessOutcomeKind, MatchOutcome};
pub use scoring::score;
pub use tries::{MAX_TRIES, Tries};
