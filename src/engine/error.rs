//! Precondition violations
//!
//! Game-level conditions such as invalid input or a wrong guess are
//! [`GuessOutcome`](super::GuessOutcome)s, not errors. These errors only cover calls the
//! caller should not have made; state is left untouched when one is returned.

use super::MatchOutcome;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A guess was submitted after the match ended
    Finished(MatchOutcome),
    /// A guess was submitted before any match was started
    NotStarted,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(outcome) => {
                write!(f, "Match already {outcome}; reset before guessing again")
            }
            Self::NotStarted => write!(f, "No match in progress; start one first"),
        }
    }
}

impl std::error::Error for MatchError {}
