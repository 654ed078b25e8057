//! Match outcomes and per-guess results

use crate::core::SecretWord;
use std::fmt;

/// Lifecycle of a match. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl MatchOutcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// What a single guess did to the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcomeKind {
    /// Empty or whitespace-only input; nothing changed
    Invalid,
    /// Wrong letter or wrong word; one try spent
    WrongLetter,
    /// Every occurrence of the letter is already revealed; nothing changed
    AlreadyGuessed,
    /// New letters revealed, word not complete yet
    CorrectLetter,
    Won,
    /// The wrong guess that spent the last try
    Lost,
}

/// Result of evaluating one guess, consumed immediately by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    kind: GuessOutcomeKind,
    message: String,
    can_continue: bool,
}

impl GuessOutcome {
    pub(crate) fn invalid() -> Self {
        Self::new(GuessOutcomeKind::Invalid, "Invalid guess!", false)
    }

    pub(crate) fn wrong() -> Self {
        Self::new(
            GuessOutcomeKind::WrongLetter,
            "Not this time, try again!",
            true,
        )
    }

    pub(crate) fn lost(secret: &SecretWord) -> Self {
        Self::new(
            GuessOutcomeKind::Lost,
            format!(
                "GAME OVER!!! You ran out of tries. The word was {}.",
                secret.text().to_uppercase()
            ),
            true,
        )
    }

    pub(crate) fn already_guessed() -> Self {
        Self::new(
            GuessOutcomeKind::AlreadyGuessed,
            "Oops! You already made that guess! Try again!",
            true,
        )
    }

    pub(crate) fn correct_letter() -> Self {
        Self::new(
            GuessOutcomeKind::CorrectLetter,
            "Your guess is correct, keep it up!",
            true,
        )
    }

    pub(crate) fn won(secret: &SecretWord) -> Self {
        Self::new(
            GuessOutcomeKind::Won,
            format!("The word is {}. You got it!", secret.text().to_uppercase()),
            true,
        )
    }

    fn new(kind: GuessOutcomeKind, message: impl Into<String>, can_continue: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            can_continue,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> GuessOutcomeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// False only for invalid input: the caller must prompt again without penalty
    #[inline]
    #[must_use]
    pub const fn can_continue(&self) -> bool {
        self.can_continue
    }

    /// Whether this guess ended the match
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, GuessOutcomeKind::Won | GuessOutcomeKind::Lost)
    }
}
