//! Per-match state machine
//!
//! A match starts `InProgress` and moves to `Won` or `Lost` exactly once. Each guess
//! goes through the same ordered checks:
//!
//! 1. Validity: empty input is `Invalid` and costs nothing
//! 2. Correctness: a wrong letter or word spends a try, possibly ending the match
//! 3. Repetition: a letter whose positions are all revealed is `AlreadyGuessed`
//! 4. Progress: reveal the letter; a correct word or a full reveal wins
//! 5. Scoring on a win

use super::scoring::score;
use super::{GuessOutcome, MatchError, MatchOutcome, Tries};
use crate::core::{Guess, MaskedWord, SecretWord, is_word_correct, match_positions};
use crate::lexicon::LexiconEntry;
use tracing::{debug, info, warn};

/// Read-only view of a match for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub masked_word: MaskedWord,
    pub hint: String,
    pub tries: Tries,
    pub letters_guessed: usize,
    pub outcome: MatchOutcome,
    pub score: u32,
}

/// Owns the mutable state of one match
#[derive(Debug, Clone)]
pub struct MatchEngine {
    secret: SecretWord,
    masked: MaskedWord,
    hint: String,
    letters_guessed: usize,
    tries: Tries,
    score: u32,
    outcome: MatchOutcome,
}

impl MatchEngine {
    /// Start a match on a copy of `entry`
    #[must_use]
    pub fn new(entry: LexiconEntry) -> Self {
        let secret = entry.word().clone();
        let masked = MaskedWord::hidden(secret.len());

        Self {
            secret,
            masked,
            hint: entry.hint().to_string(),
            letters_guessed: 0,
            tries: Tries::default(),
            score: 0,
            outcome: MatchOutcome::InProgress,
        }
    }

    /// Apply one raw guess
    ///
    /// # Errors
    /// Returns `MatchError::Finished` if the match is already won or lost. Nothing is
    /// mutated in that case.
    pub fn evaluate(&mut self, raw: &str) -> Result<GuessOutcome, MatchError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, "guess submitted after match ended");
            return Err(MatchError::Finished(self.outcome));
        }

        let Some(guess) = Guess::classify(raw) else {
            debug!("invalid guess ignored");
            return Ok(GuessOutcome::invalid());
        };

        let outcome = match guess {
            Guess::Word(word) => {
                if is_word_correct(&word, &self.secret) {
                    self.win()
                } else {
                    self.miss()
                }
            }
            Guess::Letter(letter) => self.apply_letter(letter),
        };

        debug!(
            kind = ?outcome.kind(),
            tries_remaining = self.tries.remaining(),
            letters_guessed = self.letters_guessed,
            "guess evaluated"
        );

        Ok(outcome)
    }

    fn apply_letter(&mut self, letter: char) -> GuessOutcome {
        let positions = match_positions(letter, &self.secret);

        let Some(&first) = positions.first() else {
            return self.miss();
        };

        if positions.iter().all(|&p| self.masked.is_revealed(p)) {
            return GuessOutcome::already_guessed();
        }

        let revealed = self.secret.chars()[first];
        self.letters_guessed += self.masked.reveal(&positions, revealed);

        if self.letters_guessed == self.secret.len() {
            self.win()
        } else {
            GuessOutcome::correct_letter()
        }
    }

    fn miss(&mut self) -> GuessOutcome {
        self.tries.consume();

        if self.tries.is_exhausted() {
            self.outcome = MatchOutcome::Lost;
            info!(word = %self.secret, "match lost");
            GuessOutcome::lost(&self.secret)
        } else {
            GuessOutcome::wrong()
        }
    }

    fn win(&mut self) -> GuessOutcome {
        self.outcome = MatchOutcome::Won;
        self.score = score(
            self.letters_guessed,
            self.secret.len(),
            self.tries.remaining(),
        );
        info!(word = %self.secret, score = self.score, "match won");
        GuessOutcome::won(&self.secret)
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            masked_word: self.masked.clone(),
            hint: self.hint.clone(),
            tries: self.tries,
            letters_guessed: self.letters_guessed,
            outcome: self.outcome,
            score: self.score,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn masked_word(&self) -> &MaskedWord {
        &self.masked
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub const fn tries(&self) -> Tries {
        self.tries
    }

    #[inline]
    #[must_use]
    pub const fn letters_guessed(&self) -> usize {
        self.letters_guessed
    }

    /// Points earned by this match; zero unless it was won
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> MatchOutcome {
        self.outcome
    }
}
