//! Match lifecycle for one player

use super::Player;
use crate::engine::{GuessOutcome, GuessOutcomeKind, MatchEngine, MatchError, MatchSnapshot};
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// What a front-end needs after each guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub snapshot: MatchSnapshot,
}

/// One player playing a sequence of matches, one live at a time
///
/// The random source is injected so tests can pin word selection.
///
/// # Examples
/// ```
/// use hangman::engine::GuessOutcomeKind;
/// use hangman::lexicon::Lexicon;
/// use hangman::session::{GameSession, Player};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let lexicon = Lexicon::from_pairs(&[("bahia", "Axé - acarajé - carnaval")]).unwrap();
/// let mut session = GameSession::new(lexicon, Player::new("Davis"), StdRng::seed_from_u64(1));
///
/// let snapshot = session.start();
/// assert_eq!(snapshot.masked_word.to_string(), "_ _ _ _ _");
///
/// let report = session.submit_guess("bahia").unwrap();
/// assert_eq!(report.outcome.kind(), GuessOutcomeKind::Won);
/// assert_eq!(session.current_player_total_points(), 160);
/// ```
#[derive(Debug)]
pub struct GameSession<R: Rng = StdRng> {
    lexicon: Lexicon,
    rng: R,
    player: Player,
    current: Option<MatchEngine>,
    last_score: u32,
}

impl<R: Rng> GameSession<R> {
    pub const fn new(lexicon: Lexicon, player: Player, rng: R) -> Self {
        Self {
            lexicon,
            rng,
            player,
            current: None,
            last_score: 0,
        }
    }

    /// Pick a word and begin a match
    pub fn start(&mut self) -> MatchSnapshot {
        let entry = self.lexicon.pick_random(&mut self.rng);
        info!(
            player = self.player.name(),
            letters = entry.word().len(),
            "match started"
        );

        let engine = MatchEngine::new(entry);
        let snapshot = engine.snapshot();
        self.current = Some(engine);
        snapshot
    }

    /// Freeze the finished match's score and begin a new match
    ///
    /// A match abandoned while still in progress earns nothing and does not replace
    /// the frozen score.
    pub fn reset(&mut self) -> MatchSnapshot {
        if let Some(engine) = &self.current {
            if engine.outcome().is_terminal() {
                self.last_score = engine.score();
            } else {
                info!("match abandoned");
            }
        }
        self.start()
    }

    /// Evaluate one guess against the live match
    ///
    /// # Errors
    /// Returns `MatchError::NotStarted` before [`start`](Self::start) and
    /// `MatchError::Finished` once the match is over.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, MatchError> {
        let Some(engine) = self.current.as_mut() else {
            warn!("guess submitted before a match was started");
            return Err(MatchError::NotStarted);
        };

        let outcome = engine.evaluate(raw)?;
        if outcome.kind() == GuessOutcomeKind::Won {
            self.player.add_points(engine.score());
        }

        Ok(GuessReport {
            outcome,
            snapshot: engine.snapshot(),
        })
    }

    /// Current state of the live match, if any
    #[must_use]
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        self.current.as_ref().map(MatchEngine::snapshot)
    }

    /// The live match, if any
    #[must_use]
    pub const fn current_match(&self) -> Option<&MatchEngine> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub const fn current_player_total_points(&self) -> u32 {
        self.player.total_points()
    }

    /// Score of the most recently finished match
    ///
    /// While the live match is over this is its own score; otherwise it is the score
    /// frozen by the last [`reset`](Self::reset).
    #[must_use]
    pub fn last_match_score(&self) -> u32 {
        match &self.current {
            Some(engine) if engine.outcome().is_terminal() => engine.score(),
            _ => self.last_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchOutcome;
    use rand::SeedableRng;

    fn session(pairs: &[(&str, &str)]) -> GameSession {
        let lexicon = Lexicon::from_pairs(pairs).unwrap();
        GameSession::new(lexicon, Player::new("Davis"), StdRng::seed_from_u64(3))
    }

    #[test]
    fn guess_before_start_is_rejected() {
        let mut session = session(&[("bahia", "h")]);
        assert_eq!(session.submit_guess("b"), Err(MatchError::NotStarted));
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn start_gives_hidden_word_and_hint() {
        let mut session = session(&[("ceara", "cordel - baião de dois - forró")]);
        let snapshot = session.start();
        assert_eq!(snapshot.masked_word.len(), 5);
        assert_eq!(snapshot.hint, "cordel - baião de dois - forró");
        assert_eq!(snapshot.tries.current(), 1);
        assert_eq!(snapshot.tries.remaining(), 6);
    }

    #[test]
    fn report_carries_snapshot() {
        let mut session = session(&[("bahia", "h")]);
        session.start();
        let report = session.submit_guess("a").unwrap();
        assert_eq!(report.outcome.kind(), GuessOutcomeKind::CorrectLetter);
        assert_eq!(report.snapshot.masked_word.to_string(), "_ A _ _ A");
        assert_eq!(Some(report.snapshot), session.snapshot());
    }

    #[test]
    fn only_wins_award_points() {
        let mut session = session(&[("bahia", "h")]);
        session.start();
        for raw in ["z", "x", "q", "w", "y", "k"] {
            session.submit_guess(raw).unwrap();
        }
        assert_eq!(session.snapshot().unwrap().outcome, MatchOutcome::Lost);
        assert_eq!(session.current_player_total_points(), 0);
        assert_eq!(session.last_match_score(), 0);
    }

    #[test]
    fn finished_match_rejects_guesses() {
        let mut session = session(&[("bahia", "h")]);
        session.start();
        session.submit_guess("bahia").unwrap();
        assert_eq!(
            session.submit_guess("b"),
            Err(MatchError::Finished(MatchOutcome::Won))
        );
        assert_eq!(session.current_player_total_points(), 160);
    }

    #[test]
    fn reset_freezes_score_and_restores_tries() {
        let mut session = session(&[("bahia", "h")]);
        session.start();
        session.submit_guess("z").unwrap();
        session.submit_guess("bahia").unwrap();
        let won_score = session.last_match_score();
        // no letters, 5 letters long, 5 tries left, 5 letters never revealed
        assert_eq!(won_score, 25 + 50 + 75);

        let snapshot = session.reset();
        assert_eq!(snapshot.tries.remaining(), 6);
        assert_eq!(snapshot.tries.current(), 1);
        assert_eq!(snapshot.letters_guessed, 0);
        assert_eq!(snapshot.outcome, MatchOutcome::InProgress);
        assert_eq!(session.last_match_score(), won_score);
        assert_eq!(session.current_player_total_points(), won_score);
    }

    #[test]
    fn abandoned_match_keeps_previous_frozen_score() {
        let mut session = session(&[("bahia", "h")]);
        session.start();
        session.submit_guess("bahia").unwrap();
        session.reset();
        session.submit_guess("b").unwrap();
        session.reset();

        assert_eq!(session.last_match_score(), 160);
        assert_eq!(session.current_player_total_points(), 160);
    }
}
