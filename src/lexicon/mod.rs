//! Word pool for Hangman
//!
//! A fixed, non-empty pool of (word, hint) pairs. The default pool is compiled into
//! the binary; tests build their own pools with [`Lexicon::from_pairs`].

mod embedded;

pub use embedded::{LEXICON, LEXICON_COUNT};

use crate::core::{SecretWord, WordError};
use rand::Rng;
use std::fmt;

/// One candidate secret word and its hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    word: SecretWord,
    hint: String,
}

impl LexiconEntry {
    /// Create an entry, validating the word
    ///
    /// # Errors
    /// Returns `WordError` if `word` is not a valid secret word.
    pub fn new(word: &str, hint: impl Into<String>) -> Result<Self, WordError> {
        Ok(Self {
            word: SecretWord::new(word)?,
            hint: hint.into(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

/// Error type for pools that cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    Empty,
    InvalidEntry { index: usize, source: WordError },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word pool must contain at least one entry"),
            Self::InvalidEntry { index, source } => {
                write!(f, "Invalid word pool entry #{index}: {source}")
            }
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidEntry { source, .. } => Some(source),
        }
    }
}

/// A non-empty pool of lexicon entries
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// The pool compiled into the binary
    ///
    /// # Errors
    /// Returns `LexiconError` if the embedded data is empty or malformed.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::from_pairs(LEXICON)
    }

    /// Build a pool from `(word, hint)` pairs
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` for an empty slice and
    /// `LexiconError::InvalidEntry` for the first word that fails validation.
    ///
    /// # Examples
    /// ```
    /// use hangman::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_pairs(&[("bahia", "Axé - acarajé - carnaval")]).unwrap();
    /// assert_eq!(lexicon.len(), 1);
    ///
    /// assert!(Lexicon::from_pairs(&[]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, LexiconError> {
        if pairs.is_empty() {
            return Err(LexiconError::Empty);
        }

        let entries = pairs
            .iter()
            .enumerate()
            .map(|(index, &(word, hint))| {
                LexiconEntry::new(word, hint)
                    .map_err(|source| LexiconError::InvalidEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Pick one entry uniformly at random
    ///
    /// The entry is returned by value so the match owns its own copy.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> LexiconEntry {
        let index = rng.random_range(0..self.entries.len());
        self.entries[index].clone()
    }

    #[must_use]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty pools
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(LEXICON.len(), LEXICON_COUNT);
    }

    #[test]
    fn embedded_pool_is_valid() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(lexicon.len(), LEXICON_COUNT);
        assert!(!lexicon.is_empty());

        for entry in lexicon.entries() {
            assert!(
                entry.word().chars().iter().all(|c| c.is_lowercase()),
                "Word '{}' contains non-lowercase chars",
                entry.word()
            );
            assert!(
                !entry.hint().is_empty(),
                "Word '{}' has no hint",
                entry.word()
            );
        }
    }

    #[test]
    fn embedded_pool_contains_ceara() {
        let lexicon = Lexicon::embedded().unwrap();
        let ceara = lexicon
            .entries()
            .iter()
            .find(|e| e.word().text() == "ceara")
            .unwrap();
        assert_eq!(ceara.hint(), "cordel - baião de dois - forró");
    }

    #[test]
    fn from_pairs_rejects_empty_pool() {
        assert!(matches!(Lexicon::from_pairs(&[]), Err(LexiconError::Empty)));
    }

    #[test]
    fn from_pairs_reports_bad_entry() {
        let result = Lexicon::from_pairs(&[("bahia", "ok"), ("", "no word")]);
        assert_eq!(
            result.unwrap_err(),
            LexiconError::InvalidEntry {
                index: 1,
                source: WordError::Empty
            }
        );
    }

    #[test]
    fn pick_random_single_entry_is_deterministic() {
        let lexicon = Lexicon::from_pairs(&[("sergipe", "caju - mangue - cangaço")]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(lexicon.pick_random(&mut rng).word().text(), "sergipe");
        }
    }

    #[test]
    fn pick_random_is_reproducible_with_seed() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(lexicon.pick_random(&mut a), lexicon.pick_random(&mut b));
        }
    }

    #[test]
    fn pick_random_reaches_every_entry() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<String> = (0..500)
            .map(|_| lexicon.pick_random(&mut rng).word().text().to_string())
            .collect();
        assert_eq!(seen.len(), lexicon.len());
    }
}
