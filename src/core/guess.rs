//! Guess classification and validation
//!
//! Pure functions that decide what kind of guess the player typed and where a
//! letter lands inside the secret word. Comparisons are always case-insensitive.

use super::SecretWord;

/// A validated, lowercased guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A single letter
    Letter(char),
    /// Anything longer than one character, compared against the whole word
    Word(String),
}

impl Guess {
    /// Classify a raw guess
    ///
    /// A trimmed input of one character is a letter guess, anything longer is a word
    /// guess. Returns `None` for input that fails [`is_valid`].
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::classify(" A "), Some(Guess::Letter('a')));
    /// assert_eq!(Guess::classify("Bahia"), Some(Guess::Word("bahia".to_string())));
    /// assert_eq!(Guess::classify("   "), None);
    /// ```
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        if !is_valid(raw) {
            return None;
        }

        let normalized = raw.trim().to_lowercase();
        let mut chars = normalized.chars();

        match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(Self::Letter(letter)),
            _ => Some(Self::Word(normalized)),
        }
    }

    /// Whether this is a single-letter guess
    #[inline]
    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

/// True iff the trimmed input is non-empty
#[inline]
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// Positions of `letter` in `word`, in ascending order, ignoring case
///
/// # Examples
/// ```
/// use hangman::core::{SecretWord, match_positions};
///
/// let word = SecretWord::new("ceara").unwrap();
/// assert_eq!(match_positions('A', &word), vec![2, 4]);
/// assert!(match_positions('z', &word).is_empty());
/// ```
#[must_use]
pub fn match_positions(letter: char, word: &SecretWord) -> Vec<usize> {
    letter
        .to_lowercase()
        .next()
        .map(|folded| word.positions_of(folded).to_vec())
        .unwrap_or_default()
}

/// Case-insensitive comparison of a full-word guess with the secret word
#[must_use]
pub fn is_word_correct(word_guess: &str, secret: &SecretWord) -> bool {
    word_guess.trim().to_lowercase() == secret.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_rejects_empty_and_whitespace() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
        assert!(!is_valid("\t\n"));
        assert!(is_valid("a"));
        assert!(is_valid("  a  "));
    }

    #[test]
    fn classify_single_char_is_letter() {
        assert_eq!(Guess::classify("e"), Some(Guess::Letter('e')));
        assert_eq!(Guess::classify("E"), Some(Guess::Letter('e')));
        assert_eq!(Guess::classify("  r\n"), Some(Guess::Letter('r')));
        assert!(Guess::classify("x").unwrap().is_letter());
    }

    #[test]
    fn classify_longer_input_is_word() {
        assert_eq!(
            Guess::classify("SERGIPE"),
            Some(Guess::Word("sergipe".to_string()))
        );
        assert_eq!(Guess::classify("ab"), Some(Guess::Word("ab".to_string())));
        assert!(!Guess::classify("ab").unwrap().is_letter());
    }

    #[test]
    fn classify_counts_chars_not_bytes() {
        assert_eq!(Guess::classify("á"), Some(Guess::Letter('á')));
    }

    #[test]
    fn classify_invalid_is_none() {
        assert_eq!(Guess::classify(""), None);
        assert_eq!(Guess::classify(" \t "), None);
    }

    #[test]
    fn match_positions_finds_every_occurrence() {
        let word = SecretWord::new("pernambuco").unwrap();
        assert_eq!(match_positions('p', &word), vec![0]);
        assert_eq!(match_positions('a', &word), vec![4]);
        assert_eq!(match_positions('n', &word), vec![3]);

        let word = SecretWord::new("alagoas").unwrap();
        assert_eq!(match_positions('a', &word), vec![0, 2, 5]);
    }

    #[test]
    fn match_positions_is_case_insensitive() {
        let word = SecretWord::new("bahia").unwrap();
        assert_eq!(match_positions('B', &word), match_positions('b', &word));
        assert_eq!(match_positions('A', &word), vec![1, 4]);
    }

    #[test]
    fn match_positions_agrees_with_scan() {
        for text in ["alagoas", "bahia", "pernambuco", "sergipe", "ceara"] {
            let word = SecretWord::new(text).unwrap();
            for letter in 'a'..='z' {
                let expected: Vec<usize> = text
                    .chars()
                    .enumerate()
                    .filter(|&(_, c)| c == letter)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(
                    match_positions(letter, &word),
                    expected,
                    "{letter} in {text}"
                );
            }
        }
    }

    #[test]
    fn word_correct_ignores_case_and_padding() {
        let secret = SecretWord::new("sergipe").unwrap();
        assert!(is_word_correct("sergipe", &secret));
        assert!(is_word_correct("SeRgIpE", &secret));
        assert!(is_word_correct(" sergipe ", &secret));
        assert!(!is_word_correct("sergip", &secret));
        assert!(!is_word_correct("bahia", &secret));
    }
}
