//! Masked word: the player's view of the secret word
//!
//! Each slot is either hidden (`_`) or shows the revealed letter in uppercase.

use std::fmt;

/// Placeholder for a letter that has not been revealed yet
pub const HIDDEN: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedWord {
    slots: Vec<Option<char>>,
}

impl MaskedWord {
    /// A fully hidden word of `len` letters
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Reveal `letter` at every position in `positions`
    ///
    /// Returns the number of slots that were hidden before this call. Positions past
    /// the end of the word are ignored.
    pub fn reveal(&mut self, positions: &[usize], letter: char) -> usize {
        let mut newly_revealed = 0;
        for &position in positions {
            if let Some(slot) = self.slots.get_mut(position)
                && slot.is_none()
            {
                *slot = Some(letter);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    /// Whether the slot at `position` has been revealed
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.slots.get(position).is_some_and(Option::is_some)
    }

    /// Number of revealed slots
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True once every slot is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Display form: `_` for hidden slots, the uppercase letter otherwise
    #[must_use]
    pub fn to_chars(&self) -> Vec<char> {
        self.slots
            .iter()
            .map(|slot| slot.map_or(HIDDEN, to_upper))
            .collect()
    }
}

fn to_upper(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

impl fmt::Display for MaskedWord {
    /// Slots separated by single spaces, e.g. `B _ _ _ A`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.to_chars().into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_word_shows_only_placeholders() {
        let masked = MaskedWord::hidden(5);
        assert_eq!(masked.to_chars(), vec!['_'; 5]);
        assert_eq!(masked.revealed_count(), 0);
        assert!(!masked.is_complete());
        assert_eq!(masked.len(), 5);
    }

    #[test]
    fn reveal_uppercases_and_counts_new_slots() {
        let mut masked = MaskedWord::hidden(5);
        assert_eq!(masked.reveal(&[1, 4], 'a'), 2);
        assert_eq!(masked.to_chars(), vec!['_', 'A', '_', '_', 'A']);
        assert!(masked.is_revealed(1));
        assert!(!masked.is_revealed(0));
    }

    #[test]
    fn reveal_twice_adds_nothing() {
        let mut masked = MaskedWord::hidden(3);
        assert_eq!(masked.reveal(&[0], 'x'), 1);
        assert_eq!(masked.reveal(&[0], 'x'), 0);
        assert_eq!(masked.revealed_count(), 1);
    }

    #[test]
    fn reveal_ignores_out_of_range_positions() {
        let mut masked = MaskedWord::hidden(2);
        assert_eq!(masked.reveal(&[1, 7], 'q'), 1);
        assert!(!masked.is_revealed(7));
    }

    #[test]
    fn complete_after_all_revealed() {
        let mut masked = MaskedWord::hidden(2);
        masked.reveal(&[0], 'o');
        masked.reveal(&[1], 'k');
        assert!(masked.is_complete());
    }

    #[test]
    fn display_joins_with_spaces() {
        let mut masked = MaskedWord::hidden(5);
        masked.reveal(&[0], 'b');
        assert_eq!(masked.to_string(), "B _ _ _ _");
    }
}
