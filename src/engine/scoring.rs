//! Points awarded for a won match
//!
//! `letters_guessed * 5 + word_length * 5 + tries_remaining * 10
//!  + (word_length - letters_guessed) * 15`
//!
//! The last term pays for letters that were never revealed one by one, so guessing
//! the whole word early scores more than spelling it out.

const POINTS_PER_LETTER_GUESSED: u32 = 5;
const POINTS_PER_WORD_LETTER: u32 = 5;
const POINTS_PER_TRY_LEFT: u32 = 10;
const POINTS_PER_LETTER_LEFT: u32 = 15;

/// Score for a won match
///
/// # Examples
/// ```
/// use hangman::engine::score;
///
/// // "ceara" spelled out letter by letter without a miss
/// assert_eq!(score(5, 5, 6), 110);
/// // "ceara" guessed outright on the first try
/// assert_eq!(score(0, 5, 6), 160);
/// ```
#[must_use]
pub fn score(letters_guessed: usize, word_length: usize, tries_remaining: u32) -> u32 {
    let letters_guessed = letters_guessed as u32;
    let word_length = word_length as u32;
    debug_assert!(letters_guessed <= word_length);

    letters_guessed * POINTS_PER_LETTER_GUESSED
        + word_length * POINTS_PER_WORD_LETTER
        + tries_remaining * POINTS_PER_TRY_LEFT
        + word_length.saturating_sub(letters_guessed) * POINTS_PER_LETTER_LEFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_letters_revealed_no_misses() {
        // 25 + 25 + 60 + 0
        assert_eq!(score(5, 5, 6), 110);
    }

    #[test]
    fn whole_word_first_try() {
        // 0 + 25 + 60 + 75
        assert_eq!(score(0, 5, 6), 160);
    }

    #[test]
    fn partial_reveal_then_word() {
        // pernambuco: 3 letters shown, 4 misses
        // 15 + 50 + 20 + 105
        assert_eq!(score(3, 10, 2), 190);
    }

    #[test]
    fn last_try_win() {
        // 35 + 35 + 10 + 0
        assert_eq!(score(7, 7, 1), 80);
    }

    #[test]
    fn outright_guess_beats_spelling_out() {
        for length in 1..12 {
            assert!(score(0, length, 6) > score(length, length, 6));
        }
    }
}
