//! Bounded counter of wrong guesses allowed in a match

/// Wrong guesses allowed per match
pub const MAX_TRIES: u32 = 6;

/// Try bookkeeping for one match
///
/// Invariant: `remaining == max - (current - 1)` while tries are left. `current` is
/// the ordinal of the try the player is about to make, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tries {
    current: u32,
    max: u32,
    remaining: u32,
}

impl Tries {
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self {
            current: 1,
            max,
            remaining: max,
        }
    }

    /// Spend one try on a wrong guess
    ///
    /// Does nothing once the tries are exhausted.
    pub const fn consume(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.current += 1;
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Default for Tries {
    fn default() -> Self {
        Self::new(MAX_TRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tries() {
        let tries = Tries::default();
        assert_eq!(tries.current(), 1);
        assert_eq!(tries.max(), 6);
        assert_eq!(tries.remaining(), 6);
        assert!(!tries.is_exhausted());
    }

    #[test]
    fn consume_keeps_invariant() {
        let mut tries = Tries::default();
        for spent in 1..=6 {
            tries.consume();
            assert_eq!(tries.remaining(), 6 - spent);
            assert_eq!(tries.remaining(), tries.max() - (tries.current() - 1));
        }
        assert!(tries.is_exhausted());
    }

    #[test]
    fn consume_never_goes_below_zero() {
        let mut tries = Tries::new(1);
        tries.consume();
        tries.consume();
        assert_eq!(tries.remaining(), 0);
        assert_eq!(tries.current(), 2);
    }
}
