//! Bisection player
//!
//! Keeps the interval of secrets still consistent with the feedback so far
//! and always guesses its midpoint, which needs at most
//! `ceil(log2(size + 1))` guesses for any secret in range.

use crate::core::{Evaluation, SecretRange, evaluate};

/// Player that halves the candidate interval after every guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bisector {
    /// Inclusive `(low, high)`; `None` once the feedback is contradictory
    interval: Option<(u32, u32)>,
}

impl Bisector {
    #[must_use]
    pub const fn new(range: SecretRange) -> Self {
        Self {
            interval: Some((range.min(), range.max())),
        }
    }

    /// Current inclusive candidate interval
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Option<(u32, u32)> {
        self.interval
    }

    /// Number of secrets still possible
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        match self.interval {
            Some((low, high)) => high as u64 - low as u64 + 1,
            None => 0,
        }
    }

    /// Midpoint of the candidate interval, or `None` if nothing remains
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Evaluation, SecretRange};
    /// use guessing_game::solver::Bisector;
    ///
    /// let mut player = Bisector::new(SecretRange::new(1, 100).unwrap());
    /// assert_eq!(player.next_guess(), Some(50));
    /// player.observe(50, Evaluation::TooLow);
    /// assert_eq!(player.next_guess(), Some(75));
    /// ```
    #[must_use]
    pub const fn next_guess(&self) -> Option<u32> {
        match self.interval {
            Some((low, high)) => Some(low + (high - low) / 2),
            None => None,
        }
    }

    /// Narrow the interval using the feedback for `guess`
    pub fn observe(&mut self, guess: u32, evaluation: Evaluation) {
        let Some((low, high)) = self.interval else {
            return;
        };

        self.interval = match evaluation {
            Evaluation::Correct => Some((guess, guess)),
            Evaluation::TooLow => guess
                .checked_add(1)
                .map(|next| (next.max(low), high))
                .filter(|&(l, h)| l <= h),
            Evaluation::TooHigh => guess
                .checked_sub(1)
                .map(|prev| (low, prev.min(high)))
                .filter(|&(l, h)| l <= h),
        };
    }
}

/// Number of guesses a bisecting player needs to find `secret`
///
/// Returns `None` if `secret` lies outside `range`.
#[must_use]
pub fn count_guesses(secret: u32, range: SecretRange) -> Option<usize> {
    if !range.contains(secret) {
        return None;
    }

    let mut player = Bisector::new(range);
    let mut guesses = 0;
    while let Some(guess) = player.next_guess() {
        guesses += 1;
        let evaluation = evaluate(guess, secret);
        if evaluation.is_correct() {
            return Some(guesses);
        }
        player.observe(guess, evaluation);
    }

    None
}
