//! Guess evaluation
//!
//! Compares a guess against the secret and classifies the result.

use std::cmp::Ordering;
use std::fmt;

/// Outcome of comparing a guess with the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// Guess is below the secret
    TooLow,
    /// Guess is above the secret
    TooHigh,
    /// Guess equals the secret
    Correct,
}

impl Evaluation {
    /// Check if this evaluation ends the game
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow => write!(f, "too low"),
            Self::TooHigh => write!(f, "too high"),
            Self::Correct => write!(f, "correct"),
        }
    }
}

/// Evaluate `guess` against `secret`
///
/// # Examples
/// ```
/// use guessing_game::core::{Evaluation, evaluate};
///
/// assert_eq!(evaluate(3, 7), Evaluation::TooLow);
/// assert_eq!(evaluate(9, 7), Evaluation::TooHigh);
/// assert_eq!(evaluate(7, 7), Evaluation::Correct);
/// ```
#[inline]
#[must_use]
pub fn evaluate(guess: u32, secret: u32) -> Evaluation {
    match guess.cmp(&secret) {
        Ordering::Less => Evaluation::TooLow,
        Ordering::Greater => Evaluation::TooHigh,
        Ordering::Equal => Evaluation::Correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_equal_is_correct() {
        assert_eq!(evaluate(1, 1), Evaluation::Correct);
        assert_eq!(evaluate(0, 0), Evaluation::Correct);
        assert_eq!(evaluate(u32::MAX, u32::MAX), Evaluation::Correct);
    }

    #[test]
    fn evaluate_below_is_too_low() {
        assert_eq!(evaluate(9, 10), Evaluation::TooLow);
        assert_eq!(evaluate(0, 100), Evaluation::TooLow);
    }

    #[test]
    fn evaluate_above_is_too_high() {
        assert_eq!(evaluate(11, 10), Evaluation::TooHigh);
        assert_eq!(evaluate(500, 100), Evaluation::TooHigh);
    }

    #[test]
    fn only_correct_ends_game() {
        assert!(Evaluation::Correct.is_correct());
        assert!(!Evaluation::TooLow.is_correct());
        assert!(!Evaluation::TooHigh.is_correct());
    }

    #[test]
    fn display_matches_feedback_wording() {
        assert_eq!(Evaluation::TooLow.to_string(), "too low");
        assert_eq!(Evaluation::TooHigh.to_string(), "too high");
        assert_eq!(Evaluation::Correct.to_string(), "correct");
    }
}
