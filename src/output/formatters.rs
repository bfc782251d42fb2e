//! Formatting utilities for terminal output

use crate::core::Evaluation;
use colored::Colorize;

/// Feedback line written after a valid guess
#[must_use]
pub fn feedback_message(guess: u32, evaluation: Evaluation) -> String {
    match evaluation {
        Evaluation::TooLow => format!("{guess} is {}!", "too low".yellow()),
        Evaluation::TooHigh => format!("{guess} is {}!", "too high".magenta()),
        Evaluation::Correct => format!("{} {guess} was the secret.", "Correct!".green().bold()),
    }
}

/// Explanation written when a line does not parse as a guess
#[must_use]
pub fn invalid_input_message(input: &str) -> String {
    format!(
        "{} '{input}' is not a guess. Enter a whole number from 0 to {}, or 'quit' to stop playing.",
        "Invalid input:".red(),
        u32::MAX
    )
}

/// Explanation written when a menu selection matches no option
#[must_use]
pub fn invalid_choice_message(input: &str, options: usize) -> String {
    format!(
        "{} '{input}' is not an option. Enter a number from 1 to {options}.",
        "Invalid choice!".red()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_names_direction() {
        assert!(feedback_message(3, Evaluation::TooLow).contains("too low"));
        assert!(feedback_message(3, Evaluation::TooHigh).contains("too high"));
        assert!(feedback_message(3, Evaluation::Correct).contains("Correct!"));
    }

    #[test]
    fn feedback_includes_guess() {
        assert!(feedback_message(42, Evaluation::TooLow).starts_with("42 is "));
    }

    #[test]
    fn invalid_messages_echo_input() {
        let msg = invalid_input_message("abc");
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("'abc'"));

        let msg = invalid_input_message("4294967296");
        assert!(msg.contains("'4294967296' is not a guess"));
        assert!(msg.contains("from 0 to 4294967295"));
        assert!(!msg.contains("not a whole number"));

        let msg = invalid_choice_message("9", 3);
        assert!(msg.contains("Invalid choice!"));
        assert!(msg.contains("1 to 3"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
