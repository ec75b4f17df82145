//! Formatting utilities for terminal output

use crate::core::{FeedbackCode, Mark, Word};
use colored::Colorize;

/// Guess letters colored by their feedback, upper case
#[must_use]
pub fn colored_guess(word: &Word, feedback: FeedbackCode) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let cell = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            match mark {
                Mark::Correct => cell.black().on_green().bold().to_string(),
                Mark::WrongSpot => cell.black().on_yellow().bold().to_string(),
                Mark::Unused => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the candidate set a guess is expected to remove
#[must_use]
pub fn reduction_bar(expected_remaining: f64, total: usize, width: usize) -> String {
    create_progress_bar(total as f64 - expected_remaining, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░".repeat(10));
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "█".repeat(10));
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn reduction_bar_fills_with_information() {
        assert_eq!(reduction_bar(1.0, 5, 5), "████░");
        assert_eq!(reduction_bar(5.0, 5, 5), "░░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let feedback = FeedbackCode::parse("wccuc").unwrap();
        assert_eq!(colored_guess(&word, feedback), " C  R  A  N  E ");
    }
}
