//! Formatting utilities for terminal output

use crate::core::{Feedback, Guess, MatchState};
use colored::{ColoredString, Colorize};

/// Render one character as a coloured tile
#[must_use]
pub fn tile(ch: char, state: MatchState) -> ColoredString {
    let text = format!(" {ch} ").bold();
    match state {
        MatchState::Correct => text.black().on_green(),
        MatchState::Present => text.black().on_yellow(),
        MatchState::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn tiles(guess: &Guess, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.states())
        .map(|(&ch, &state)| tile(ch, state).to_string())
        .collect()
}

/// Format a computed value without a trailing `.0` for whole numbers
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_keep_characters_in_order() {
        colored::control::set_override(false);

        let guess = Guess::from_str("12+34+54");
        let feedback: Feedback = "CCCCCCCC".parse().unwrap();
        assert_eq!(tiles(&guess, &feedback), " 1  2  +  3  4  +  5  4 ");
    }

    #[test]
    fn format_whole_and_fractional_values() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(100.5), "100.5");
        assert_eq!(format_value(-3.0), "-3");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
