//! Formatting utilities for terminal output

use crate::core::{GameRules, Rejection, letter_count};

/// Render an accepted word with its letter count, e.g. `" 5 │ sword"`
#[must_use]
pub fn word_with_badge(word: &str) -> String {
    format!("{:>2} │ {word}", letter_count(word))
}

/// Render a rejection as `"<title>: <message>"`
#[must_use]
pub fn rejection_line(reason: Rejection, root_word: &str, rules: &GameRules) -> String {
    format!("{}: {}", reason.title(), reason.message(root_word, rules))
}

/// Spread a root word's letters for display, e.g. `"R O A D"`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
