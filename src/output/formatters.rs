//! Formatting utilities for terminal output

use crate::core::{Clue, Code, Word};
use colored::Colorize;

/// Render a guess as coloured tiles, one per letter
///
/// Exact letters get a green tile, partial ones yellow, the rest grey.
#[must_use]
pub fn colorize_guess(guess: &Word, clue: &Clue) -> String {
    guess
        .text()
        .chars()
        .zip(clue.codes())
        .map(|(letter, &code)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match code {
                Code::Exact => tile.black().on_green().bold().to_string(),
                Code::Partial => tile.black().on_yellow().bold().to_string(),
                Code::NoMatch => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
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

/// Join words for a compact listing, upper-cased
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let mut shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.text().to_uppercase())
        .collect();
    if words.len() > limit {
        shown.push(format!("… +{}", words.len() - limit));
    }
    shown.join(" ")
}
