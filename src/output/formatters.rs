//! Formatting utilities for terminal output

use crate::core::letter_len;

/// Format a word with its letter count, e.g. `(6) silent`
#[must_use]
pub fn word_with_count(word: &str) -> String {
    format!("({}) {word}", letter_len(word))
}

/// Space out the letters of a root word for display, e.g. `L I S T E N`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralize "word" for a count
#[must_use]
pub const fn words_label(count: usize) -> &'static str {
    if count == 1 { "word" } else { "words" }
}
