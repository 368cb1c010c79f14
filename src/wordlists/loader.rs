//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::error::ResourceError;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. An empty file
/// yields an empty list, which the game reports later as an empty pool.
///
/// # Errors
///
/// Returns `ResourceError::Missing` if the file does not exist and
/// `ResourceError::Unreadable` if it cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ResourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ResourceError::from_io(path, &e))?;

    let words = words_from_text(&content);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word file");

    Ok(words)
}

/// Split newline-separated text into normalized words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}
