//! Root word representation and submission normalization
//!
//! A `RootWord` stores the round's word along with a count of each letter, so a
//! candidate can be checked for composability without rescanning the root.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Minimum number of letters in an acceptable submission
pub const MIN_WORD_LENGTH: usize = 3;

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Root word must contain at least one letter")]
    Empty,
}

/// Normalize a raw submission: lowercase, then trim surrounding whitespace.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silent\n"), "silent");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Length of a word in letters (Unicode scalar values, not bytes)
#[inline]
#[must_use]
pub fn letter_len(word: &str) -> usize {
    word.chars().count()
}

/// The word whose letters constrain every submission in a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    letter_counts: FxHashMap<char, usize>,
}

impl RootWord {
    /// Create a root word, normalizing it the same way submissions are normalized
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing remains after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Listen").unwrap();
    /// assert_eq!(root.text(), "listen");
    /// assert!(root.can_spell("silent"));
    /// assert!(!root.can_spell("tinsels"));
    ///
    /// assert!(RootWord::new("  ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letter_counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in text.chars() {
            *letter_counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the root word
    #[must_use]
    pub fn letter_count(&self) -> usize {
        letter_len(&self.text)
    }

    #[cfg(test)]
    fn count_of(&self, letter: char) -> usize {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether `candidate` can be spelled from this word's letters.
    ///
    /// Each letter of the root may be used at most as many times as it appears,
    /// so "aab" fits inside "aabb" but "aaa" does not.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.letter_counts.clone();

        candidate.chars().all(|ch| match remaining.get_mut(&ch) {
            Some(available) if *available > 0 => {
                *available -= 1;
                true
            }
            _ => false,
        })
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
