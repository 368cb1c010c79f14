//! Real-word validation
//!
//! The game only needs a yes/no answer to "is this a real word", so the
//! dictionary is a single-method trait. `WordListDictionary` is the bundled
//! implementation; a plain `HashSet<String>` also works, which keeps tests free
//! of any particular word list.

use crate::error::ResourceError;
use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::hash::BuildHasher;
use std::ops::Range;
use std::path::Path;

/// Language of the bundled dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a word is recognized in the dictionary's language
pub trait Dictionary {
    /// `true` if `word` is a real word
    fn is_real_word(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str) -> bool {
        (**self).is_real_word(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_real_word(&self, word: &str) -> bool {
        (**self).is_real_word(word)
    }
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    fn is_real_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Dictionary backed by an in-memory set of lowercase words
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are trimmed and lowercased; blanks are ignored.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dict = WordListDictionary::bundled();
    /// assert!(dict.is_real_word("silent"));
    /// assert!(!dict.is_real_word("tlesin"));
    /// ```
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a dictionary file with one word per line
    ///
    /// # Errors
    ///
    /// Returns a `ResourceError` if the file is missing or not valid text.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        Ok(Self::from_words(loader::load_from_file(path)?))
    }

    /// Tag of the language this dictionary checks against
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Byte range of the first unrecognized word in `text`
    ///
    /// `text` is split into runs of letters (apostrophes count as letters) and
    /// each run is looked up. Returns `None` when every run is known, including
    /// when `text` holds no letters at all.
    #[must_use]
    pub fn misspelled_range(&self, text: &str) -> Option<Range<usize>> {
        let mut start = None;

        for (i, ch) in text.char_indices() {
            let in_word = ch.is_alphabetic() || ch == '\'';
            match (start, in_word) {
                (None, true) => start = Some(i),
                (Some(s), false) => {
                    if !self.contains(&text[s..i]) {
                        return Some(s..i);
                    }
                    start = None;
                }
                _ => {}
            }
        }

        start
            .filter(|&s| !self.contains(&text[s..]))
            .map(|s| s..text.len())
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str) -> bool {
        self.misspelled_range(word).is_none()
    }
}
