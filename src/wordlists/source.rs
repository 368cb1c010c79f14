//! The word source: root-word pool plus dictionary

use super::{START_WORDS, loader};
use crate::dictionary::{Dictionary, WordListDictionary};
use crate::error::ResourceError;
use std::fmt;
use std::path::PathBuf;

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    /// Compiled into the binary
    Bundled,
    /// Read from a file at startup
    File(PathBuf),
}

impl ResourceLocation {
    /// Parse a command-line value: `bundled` selects the embedded list,
    /// anything else is taken as a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "bundled" => Self::Bundled,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Supplies candidate root words and answers real-word queries
#[derive(Debug, Clone)]
pub struct WordSource {
    pool: Vec<String>,
    dictionary: WordListDictionary,
}

impl WordSource {
    #[must_use]
    pub const fn new(pool: Vec<String>, dictionary: WordListDictionary) -> Self {
        Self { pool, dictionary }
    }

    /// Word pool and dictionary compiled into the binary
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(
            loader::words_from_slice(START_WORDS),
            WordListDictionary::bundled(),
        )
    }

    /// Load the pool and dictionary from their configured locations
    ///
    /// # Errors
    ///
    /// Returns a `ResourceError` if either file is missing or unreadable.
    pub fn load(
        pool: &ResourceLocation,
        dictionary: &ResourceLocation,
    ) -> Result<Self, ResourceError> {
        let pool_words = Self::load_word_pool(pool)?;

        let dictionary = match dictionary {
            ResourceLocation::Bundled => WordListDictionary::bundled(),
            ResourceLocation::File(path) => WordListDictionary::load_from_file(path)?,
        };

        tracing::info!(
            pool = %pool,
            pool_size = pool_words.len(),
            dictionary_size = dictionary.len(),
            language = dictionary.language(),
            "word source loaded"
        );

        Ok(Self::new(pool_words, dictionary))
    }

    /// Read the candidate root words, one per line
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Missing` or `ResourceError::Unreadable` for a
    /// file location; the bundled pool cannot fail.
    pub fn load_word_pool(location: &ResourceLocation) -> Result<Vec<String>, ResourceError> {
        match location {
            ResourceLocation::Bundled => Ok(loader::words_from_slice(START_WORDS)),
            ResourceLocation::File(path) => loader::load_from_file(path),
        }
    }

    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub const fn dictionary(&self) -> &WordListDictionary {
        &self.dictionary
    }

    /// `true` if the dictionary recognizes `word`
    #[must_use]
    pub fn is_real_word(&self, word: &str) -> bool {
        self.dictionary.is_real_word(word)
    }
}
