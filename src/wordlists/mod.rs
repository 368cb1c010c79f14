//! Word lists for Word Scramble
//!
//! Provides the embedded root-word pool and dictionary compiled into the
//! binary, plus loading from files.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{ResourceLocation, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(word.len() >= 6, "Root word '{word}' is too short to play");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<&str> = DICTIONARY.iter().copied().collect();

        for &word in START_WORDS {
            assert!(
                dictionary.contains(&word),
                "Root word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn pool_is_not_empty() {
        assert!(!START_WORDS.is_empty());
        assert!(DICTIONARY.len() > START_WORDS.len());
    }

    #[test]
    fn dictionary_is_full_size() {
        assert!(
            DICTIONARY_COUNT >= 50_000,
            "Bundled dictionary has only {DICTIONARY_COUNT} words"
        );
    }
}
