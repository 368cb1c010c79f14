//! Core domain types for Word Scramble
//!
//! Pure value types with no I/O: the root word, normalization, and the
//! outcome of a submission.

mod outcome;
mod word;

pub use outcome::{Rejection, SubmissionResult};
pub use word::{MIN_WORD_LENGTH, RootWord, WordError, letter_len, normalize};
