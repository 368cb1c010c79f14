//! Submission outcomes
//!
//! The validation pipeline produces exactly one `SubmissionResult` per attempt.

use super::RootWord;
use std::fmt;

/// Reason a submission was turned down
///
/// Variants are listed in the order the pipeline checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Fewer than three letters
    TooShort,
    /// Identical to the root word
    SameAsRoot,
    /// Already accepted earlier in the round
    NotOriginal,
    /// Needs letters the root word does not have (or not enough of them)
    NotPossible,
    /// Not recognized by the dictionary
    NotReal,
}

impl Rejection {
    /// Short headline suitable for an alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::SameAsRoot => "Word identical to root word",
            Self::NotOriginal => "Word not original",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not real",
        }
    }

    /// Longer explanation for the player
    #[must_use]
    pub fn message(self, root: &RootWord) -> String {
        match self {
            Self::TooShort => "Enter words at least 3 letters long".to_string(),
            Self::SameAsRoot => "Enter a unique word".to_string(),
            Self::NotOriginal => "Enter a new word".to_string(),
            Self::NotPossible => format!("You can't spell that word from {root}"),
            Self::NotReal => "Enter a real word".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of validating one candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The normalized word was added to the round
    Accepted(String),
    /// The word failed a check; round state is unchanged
    Rejected(Rejection),
}

impl SubmissionResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}
