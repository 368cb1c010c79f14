//! Check command - run words through the pipeline against a fixed root word

use crate::core::SubmissionResult;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::GameSession;

/// Outcome of one submitted word; `None` means the submission was blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedWord {
    pub input: String,
    pub result: Option<SubmissionResult>,
}

/// Result of checking a batch of words against one root word
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub root: String,
    pub checked: Vec<CheckedWord>,
    pub used_words: Vec<String>,
    pub score: usize,
}

impl CheckReport {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.checked
            .iter()
            .filter(|c| c.result.as_ref().is_some_and(SubmissionResult::is_accepted))
            .count()
    }
}

/// Play `words` in order in a single round rooted at `root`
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if `root` is blank.
pub fn check_words<D: Dictionary>(
    root: &str,
    words: &[String],
    dictionary: D,
) -> Result<CheckReport, GameError> {
    let mut session = GameSession::seeded(dictionary, 0);
    let root = session.start_round(&[root])?.text().to_string();

    let mut checked = Vec::with_capacity(words.len());
    for input in words {
        let result = session.submit_word(input)?;
        checked.push(CheckedWord {
            input: input.clone(),
            result,
        });
    }

    Ok(CheckReport {
        root,
        checked,
        used_words: session.used_words().to_vec(),
        score: session.score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListDictionary;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn check_listen_scenarios() {
        let report = check_words(
            "listen",
            &words(&["silent", "listen", "sit", "silent", "zebra", "tlesin"]),
            WordListDictionary::bundled(),
        )
        .unwrap();

        let results: Vec<_> = report.checked.iter().map(|c| c.result.clone()).collect();
        assert_eq!(
            results,
            vec![
                Some(SubmissionResult::Accepted("silent".to_string())),
                Some(SubmissionResult::Rejected(Rejection::SameAsRoot)),
                Some(SubmissionResult::Accepted("sit".to_string())),
                Some(SubmissionResult::Rejected(Rejection::NotOriginal)),
                Some(SubmissionResult::Rejected(Rejection::NotPossible)),
                Some(SubmissionResult::Rejected(Rejection::NotReal)),
            ]
        );
        assert_eq!(report.score, 9);
        assert_eq!(report.used_words, vec!["sit", "silent"]);
        assert_eq!(report.accepted_count(), 2);
    }

    #[test]
    fn check_records_blank_input() {
        let report = check_words("listen", &words(&["  "]), WordListDictionary::bundled()).unwrap();

        assert_eq!(report.checked.len(), 1);
        assert_eq!(report.checked[0].result, None);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn check_blank_root_fails() {
        let result = check_words("   ", &words(&["sit"]), WordListDictionary::bundled());
        assert!(matches!(result, Err(GameError::EmptyPool)));
    }

    #[test]
    fn check_root_is_normalized() {
        let report = check_words("LISTEN", &[], WordListDictionary::bundled()).unwrap();
        assert_eq!(report.root, "listen");
        assert!(report.checked.is_empty());
    }
}
