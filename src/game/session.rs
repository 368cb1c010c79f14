//! Game session: round state and the submission pipeline

use crate::core::{MIN_WORD_LENGTH, Rejection, RootWord, SubmissionResult, letter_len, normalize};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// State of one round: the root word, the words found so far, and the score
#[derive(Debug, Clone, PartialEq, Eq)]
struct Round {
    root: RootWord,
    used_words: Vec<String>,
    score: usize,
}

impl Round {
    fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            score: 0,
        }
    }

    const fn root(&self) -> &RootWord {
        &self.root
    }

    fn used_words(&self) -> &[String] {
        &self.used_words
    }

    const fn score(&self) -> usize {
        self.score
    }

    /// Run the checks in order and stop at the first failure.
    ///
    /// Local checks come before the dictionary lookup.
    fn check<D: Dictionary>(&self, word: &str, dictionary: &D) -> Result<(), Rejection> {
        if letter_len(word) < MIN_WORD_LENGTH {
            return Err(Rejection::TooShort);
        }

        if word == self.root.text() {
            return Err(Rejection::SameAsRoot);
        }

        if self.used_words.iter().any(|used| used == word) {
            return Err(Rejection::NotOriginal);
        }

        if !self.root.can_spell(word) {
            return Err(Rejection::NotPossible);
        }

        if !dictionary.is_real_word(word) {
            return Err(Rejection::NotReal);
        }

        Ok(())
    }

    fn accept(&mut self, word: String) {
        self.score += letter_len(&word);
        self.used_words.insert(0, word);
    }
}

/// Owns the current round and validates submissions against it
///
/// The session starts idle; `start_round` draws a root word and every later
/// call replaces the round wholesale. The random source is a type parameter
/// so tests can seed it.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use word_scramble::core::{Rejection, SubmissionResult};
/// use word_scramble::game::GameSession;
///
/// let dictionary: HashSet<String> = ["silent", "sit"].iter().map(|w| w.to_string()).collect();
/// let mut session = GameSession::seeded(dictionary, 7);
///
/// session.start_round(&["listen"]).unwrap();
/// assert_eq!(
///     session.submit_word("Silent").unwrap(),
///     Some(SubmissionResult::Accepted("silent".to_string()))
/// );
/// assert_eq!(
///     session.submit_word("listen").unwrap(),
///     Some(SubmissionResult::Rejected(Rejection::SameAsRoot))
/// );
/// assert_eq!(session.score(), 6);
/// ```
#[derive(Debug)]
pub struct GameSession<D, R = StdRng> {
    dictionary: D,
    rng: R,
    round: Option<Round>,
    rounds_started: usize,
}

impl<D: Dictionary> GameSession<D, StdRng> {
    /// Create an idle session with an OS-seeded random source
    #[must_use]
    pub fn new(dictionary: D) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Create an idle session whose root-word draws are reproducible
    #[must_use]
    pub fn seeded(dictionary: D, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<D: Dictionary, R: Rng> GameSession<D, R> {
    #[must_use]
    pub const fn with_rng(dictionary: D, rng: R) -> Self {
        Self {
            dictionary,
            rng,
            round: None,
            rounds_started: 0,
        }
    }

    /// Start a new round with a root word drawn uniformly from `pool`
    ///
    /// Blank entries are never drawn. Any previous round is discarded.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if `pool` has no non-blank entries; the
    /// current round, if any, is left as it was.
    pub fn start_round<S: AsRef<str>>(&mut self, pool: &[S]) -> Result<&RootWord, GameError> {
        let candidates: Vec<&str> = pool
            .iter()
            .map(|word| word.as_ref().trim())
            .filter(|word| !word.is_empty())
            .collect();

        let Some(&choice) = candidates.choose(&mut self.rng) else {
            tracing::warn!(pool_size = pool.len(), "cannot start round from an empty pool");
            return Err(GameError::EmptyPool);
        };

        let root = RootWord::new(choice).map_err(|_| GameError::EmptyPool)?;
        self.rounds_started += 1;
        tracing::info!(root = %root, round = self.rounds_started, "round started");

        Ok(self.round.insert(Round::new(root)).root())
    }

    /// Validate a submission and, if it passes, add it to the round
    ///
    /// Returns `Ok(None)` for a blank submission, which is ignored without
    /// touching the round. A rejection never changes state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundNotStarted` if no round has been started.
    pub fn submit_word(&mut self, raw: &str) -> Result<Option<SubmissionResult>, GameError> {
        let round = self.round.as_mut().ok_or(GameError::RoundNotStarted)?;

        let word = normalize(raw);
        if word.is_empty() {
            return Ok(None);
        }

        let result = match round.check(&word, &self.dictionary) {
            Ok(()) => {
                round.accept(word.clone());
                tracing::debug!(word = %word, score = round.score, "word accepted");
                SubmissionResult::Accepted(word)
            }
            Err(rejection) => {
                tracing::debug!(word = %word, reason = ?rejection, "word rejected");
                SubmissionResult::Rejected(rejection)
            }
        };

        Ok(Some(result))
    }

    #[must_use]
    pub const fn is_in_round(&self) -> bool {
        self.round.is_some()
    }

    #[must_use]
    pub fn root_word(&self) -> Option<&RootWord> {
        self.round.as_ref().map(Round::root)
    }

    /// Accepted words of the current round, most recent first; empty while idle
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round.as_ref().map_or(&[], Round::used_words)
    }

    /// Score of the current round; zero while idle
    #[must_use]
    pub fn score(&self) -> usize {
        self.round.as_ref().map_or(0, Round::score)
    }

    /// Number of rounds started in this session
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dictionary(words: &[&str]) -> HashSet<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn session_with(root: &str, real_words: &[&str]) -> GameSession<HashSet<String>> {
        let mut session = GameSession::seeded(dictionary(real_words), 42);
        session.start_round(&[root]).unwrap();
        session
    }

    fn submit(session: &mut GameSession<HashSet<String>>, raw: &str) -> SubmissionResult {
        session
            .submit_word(raw)
            .unwrap()
            .expect("non-blank submission should produce a result")
    }

    #[test]
    fn new_session_is_idle() {
        let session = GameSession::seeded(dictionary(&[]), 1);
        assert!(!session.is_in_round());
        assert!(session.root_word().is_none());
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_started(), 0);
    }

    #[test]
    fn submit_before_round_fails() {
        let mut session = GameSession::seeded(dictionary(&["sit"]), 1);
        assert_eq!(session.submit_word("sit"), Err(GameError::RoundNotStarted));
    }

    #[test]
    fn start_round_picks_from_pool() {
        let pool = ["listen", "scramble", "elephant"];
        let mut session = GameSession::seeded(dictionary(&[]), 3);

        let root = session.start_round(&pool).unwrap().text().to_string();
        assert!(pool.contains(&root.as_str()));
        assert!(session.is_in_round());
        assert_eq!(session.rounds_started(), 1);
    }

    #[test]
    fn start_round_normalizes_root() {
        let session = session_with("  LISTEN ", &[]);
        assert_eq!(session.root_word().unwrap().text(), "listen");
    }

    #[test]
    fn start_round_skips_blank_entries() {
        let pool = ["", "   ", "listen", ""];
        for seed in 0..20 {
            let mut session = GameSession::seeded(dictionary(&[]), seed);
            assert_eq!(session.start_round(&pool).unwrap().text(), "listen");
        }
    }

    #[test]
    fn same_seed_same_root() {
        let pool = ["listen", "scramble", "elephant", "triangle", "notebook"];
        let mut a = GameSession::seeded(dictionary(&[]), 99);
        let mut b = GameSession::seeded(dictionary(&[]), 99);

        for _ in 0..5 {
            let root_a = a.start_round(&pool).unwrap().clone();
            let root_b = b.start_round(&pool).unwrap().clone();
            assert_eq!(root_a, root_b);
        }
    }

    #[test]
    fn draws_cover_the_pool() {
        let pool = ["listen", "scramble", "elephant"];
        let mut session = GameSession::seeded(dictionary(&[]), 5);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.insert(session.start_round(&pool).unwrap().text().to_string());
        }

        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn empty_pool_is_recoverable() {
        let mut session = GameSession::seeded(dictionary(&[]), 1);
        let empty: [&str; 0] = [];

        assert_eq!(session.start_round(&empty), Err(GameError::EmptyPool));
        assert!(!session.is_in_round());
        assert_eq!(session.rounds_started(), 0);
    }

    #[test]
    fn empty_pool_keeps_prior_round() {
        let mut session = session_with("listen", &["silent"]);
        submit(&mut session, "silent");

        assert_eq!(session.start_round(&["", "  "]), Err(GameError::EmptyPool));
        assert_eq!(session.root_word().unwrap().text(), "listen");
        assert_eq!(session.used_words(), ["silent"]);
        assert_eq!(session.score(), 6);
    }

    #[test]
    fn anagram_accepted() {
        let mut session = session_with("listen", &["silent"]);

        assert_eq!(
            submit(&mut session, "silent"),
            SubmissionResult::Accepted("silent".to_string())
        );
        assert_eq!(session.score(), 6);
        assert_eq!(session.used_words(), ["silent"]);
    }

    #[test]
    fn root_word_rejected() {
        let mut session = session_with("listen", &["listen"]);
        assert_eq!(
            submit(&mut session, "listen"),
            SubmissionResult::Rejected(Rejection::SameAsRoot)
        );
        assert_eq!(
            submit(&mut session, " LISTEN "),
            SubmissionResult::Rejected(Rejection::SameAsRoot)
        );
    }

    #[test]
    fn three_letter_word_accepted() {
        let mut session = session_with("listen", &["sit"]);

        assert_eq!(
            submit(&mut session, "sit"),
            SubmissionResult::Accepted("sit".to_string())
        );
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn short_word_rejected() {
        let mut session = session_with("aabb", &["ab"]);
        assert_eq!(
            submit(&mut session, "ab"),
            SubmissionResult::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn repeated_word_rejected() {
        let mut session = session_with("aabb", &["abb"]);

        assert!(submit(&mut session, "abb").is_accepted());
        assert_eq!(
            submit(&mut session, "abb"),
            SubmissionResult::Rejected(Rejection::NotOriginal)
        );
        assert_eq!(
            submit(&mut session, "  ABB"),
            SubmissionResult::Rejected(Rejection::NotOriginal)
        );
    }

    #[test]
    fn letter_multiplicity_enforced() {
        let mut session = session_with("aabb", &["aaa"]);
        assert_eq!(
            submit(&mut session, "aaa"),
            SubmissionResult::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let mut session = session_with("listen", &[]);
        assert_eq!(
            submit(&mut session, "tlesin"),
            SubmissionResult::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn checks_run_in_order() {
        // "zz" is short, foreign and unknown at once: length wins
        let mut session = session_with("listen", &[]);
        assert_eq!(
            submit(&mut session, "zz"),
            SubmissionResult::Rejected(Rejection::TooShort)
        );
        // Not spellable and not real: composability wins
        assert_eq!(
            submit(&mut session, "zebra"),
            SubmissionResult::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn dictionary_not_consulted_for_local_failures() {
        use std::cell::Cell;

        struct CountingDictionary<'a>(&'a Cell<usize>);

        impl Dictionary for CountingDictionary<'_> {
            fn is_real_word(&self, _word: &str) -> bool {
                self.0.set(self.0.get() + 1);
                true
            }
        }

        let lookups = Cell::new(0);
        let mut session = GameSession::seeded(CountingDictionary(&lookups), 0);
        session.start_round(&["listen"]).unwrap();

        for raw in ["li", "listen", "zebra", "listens"] {
            assert!(!session.submit_word(raw).unwrap().unwrap().is_accepted());
        }
        assert_eq!(lookups.get(), 0);

        assert!(session.submit_word("silent").unwrap().unwrap().is_accepted());
        assert_eq!(lookups.get(), 1);

        // Repeat is caught before the lookup
        assert!(!session.submit_word("silent").unwrap().unwrap().is_accepted());
        assert_eq!(lookups.get(), 1);
    }

    #[test]
    fn blank_submission_ignored() {
        let mut session = session_with("listen", &["silent"]);
        submit(&mut session, "silent");

        assert_eq!(session.submit_word(""), Ok(None));
        assert_eq!(session.submit_word("   \n"), Ok(None));
        assert_eq!(session.used_words(), ["silent"]);
        assert_eq!(session.score(), 6);
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut session = session_with("listen", &["silent"]);
        submit(&mut session, "silent");
        let before = session.round.clone();

        for raw in ["si", "listen", "silent", "zebra", "tlesin"] {
            let first = submit(&mut session, raw);
            let second = submit(&mut session, raw);
            assert_eq!(first, second);
            assert!(!first.is_accepted());
            assert_eq!(session.round, before);
        }
    }

    #[test]
    fn used_words_most_recent_first() {
        let mut session = session_with("listen", &["silent", "sit", "lens", "tile"]);
        for word in ["sit", "lens", "tile", "silent"] {
            assert!(submit(&mut session, word).is_accepted());
        }

        assert_eq!(session.used_words(), ["silent", "tile", "lens", "sit"]);
        assert_eq!(session.score(), 6 + 4 + 4 + 3);
    }

    #[test]
    fn score_counts_letters_not_bytes() {
        let mut session = session_with("café", &["éca"]);
        assert!(submit(&mut session, "ÉCA").is_accepted());
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn new_round_resets_state() {
        let mut session = session_with("listen", &["silent", "sit"]);
        submit(&mut session, "silent");
        submit(&mut session, "sit");
        assert_eq!(session.score(), 9);

        session.start_round(&["scramble"]).unwrap();
        assert_eq!(session.root_word().unwrap().text(), "scramble");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_started(), 2);
    }

    #[test]
    fn same_root_new_round_allows_reuse() {
        let mut session = session_with("listen", &["silent"]);
        submit(&mut session, "silent");

        session.start_round(&["listen"]).unwrap();
        assert!(submit(&mut session, "silent").is_accepted());
    }
}
