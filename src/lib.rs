//! Word Scramble
//!
//! A word-spelling game: a root word is drawn at random and the player finds
//! real words that can be spelled from its letters. Each accepted word scores
//! its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::SubmissionResult;
//! use word_scramble::game::GameSession;
//! use word_scramble::wordlists::WordSource;
//!
//! let source = WordSource::bundled();
//! let mut session = GameSession::seeded(source.dictionary(), 1);
//!
//! // Play a round on a fixed root word
//! session.start_round(&["listen"]).unwrap();
//! let result = session.submit_word("silent").unwrap();
//! assert_eq!(result, Some(SubmissionResult::Accepted("silent".to_string())));
//! assert_eq!(session.score(), 6);
//! ```

// Core domain types
pub mod core;

// Real-word validation
pub mod dictionary;

// Error types
pub mod error;

// Round state and submission pipeline
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
