//! Round management for Word Scramble
//!
//! A `GameSession` owns the current round and runs every submission through
//! the validation pipeline.

mod session;

pub use session::GameSession;
