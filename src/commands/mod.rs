//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckReport, CheckedWord, check_words};
pub use simple::run_simple;
