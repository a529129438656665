//! Search-specific error types
//!
//! The search engine itself is total: every session command succeeds, and
//! commands that do not apply are ignored rather than rejected. The only
//! fallible step is turning user text into engine input, e.g. parsing a
//! category name typed at the prompt or passed on the command line.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A category name did not match ingredients, appliances or utensils
    #[error("Unknown category '{0}' (expected ingredients, appliances or utensils)")]
    UnknownCategory(String),

    /// A prompt line could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
