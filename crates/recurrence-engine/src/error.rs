//! Error types for recurrence-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    /// A phrase did not match the recurrence grammar.
    #[error("Invalid recurrence format: '{phrase}': {reason}")]
    InvalidFormat { phrase: String, reason: String },

    /// A constructor was given an empty set or a zero increment.
    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(String),
}

pub type Result<T> = std::result::Result<T, RecurrenceError>;
