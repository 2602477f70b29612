//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating board input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// The task title exceeds the configured character limit.
    #[error("Task title must be {max} characters or less")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual trimmed length in characters.
        actual: usize,
    },
}

/// Error returned while parsing a column identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnIdError(pub String);
