//! Validated task title type.

use super::BoardDomainError;
use std::fmt;

/// Default maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Trimmed, non-empty task title within a character limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title using [`MAX_TITLE_LENGTH`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`BoardDomainError::TitleTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        Self::with_limit(value, MAX_TITLE_LENGTH)
    }

    /// Creates a validated title with an explicit character limit.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`BoardDomainError::TitleTooLong`] when it exceeds `max`.
    pub fn with_limit(value: impl AsRef<str>, max: usize) -> Result<Self, BoardDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }

        let actual = trimmed.chars().count();
        if actual > max {
            return Err(BoardDomainError::TitleTooLong { max, actual });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
