//! Identifier types for the board domain.

use super::ParseColumnIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a task on the board.
///
/// Freshly generated identifiers take the form `task-<uuid>`. Identifiers read
/// back from a snapshot are accepted verbatim, so boards written by older
/// clients keep their original IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Prefix applied to generated identifiers.
    const PREFIX: &'static str = "task-";

    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("{}{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Wraps an existing identifier string.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the three fixed board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work underway.
    InProgress,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the column to the left in display order, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Done => Some(Self::InProgress),
        }
    }

    /// Returns the column to the right in display order, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns the neighbouring column in the given direction, if any.
    #[must_use]
    pub const fn adjacent(self, direction: MoveDirection) -> Option<Self> {
        match direction {
            MoveDirection::Left => self.previous(),
            MoveDirection::Right => self.next(),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "inProgress" | "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

/// Direction of a single-step move between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Towards `todo`.
    Left,
    /// Towards `done`.
    Right,
}
