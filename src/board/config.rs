//! Board manager configuration.

use super::domain::MAX_TITLE_LENGTH;
use chrono::TimeDelta;

/// Storage key the board snapshot is written under by default.
pub const DEFAULT_STORAGE_KEY: &str = "flowboard-data";

/// Configuration for a board manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key the board snapshot is stored under.
    pub storage_key: String,
    /// Maximum task title length in characters.
    pub max_title_length: usize,
    /// Age below which a task counts as recent in column statistics.
    pub recent_window: TimeDelta,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            max_title_length: MAX_TITLE_LENGTH,
            recent_window: TimeDelta::days(1),
        }
    }
}

impl BoardConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the maximum title length.
    #[must_use]
    pub const fn with_max_title_length(mut self, max_title_length: usize) -> Self {
        self.max_title_length = max_title_length;
        self
    }

    /// Sets the recent-task window used by column statistics.
    #[must_use]
    pub const fn with_recent_window(mut self, recent_window: TimeDelta) -> Self {
        self.recent_window = recent_window;
        self
    }
}
