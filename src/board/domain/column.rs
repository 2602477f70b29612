//! Column type holding an ordered task sequence.

use super::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A fixed board column and its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with its canonical title.
    #[must_use]
    pub fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            tasks: Vec::new(),
        }
    }

    /// Returns the column identity.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns `true` when the column holds the given task.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.find(task_id).is_some()
    }

    /// Appends a task to the tail of the column.
    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task with the given identifier, if present.
    pub(crate) fn take(&mut self, task_id: &TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(position))
    }
}
