//! Board state manager: applies actions and persists snapshots.

use crate::board::{
    config::BoardConfig,
    domain::{
        BoardAction, BoardState, BoardStats, Column, ColumnId, ColumnStats, MoveDirection, Task,
        TaskId, reduce, snapshot,
    },
    ports::SnapshotStore,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Owns the board state and writes a snapshot after every committed change.
///
/// The transition logic lives in [`reduce`]; the manager adds restore on
/// construction and the persistence side effect. Storage failures are logged
/// and the board carries on in memory.
pub struct BoardManager<S, C>
where
    S: SnapshotStore,
    C: Clock,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: BoardConfig,
    state: BoardState,
}

impl<S, C> BoardManager<S, C>
where
    S: SnapshotStore,
    C: Clock,
{
    /// Creates a manager over an empty board without reading storage.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            store,
            clock,
            config,
            state: BoardState::default(),
        }
    }

    /// Creates a manager and restores the board from storage.
    ///
    /// A missing, unreadable or malformed snapshot leaves the board empty; the
    /// cause is logged.
    #[must_use]
    pub fn restore(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        let mut manager = Self::new(store, clock, config);
        if let Some(restored) = manager.read_snapshot() {
            manager.state = restored;
        }
        manager
    }

    /// Returns the current board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the manager configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the column with the given identity.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        self.state.column(id)
    }

    /// Locates a task anywhere on the board.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<(ColumnId, &Task)> {
        self.state.find_task(task_id)
    }

    /// Returns board-wide task counts.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::for_board(&self.state)
    }

    /// Returns task counts for one column.
    #[must_use]
    pub fn column_stats(&self, id: ColumnId) -> ColumnStats {
        ColumnStats::for_column(
            self.state.column(id),
            self.clock.utc(),
            self.config.recent_window,
        )
    }

    /// Appends a new task to `todo`.
    ///
    /// Returns the new task's identifier, or `None` when the title is empty
    /// after trimming.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        if title.trim().is_empty() {
            debug!("ignoring add_task with empty title");
            return None;
        }
        let added = self.dispatch(BoardAction::AddTask {
            title: title.to_owned(),
        });
        if !added {
            return None;
        }
        self.state
            .column(ColumnId::Todo)
            .tasks()
            .last()
            .map(|task| task.id().clone())
    }

    /// Moves a task from `source` to the tail of `target`.
    ///
    /// Returns `true` when the board changed. Same-column moves and tasks
    /// missing from `source` are ignored.
    pub fn move_task(&mut self, task_id: &TaskId, source: ColumnId, target: ColumnId) -> bool {
        if source == target {
            debug!(task_id = %task_id, column = %source, "ignoring same-column move");
            return false;
        }
        self.dispatch(BoardAction::MoveTask {
            task_id: task_id.clone(),
            source,
            target,
        })
    }

    /// Moves a task one column left or right.
    ///
    /// Returns `true` when the board changed; a move past either edge of the
    /// board is ignored.
    pub fn move_task_to_adjacent(
        &mut self,
        task_id: &TaskId,
        column: ColumnId,
        direction: MoveDirection,
    ) -> bool {
        column
            .adjacent(direction)
            .is_some_and(|target| self.move_task(task_id, column, target))
    }

    /// Removes a task from `column`.
    ///
    /// Returns `true` when a task was removed.
    pub fn delete_task(&mut self, task_id: &TaskId, column: ColumnId) -> bool {
        self.dispatch(BoardAction::DeleteTask {
            task_id: task_id.clone(),
            column,
        })
    }

    /// Discards every task.
    pub fn reset_board(&mut self) {
        info!(discarded = self.state.total_tasks(), "resetting board");
        self.dispatch(BoardAction::ResetBoard);
    }

    /// Replaces the whole board with `snapshot`.
    pub fn load_state(&mut self, snapshot: BoardState) {
        self.dispatch(BoardAction::LoadState(snapshot));
    }

    /// Applies an action and persists the result if the board changed.
    ///
    /// Returns `true` when the board changed.
    pub fn dispatch(&mut self, action: BoardAction) -> bool {
        let kind = action.kind();
        let next = reduce(&self.state, action, &*self.clock);
        if next == self.state {
            debug!(action = kind, "action left board unchanged");
            return false;
        }

        self.state = next;
        debug!(
            action = kind,
            total_tasks = self.state.total_tasks(),
            "board updated"
        );
        self.persist();
        true
    }

    fn read_snapshot(&self) -> Option<BoardState> {
        let key = self.config.storage_key.as_str();
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no saved board, starting empty");
                return None;
            }
            Err(err) => {
                error!(key, error = %err, "failed to read board snapshot");
                return None;
            }
        };

        match snapshot::decode(&raw) {
            Ok(restored) => {
                info!(key, total_tasks = restored.total_tasks(), "restored board");
                Some(restored)
            }
            Err(err) => {
                error!(key, error = %err, "failed to load board snapshot");
                None
            }
        }
    }

    fn persist(&self) {
        let key = self.config.storage_key.as_str();
        let encoded = match snapshot::encode(&self.state) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(key, error = %err, "failed to encode board snapshot");
                return;
            }
        };
        if let Err(err) = self.store.write(key, &encoded) {
            warn!(key, error = %err, "failed to save board snapshot, continuing in memory");
        }
    }
}
