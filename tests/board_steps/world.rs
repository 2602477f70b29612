//! Shared world state for kanban board BDD scenarios.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use flowboard::{
    app::{BoardApp, ConfirmationPrompt},
    board::{
        adapters::memory::InMemorySnapshotStore,
        config::BoardConfig,
        domain::{BoardState, ColumnId, TaskId},
        services::BoardManager,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Prompt whose answer the scenario can change between steps.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    accept: Rc<Cell<bool>>,
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.accept.get()
    }
}

/// Board session type used by the BDD world.
pub type TestBoardApp = BoardApp<InMemorySnapshotStore, DefaultClock, ScriptedPrompt>;

/// Scenario world for kanban board behaviour tests.
pub struct BoardWorld {
    pub store: InMemorySnapshotStore,
    pub accept: Rc<Cell<bool>>,
    pub app: TestBoardApp,
    pub last_changed: Option<bool>,
}

impl BoardWorld {
    /// Creates a world over an empty store with prompts accepted.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemorySnapshotStore::new();
        let accept = Rc::new(Cell::new(true));
        let app = open_app(&store, &accept);
        Self {
            store,
            accept,
            app,
            last_changed: None,
        }
    }

    /// Replaces the session with one restored from the shared store.
    pub fn reload(&mut self) {
        self.app = open_app(&self.store, &self.accept);
    }

    /// Returns the board state.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        self.app.state()
    }

    /// Finds the identifier of the task titled `title`.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.state()
            .tasks()
            .find(|(_, task)| task.title() == title)
            .map(|(_, task)| task.id().clone())
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a column key used in feature files.
pub fn column(key: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(key).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

fn open_app(store: &InMemorySnapshotStore, accept: &Rc<Cell<bool>>) -> TestBoardApp {
    let manager = BoardManager::restore(
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
        BoardConfig::default(),
    );
    let prompt = ScriptedPrompt {
        accept: Rc::clone(accept),
    };
    BoardApp::new(manager, prompt)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
