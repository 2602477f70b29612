//! Tests for the board session wiring.

use std::sync::Arc;

use crate::app::{
    AutoConfirm, BoardApp, ConfirmationPrompt, DELETE_TASK_PROMPT, RESET_BOARD_PROMPT,
};
use crate::board::{
    adapters::memory::InMemorySnapshotStore,
    config::BoardConfig,
    domain::{BoardDomainError, ColumnId, MoveDirection, TaskId},
    services::BoardManager,
};
use crate::drag::domain::{DragSession, PointerPosition, ZoneBounds};
use mockable::DefaultClock;
use mockall::{mock, predicate::eq};
use rstest::{fixture, rstest};

mock! {
    pub Prompt {}

    impl ConfirmationPrompt for Prompt {
        fn confirm(&self, message: &str) -> bool;
    }
}

type TestApp = BoardApp<InMemorySnapshotStore, DefaultClock, AutoConfirm>;

fn manager() -> BoardManager<InMemorySnapshotStore, DefaultClock> {
    BoardManager::new(
        Arc::new(InMemorySnapshotStore::new()),
        Arc::new(DefaultClock),
        BoardConfig::default(),
    )
}

fn prompt_answering(message: &'static str, answer: bool) -> MockPrompt {
    let mut prompt = MockPrompt::new();
    prompt
        .expect_confirm()
        .with(eq(message))
        .times(1)
        .return_const(answer);
    prompt
}

#[fixture]
fn app() -> TestApp {
    BoardApp::new(manager(), AutoConfirm)
}

fn add<P: ConfirmationPrompt>(
    app: &mut BoardApp<InMemorySnapshotStore, DefaultClock, P>,
    title: &str,
) -> TaskId {
    app.set_draft_title(title);
    app.submit_draft().expect("draft accepted")
}

#[rstest]
fn submitted_draft_lands_in_todo(mut app: TestApp) {
    let task_id = add(&mut app, "Write release notes");

    assert!(app.state().column(ColumnId::Todo).contains(&task_id));
    assert_eq!(app.draft().title(), "");
}

#[rstest]
fn rejected_draft_keeps_error_until_cancelled(mut app: TestApp) {
    app.set_draft_title("  ");

    assert_eq!(app.submit_draft(), Err(BoardDomainError::EmptyTitle));
    assert_eq!(app.draft().error(), Some(&BoardDomainError::EmptyTitle));

    app.cancel_draft();
    assert_eq!(app.draft().error(), None);
    assert!(app.state().is_empty());
}

#[rstest]
fn arrow_moves_follow_column_order(mut app: TestApp) {
    let task_id = add(&mut app, "Arrow");

    assert!(app.move_task(&task_id, ColumnId::Todo, MoveDirection::Right));
    assert!(app.state().column(ColumnId::InProgress).contains(&task_id));
    assert!(!app.move_task(&task_id, ColumnId::Todo, MoveDirection::Left));
}

#[rstest]
#[case(true)]
#[case(false)]
fn delete_asks_before_removing(#[case] accepted: bool) {
    let mut app = BoardApp::new(manager(), prompt_answering(DELETE_TASK_PROMPT, accepted));
    let task_id = add(&mut app, "Maybe delete");

    let deleted = app.delete_task(&task_id, ColumnId::Todo);

    assert_eq!(deleted, accepted);
    assert_eq!(app.state().column(ColumnId::Todo).contains(&task_id), !accepted);
}

#[rstest]
#[case(true)]
#[case(false)]
fn reset_asks_before_clearing(#[case] accepted: bool) {
    let mut app = BoardApp::new(manager(), prompt_answering(RESET_BOARD_PROMPT, accepted));
    add(&mut app, "Maybe reset");

    assert_eq!(app.reset_board(), accepted);
    assert_eq!(app.state().is_empty(), accepted);
}

#[rstest]
fn drag_and_drop_moves_task_between_columns(mut app: TestApp) {
    let task_id = add(&mut app, "Drag across");

    assert!(app.drag_start(&task_id, ColumnId::Todo));
    app.drag_over(ColumnId::Done);
    assert!(app.is_dragged_over(ColumnId::Done));

    assert!(app.drop_on(ColumnId::Done));
    assert!(app.state().column(ColumnId::Done).contains(&task_id));
    assert!(app.state().column(ColumnId::Todo).is_empty());
    assert_eq!(app.drag_session(), &DragSession::Idle);
}

#[rstest]
fn drop_on_source_column_leaves_board_unchanged(mut app: TestApp) {
    let task_id = add(&mut app, "Stay put");
    let before = app.state().clone();

    assert!(app.drag_start(&task_id, ColumnId::Todo));
    assert!(!app.drop_on(ColumnId::Todo));

    assert_eq!(app.state(), &before);
    assert!(!app.drag_session().is_active());
}

#[rstest]
fn drag_end_cancels_the_gesture(mut app: TestApp) {
    let task_id = add(&mut app, "Cancelled");
    let bounds = ZoneBounds::new(0.0, 0.0, 100.0, 100.0);

    assert!(app.drag_start(&task_id, ColumnId::Todo));
    app.drag_over(ColumnId::InProgress);
    app.drag_leave(bounds, PointerPosition::new(200.0, 50.0));
    assert!(!app.is_dragged_over(ColumnId::InProgress));
    app.drag_end();

    assert_eq!(app.drag_session(), &DragSession::Idle);
    assert!(app.state().column(ColumnId::Todo).contains(&task_id));
}

#[rstest]
fn drag_start_requires_task_in_column(mut app: TestApp) {
    let task_id = add(&mut app, "Misplaced");

    assert!(!app.drag_start(&task_id, ColumnId::Done));
    assert!(!app.drag_start(&TaskId::from_raw("task-unknown"), ColumnId::Todo));
    assert!(!app.tracker().session().is_active());
}
