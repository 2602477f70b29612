//! Then steps for kanban board BDD scenarios.

use super::world::{BoardWorld, column};
use flowboard::board::domain::Task;
use rstest_bdd_macros::then;

#[then(r#"the "{column_key}" column holds "{title}""#)]
fn column_holds(world: &BoardWorld, column_key: String, title: String) -> Result<(), eyre::Report> {
    let titles: Vec<&str> = world
        .state()
        .column(column(&column_key)?)
        .tasks()
        .iter()
        .map(Task::title)
        .collect();

    if !titles.contains(&title.as_str()) {
        return Err(eyre::eyre!(
            "expected {title:?} in {column_key}, found {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{column_key}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, column_key: String) -> Result<(), eyre::Report> {
    let target = world.state().column(column(&column_key)?);
    if !target.is_empty() {
        return Err(eyre::eyre!(
            "expected {column_key} to be empty, found {} tasks",
            target.len()
        ));
    }
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let total = world.state().total_tasks();
    if total != 0 {
        return Err(eyre::eyre!("expected an empty board, found {total} tasks"));
    }
    Ok(())
}

#[then(r#"the draft reports "{message}""#)]
fn draft_reports(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let error = world
        .app
        .draft()
        .error()
        .ok_or_else(|| eyre::eyre!("expected a draft validation error"))?;

    assert_eq!(error.to_string(), message);
    Ok(())
}

#[then("the last action left the board unchanged")]
fn last_action_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_changed {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected an unchanged board, got {other:?}")),
    }
}

#[then("no drag is in progress")]
fn no_drag_in_progress(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.app.drag_session().is_active() {
        return Err(eyre::eyre!("expected the drag session to be idle"));
    }
    Ok(())
}
