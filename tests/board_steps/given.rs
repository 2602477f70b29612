//! Given steps for kanban board BDD scenarios.

use super::world::{BoardWorld, column};
use eyre::WrapErr;
use flowboard::board::domain::ColumnId;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.state().is_empty() {
        return Err(eyre::eyre!("expected a fresh board"));
    }
    Ok(())
}

#[given(r#"a board with "{title}" in "{column_key}""#)]
fn board_with_task(
    world: &mut BoardWorld,
    title: String,
    column_key: String,
) -> Result<(), eyre::Report> {
    let target = column(&column_key)?;
    world.app.set_draft_title(title);
    let task_id = world
        .app
        .submit_draft()
        .wrap_err("add task for scenario setup")?;
    if target != ColumnId::Todo && !world.app.move_task_to(&task_id, ColumnId::Todo, target) {
        return Err(eyre::eyre!("could not place task in {column_key}"));
    }
    Ok(())
}

#[given("confirmation prompts are declined")]
fn prompts_declined(world: &mut BoardWorld) {
    world.accept.set(false);
}
