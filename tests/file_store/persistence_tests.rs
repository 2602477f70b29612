//! Board sessions persisted through the file snapshot store.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use flowboard::board::{
    adapters::file::FileSnapshotStore,
    config::BoardConfig,
    domain::{ColumnId, Task},
    services::BoardManager,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type FileManager = BoardManager<FileSnapshotStore, DefaultClock>;

#[fixture]
fn board_dir() -> Utf8PathBuf {
    let base = Utf8PathBuf::try_from(std::env::temp_dir()).expect("temp dir is UTF-8");
    base.join(format!("flowboard_it_{}", uuid::Uuid::new_v4()))
}

fn open(dir: &Utf8Path, config: BoardConfig) -> FileManager {
    let store = FileSnapshotStore::open(dir).expect("open board directory");
    BoardManager::restore(Arc::new(store), Arc::new(DefaultClock), config)
}

#[rstest]
fn board_survives_process_restart(board_dir: Utf8PathBuf) {
    let task_id = {
        let mut manager = open(&board_dir, BoardConfig::default());
        let task_id = manager.add_task("Ship it").expect("task added");
        assert!(manager.move_task(&task_id, ColumnId::Todo, ColumnId::InProgress));
        task_id
    };

    let manager = open(&board_dir, BoardConfig::default());

    let titles: Vec<_> = manager
        .column(ColumnId::InProgress)
        .tasks()
        .iter()
        .map(Task::title)
        .collect();
    assert_eq!(titles, vec!["Ship it"]);
    assert!(manager.column(ColumnId::InProgress).contains(&task_id));
    assert!(board_dir.join("flowboard-data.json").is_file());
}

#[rstest]
fn boards_with_different_keys_are_independent(board_dir: Utf8PathBuf) {
    {
        let mut personal = open(&board_dir, BoardConfig::default());
        personal.add_task("Personal");
        let mut team = open(
            &board_dir,
            BoardConfig::default().with_storage_key("team-board"),
        );
        team.add_task("Team one");
        team.add_task("Team two");
    }

    let personal = open(&board_dir, BoardConfig::default());
    let team = open(
        &board_dir,
        BoardConfig::default().with_storage_key("team-board"),
    );
    assert_eq!(personal.state().total_tasks(), 1);
    assert_eq!(team.state().total_tasks(), 2);
}

#[rstest]
fn hand_edited_snapshot_with_bad_json_yields_empty_board(board_dir: Utf8PathBuf) {
    std::fs::create_dir_all(&board_dir).expect("create board directory");
    std::fs::write(board_dir.join("flowboard-data.json"), "{ truncated")
        .expect("write corrupt snapshot");

    let manager = open(&board_dir, BoardConfig::default());

    assert!(manager.state().is_empty());
}
