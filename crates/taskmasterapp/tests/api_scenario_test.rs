//! End-to-end scenarios through the API facade, backed by the in-memory
//! store.

use std::path::PathBuf;
use taskmasterapp::api::{TaskApi, ThemeAction};
use taskmasterapp::model::{Filter, Priority};
use taskmasterapp::store::{InMemoryStore, MemBackend};

fn api() -> TaskApi<MemBackend> {
    TaskApi::new(InMemoryStore::new(), PathBuf::from("unused"))
}

#[test]
fn buy_milk_lifecycle() {
    let api = api();

    // Add
    let result = api.add_task("Buy milk", Priority::High).unwrap();
    assert_eq!(result.affected_tasks.len(), 1);
    let added = &result.affected_tasks[0];
    assert_eq!(added.index, 1);
    assert_eq!(added.task.text, "Buy milk");
    assert_eq!(added.task.priority, Priority::High);
    assert!(!added.task.completed);

    // Toggle
    let result = api.toggle_tasks(&["1"]).unwrap();
    assert!(result.affected_tasks[0].task.completed);

    let progress = api.status().unwrap().progress.unwrap();
    assert_eq!((progress.completed, progress.total), (1, 1));
    assert_eq!(progress.percentage, 100.0);

    // Delete
    api.delete_tasks(&["1"]).unwrap();
    let listed = api.list_tasks(Filter::All).unwrap().listed_tasks;
    assert!(listed.is_empty());
}

#[test]
fn filters_partition_the_list() {
    let api = api();
    api.add_task("One", Priority::Medium).unwrap();
    api.add_task("Two", Priority::Medium).unwrap();
    api.add_task("Three", Priority::Medium).unwrap();
    api.toggle_tasks(&["2"]).unwrap();

    let all = api.list_tasks(Filter::All).unwrap().listed_tasks;
    let active = api.list_tasks(Filter::Active).unwrap().listed_tasks;
    let completed = api.list_tasks(Filter::Completed).unwrap().listed_tasks;

    assert_eq!(all.len(), 3);
    assert_eq!(active.len() + completed.len(), all.len());
    assert!(completed.iter().all(|dt| dt.task.completed));
    assert!(active.iter().all(|dt| !dt.task.completed));
}

#[test]
fn whitespace_only_add_changes_nothing() {
    let api = api();
    api.add_task("Real task", Priority::Medium).unwrap();

    let before = api.list_tasks(Filter::All).unwrap().listed_tasks;
    api.add_task("   \t", Priority::Low).unwrap();
    let after = api.list_tasks(Filter::All).unwrap().listed_tasks;

    assert_eq!(before.len(), after.len());
    assert_eq!(after[0].task.text, "Real task");
}

#[test]
fn edit_replaces_text_in_place() {
    let api = api();
    api.add_task("Tpyo", Priority::Medium).unwrap();
    api.add_task("Another", Priority::Medium).unwrap();

    api.edit_task("2", "Typo").unwrap();

    let listed = api.list_tasks(Filter::All).unwrap().listed_tasks;
    assert_eq!(listed[1].task.text, "Typo");
    assert_eq!(listed[0].task.text, "Another");
}

#[test]
fn theme_survives_task_churn() {
    let api = api();
    api.theme(ThemeAction::Set(false)).unwrap();

    api.add_task("A", Priority::Medium).unwrap();
    api.delete_tasks(&["1"]).unwrap();

    let result = api.theme(ThemeAction::Show).unwrap();
    assert_eq!(result.theme, Some(false));
}
