use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayTask;
use crate::list;
use crate::store::{StorageBackend, TaskStore};

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(
    store: &TaskStore<B>,
    index: usize,
    new_text: &str,
) -> Result<CmdResult> {
    let tasks = store.load_tasks();
    let (display_index, id) = resolve_indexes(&tasks, &[index])?[0];

    let mut result = CmdResult::default();
    if new_text.trim().is_empty() {
        // An empty task must never reach the store
        result.add_message(CmdMessage::warning("Task text cannot be empty"));
        return Ok(result);
    }

    let next = list::edit_task(&tasks, id, new_text);
    store.save_tasks(&next)?;

    // Editing never reorders, so the index still points at the same task
    let task = next[display_index - 1].clone();
    result.add_message(CmdMessage::success(format!(
        "Task updated ({}): {}",
        display_index, task.text
    )));
    result.affected_tasks.push(DisplayTask {
        task,
        index: display_index,
    });
    Ok(result)
}
