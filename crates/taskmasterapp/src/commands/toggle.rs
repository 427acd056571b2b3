use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayTask;
use crate::list;
use crate::store::{StorageBackend, TaskStore};

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(store: &TaskStore<B>, indexes: &[usize]) -> Result<CmdResult> {
    let tasks = store.load_tasks();
    // Resolve everything up front so a bad index aborts before any mutation
    let resolved = resolve_indexes(&tasks, indexes)?;

    let mut next = tasks;
    let mut result = CmdResult::default();
    for (display_index, id) in resolved {
        next = list::toggle_complete(&next, id);
        store.save_tasks(&next)?;

        let task = next[display_index - 1].clone();
        let verb = if task.completed { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!(
            "Task {} ({}): {}",
            verb, display_index, task.text
        )));
        result.affected_tasks.push(DisplayTask {
            task,
            index: display_index,
        });
    }

    Ok(result)
}
