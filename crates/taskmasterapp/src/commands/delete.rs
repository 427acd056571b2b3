use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayTask;
use crate::list;
use crate::store::{StorageBackend, TaskStore};

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(store: &TaskStore<B>, indexes: &[usize]) -> Result<CmdResult> {
    let tasks = store.load_tasks();
    // Resolve against the list the user saw; deletion by id afterwards, so
    // earlier removals cannot shift what a later index means
    let resolved = resolve_indexes(&tasks, indexes)?;

    let mut next = tasks;
    let mut result = CmdResult::default();
    for (display_index, id) in resolved {
        let Some(task) = next.iter().find(|t| t.id == id).cloned() else {
            continue;
        };
        next = list::delete_task(&next, id);
        store.save_tasks(&next)?;

        result.add_message(CmdMessage::success(format!(
            "Task deleted ({}): {}",
            display_index, task.text
        )));
        result.affected_tasks.push(DisplayTask {
            task,
            index: display_index,
        });
    }

    Ok(result)
}
