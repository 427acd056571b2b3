use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayTask;
use crate::list;
use crate::model::{IdGenerator, Priority};
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(
    store: &TaskStore<B>,
    text: &str,
    priority: Priority,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if text.trim().is_empty() {
        // Rejected input is a no-op, not an error
        result.add_message(CmdMessage::warning("Task text cannot be empty"));
        return Ok(result);
    }

    let tasks = store.load_tasks();
    let mut ids = IdGenerator::seeded_from(&tasks);
    let next = list::add_task(&tasks, ids.next_id(), text, priority);
    store.save_tasks(&next)?;

    // New task is always the newest, so it gets index 1
    let display = DisplayTask {
        task: next[0].clone(),
        index: 1,
    };
    result.add_message(CmdMessage::success(format!(
        "Task added: {}",
        display.task.text
    )));
    result.affected_tasks.push(display);
    Ok(result)
}
