use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_tasks, DisplayTask};
use crate::list;
use crate::model::Filter;
use crate::store::{StorageBackend, TaskStore};

/// The view projection: filtered task sequence plus the progress summary,
/// recomputed from the stored list on every call. Display indexes are
/// assigned over the full list before filtering, so a subset view still
/// shows the indexes other commands accept.
pub fn run<B: StorageBackend>(store: &TaskStore<B>, filter: Filter) -> Result<CmdResult> {
    let tasks = store.load_tasks();
    let progress = list::progress(&tasks);

    let listed: Vec<DisplayTask> = index_tasks(tasks)
        .into_iter()
        .filter(|dt| match filter {
            Filter::All => true,
            Filter::Active => !dt.task.completed,
            Filter::Completed => dt.task.completed,
        })
        .collect();

    Ok(CmdResult::default()
        .with_listed_tasks(listed)
        .with_progress(progress))
}
