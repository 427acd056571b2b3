use crate::commands::CmdResult;
use crate::error::Result;
use crate::list;
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(store: &TaskStore<B>) -> Result<CmdResult> {
    let tasks = store.load_tasks();
    Ok(CmdResult::default().with_progress(list::progress(&tasks)))
}
