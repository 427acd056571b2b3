use crate::error::{Result, TaskError};
use crate::model::{Task, TaskId};

/// Resolves display indexes (1-based positions in the newest-first list)
/// against the current list. An index with no task behind it is a user
/// error, reported before anything is mutated.
pub fn resolve_indexes(tasks: &[Task], indexes: &[usize]) -> Result<Vec<(usize, TaskId)>> {
    indexes
        .iter()
        .map(|&idx| {
            tasks
                .get(idx.wrapping_sub(1))
                .map(|task| (idx, task.id))
                .ok_or_else(|| TaskError::Api(format!("Index {} not found", idx)))
        })
        .collect()
}
