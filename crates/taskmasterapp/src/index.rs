//! Display indexing.
//!
//! Stored ids are stable but unfriendly; the CLI addresses tasks by their
//! 1-based position in the newest-first list (1 = most recent). The mapping
//! is recomputed from the current list on every command, so an index is only
//! meaningful against the list the user just saw.

use crate::model::Task;

/// A task paired with its 1-based position in the display order.
#[derive(Debug, Clone)]
pub struct DisplayTask {
    pub task: Task,
    pub index: usize,
}

/// Assigns display indexes to a list of tasks, preserving list order.
pub fn index_tasks(tasks: Vec<Task>) -> Vec<DisplayTask> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| DisplayTask {
            task,
            index: i + 1,
        })
        .collect()
}

/// Parses a single input string that may be either an index or a range.
///
/// Supports formats:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5)
///
/// Range rules: start must be <= end, and indexes start at 1. Whether the
/// indexes actually exist is validated later, against the current list.
pub fn parse_index_or_range(s: &str) -> std::result::Result<Vec<usize>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = parse_single(&s[..dash_pos])?;
            let end = parse_single(&s[dash_pos + 1..])?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            return Ok((start..=end).collect());
        }
    }

    parse_single(s).map(|idx| vec![idx])
}

fn parse_single(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("Invalid index format: {}", s))?;
    if n == 0 {
        return Err("Indexes start at 1".to_string());
    }
    Ok(n)
}
