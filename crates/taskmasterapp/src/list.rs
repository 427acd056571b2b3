//! Pure list operations.
//!
//! Every mutation here is a total function from an input list to an output
//! list: no partial application, no panics, and lookup misses return the
//! input unchanged. The command layer wraps these in load/save pairs; tests
//! exercise them directly.
//!
//! Ordering invariant: the list is newest-first. [`add_task`] prepends, and
//! nothing in this module ever reorders.

use crate::model::{Filter, Priority, Task, TaskId};

/// Derived completed/total/percentage summary over a task list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Prepends a new task. Whitespace-only text is rejected: the input list
/// comes back unchanged and nothing is created.
pub fn add_task(tasks: &[Task], id: TaskId, text: &str, priority: Priority) -> Vec<Task> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return tasks.to_vec();
    }

    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.push(Task::new(id, trimmed, priority));
    next.extend_from_slice(tasks);
    next
}

/// Replaces the text of the matching task, leaving every other field alone.
/// No-op when the id is unknown or the replacement trims to empty—an empty
/// task must never reach the store.
pub fn edit_task(tasks: &[Task], id: TaskId, new_text: &str) -> Vec<Task> {
    let trimmed = new_text.trim();
    if trimmed.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if task.id == id {
                task.text = trimmed.to_string();
            }
            task
        })
        .collect()
}

/// Flips the completion flag of the matching task. No-op when not found.
pub fn toggle_complete(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if task.id == id {
                task.completed = !task.completed;
            }
            task
        })
        .collect()
}

/// Removes the matching task. No-op when not found.
pub fn delete_task(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Projects the subset selected by `filter`, preserving order.
pub fn filtered(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        })
        .cloned()
        .collect()
}

/// Completion summary. The empty list reports 0%, not a division by zero.
pub fn progress(tasks: &[Task]) -> Progress {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let percentage = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    Progress {
        completed,
        total,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, text: &str, completed: bool) -> Task {
        let mut task = Task::new(TaskId(id), text, Priority::Medium);
        task.completed = completed;
        task
    }

    #[test]
    fn add_prepends_uncompleted_task() {
        let tasks = vec![make_task(1, "Old", false)];
        let next = add_task(&tasks, TaskId(2), "New", Priority::High);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, TaskId(2));
        assert_eq!(next[0].text, "New");
        assert_eq!(next[0].priority, Priority::High);
        assert!(!next[0].completed);
        assert_eq!(next[1].text, "Old");
    }

    #[test]
    fn add_rejects_whitespace_only_text() {
        let tasks = vec![make_task(1, "Keep me", false)];

        assert_eq!(add_task(&tasks, TaskId(2), "", Priority::Low), tasks);
        assert_eq!(add_task(&tasks, TaskId(2), "   ", Priority::Low), tasks);
        assert_eq!(add_task(&tasks, TaskId(2), "\t\n", Priority::Low), tasks);
    }

    #[test]
    fn add_trims_text() {
        let next = add_task(&[], TaskId(1), "  Buy milk  ", Priority::Medium);
        assert_eq!(next[0].text, "Buy milk");
    }

    #[test]
    fn edit_replaces_text_only() {
        let tasks = vec![make_task(1, "Before", true)];
        let next = edit_task(&tasks, TaskId(1), "After");

        assert_eq!(next[0].text, "After");
        assert_eq!(next[0].id, TaskId(1));
        // Completion and priority are untouched
        assert!(next[0].completed);
        assert_eq!(next[0].priority, Priority::Medium);
    }

    #[test]
    fn edit_unknown_id_leaves_list_unchanged() {
        let tasks = vec![make_task(1, "A", false), make_task(2, "B", false)];
        assert_eq!(edit_task(&tasks, TaskId(99), "x"), tasks);
    }

    #[test]
    fn edit_rejects_empty_replacement() {
        let tasks = vec![make_task(1, "Original", false)];
        assert_eq!(edit_task(&tasks, TaskId(1), "   "), tasks);
    }

    #[test]
    fn toggle_flips_completion() {
        let tasks = vec![make_task(1, "A", false)];
        let next = toggle_complete(&tasks, TaskId(1));
        assert!(next[0].completed);
    }

    #[test]
    fn double_toggle_restores_original() {
        let tasks = vec![make_task(1, "A", false), make_task(2, "B", true)];
        let next = toggle_complete(&toggle_complete(&tasks, TaskId(1)), TaskId(1));
        assert_eq!(next, tasks);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let tasks = vec![make_task(1, "A", false)];
        assert_eq!(toggle_complete(&tasks, TaskId(42)), tasks);
    }

    #[test]
    fn delete_removes_matching_task() {
        let tasks = vec![make_task(1, "A", false), make_task(2, "B", false)];
        let next = delete_task(&tasks, TaskId(1));

        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, TaskId(2));
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let tasks = vec![make_task(1, "A", false)];
        assert_eq!(delete_task(&tasks, TaskId(9)), tasks);
    }

    #[test]
    fn filter_partitions_list_exactly() {
        let tasks = vec![
            make_task(1, "A", true),
            make_task(2, "B", false),
            make_task(3, "C", true),
            make_task(4, "D", false),
        ];

        let active = filtered(&tasks, Filter::Active);
        let completed = filtered(&tasks, Filter::Completed);

        assert_eq!(active.len() + completed.len(), tasks.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        // No task lands in both subsets
        for task in &active {
            assert!(!completed.iter().any(|t| t.id == task.id));
        }
        // "all" is the identity
        assert_eq!(filtered(&tasks, Filter::All), tasks);
    }

    #[test]
    fn filter_preserves_order() {
        let tasks = vec![
            make_task(3, "C", false),
            make_task(2, "B", true),
            make_task(1, "A", false),
        ];
        let active = filtered(&tasks, Filter::Active);
        assert_eq!(active[0].id, TaskId(3));
        assert_eq!(active[1].id, TaskId(1));
    }

    #[test]
    fn progress_of_empty_list_is_zero() {
        let p = progress(&[]);
        assert_eq!(p.completed, 0);
        assert_eq!(p.total, 0);
        assert_eq!(p.percentage, 0.0);
    }

    #[test]
    fn progress_reports_ratio() {
        let tasks = vec![
            make_task(1, "A", true),
            make_task(2, "B", false),
            make_task(3, "C", false),
        ];
        let p = progress(&tasks);

        assert_eq!(p.completed, 1);
        assert_eq!(p.total, 3);
        assert!((p.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn buy_milk_scenario() {
        // Empty list -> add -> toggle -> delete -> empty again
        let tasks: Vec<Task> = Vec::new();

        let tasks = add_task(&tasks, TaskId(1), "Buy milk", Priority::High);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert_eq!(tasks[0].priority, Priority::High);
        assert!(!tasks[0].completed);
        let id = tasks[0].id;

        let tasks = toggle_complete(&tasks, id);
        assert!(tasks[0].completed);
        let p = progress(&tasks);
        assert_eq!((p.completed, p.total), (1, 1));
        assert_eq!(p.percentage, 100.0);

        let tasks = delete_task(&tasks, id);
        assert!(tasks.is_empty());
    }
}
