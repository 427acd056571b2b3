//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all taskmaster operations, regardless of the
//! UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing "2-4" into display indexes)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Selectors: Multi-Indexes and Ranges
//!
//! Users often need to act on batches of tasks (`taskmaster delete 1-3`).
//! Selector strings are parsed with [`crate::index::parse_index_or_range`],
//! then deduplicated while preserving order. Whether an index exists is
//! checked later, against the current list.
//!
//! ## Generic Over StorageBackend
//!
//! `TaskApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `TaskApi<FsBackend>`
//! - Testing: `TaskApi<MemBackend>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::{Result, TaskError};
use crate::index::parse_index_or_range;
use crate::model::{Filter, Priority};
use crate::store::{StorageBackend, TaskStore};
use std::collections::HashSet;
use std::path::PathBuf;

/// The main API facade for taskmaster operations.
///
/// Generic over `StorageBackend` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct TaskApi<B: StorageBackend> {
    store: TaskStore<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> TaskApi<B> {
    pub fn new(store: TaskStore<B>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_task(&self, text: &str, priority: Priority) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, text, priority)
    }

    pub fn list_tasks(&self, filter: Filter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn edit_task(&self, index: &str, new_text: &str) -> Result<commands::CmdResult> {
        let indexes = parse_selectors(&[index])?;
        let [index] = indexes.as_slice() else {
            return Err(TaskError::Api("Edit takes a single index".to_string()));
        };
        commands::edit::run(&self.store, *index, new_text)
    }

    pub fn toggle_tasks<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_selectors(indexes)?;
        commands::toggle::run(&self.store, &indexes)
    }

    pub fn delete_tasks<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_selectors(indexes)?;
        commands::delete::run(&self.store, &indexes)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn theme(&self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(&self.store, action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

/// Expands selector strings ("3", "1-4") into display indexes,
/// deduplicating while preserving order.
fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<usize>> {
    let mut all = Vec::new();
    for input in inputs {
        let expanded = parse_index_or_range(input.as_ref()).map_err(TaskError::Api)?;
        all.extend(expanded);
    }

    let mut seen = HashSet::new();
    Ok(all.into_iter().filter(|idx| seen.insert(*idx)).collect())
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::theme::ThemeAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn api() -> TaskApi<crate::store::MemBackend> {
        TaskApi::new(InMemoryStore::new(), PathBuf::from("unused"))
    }

    #[test]
    fn test_parse_selectors_single_and_range() {
        let parsed = parse_selectors(&["1", "3-5"]).unwrap();
        assert_eq!(parsed, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_parse_selectors_deduplicates_preserving_order() {
        let parsed = parse_selectors(&["3", "1-3", "1"]).unwrap();
        assert_eq!(parsed, vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_selectors_rejects_garbage() {
        assert!(parse_selectors(&["abc"]).is_err());
        assert!(parse_selectors(&["5-3"]).is_err());
    }

    #[test]
    fn test_add_then_toggle_by_selector() {
        let api = api();
        api.add_task("A", Priority::Medium).unwrap();
        api.add_task("B", Priority::Medium).unwrap();

        api.toggle_tasks(&["1-2"]).unwrap();

        let listed = api.list_tasks(Filter::Completed).unwrap().listed_tasks;
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn test_edit_rejects_range_selector() {
        let api = api();
        api.add_task("A", Priority::Medium).unwrap();
        api.add_task("B", Priority::Medium).unwrap();

        match api.edit_task("1-2", "x") {
            Err(TaskError::Api(msg)) => assert!(msg.contains("single index")),
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_theme_dispatch() {
        let api = api();
        let result = api.theme(ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(false));
    }
}
