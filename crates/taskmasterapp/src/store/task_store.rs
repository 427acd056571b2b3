use super::backend::StorageBackend;
use crate::error::{Result, TaskError};
use crate::model::Task;

/// Store entry holding the serialized task list (newest first).
pub const TASKS_KEY: &str = "todos";
/// Store entry holding the dark-mode preference.
pub const THEME_KEY: &str = "theme";

const DARK_MODE_DEFAULT: bool = true;

/// Typed persistence layer over a raw [`StorageBackend`].
///
/// Reads are total: a missing or malformed entry degrades to its default
/// (empty list, dark theme) instead of erroring—bad persisted data must
/// never crash startup. Writes serialize the full value and overwrite the
/// entry unconditionally.
pub struct TaskStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> TaskStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the full task list. Missing, unreadable or malformed data all
    /// come back as the empty list.
    pub fn load_tasks(&self) -> Vec<Task> {
        match self.backend.read(TASKS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Serializes and writes the whole list unconditionally.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string_pretty(tasks).map_err(TaskError::Serialization)?;
        self.backend.write(TASKS_KEY, &raw)
    }

    /// Loads the dark-mode preference; absent or malformed means dark.
    pub fn load_theme(&self) -> bool {
        match self.backend.read(THEME_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(DARK_MODE_DEFAULT),
            _ => DARK_MODE_DEFAULT,
        }
    }

    pub fn save_theme(&self, dark: bool) -> Result<()> {
        let raw = serde_json::to_string(&dark).map_err(TaskError::Serialization)?;
        self.backend.write(THEME_KEY, &raw)
    }
}
