//! Core data types: [`Task`], [`Priority`], [`Filter`] and id allocation.
//!
//! The persisted shape is deliberately small. A task is
//! `{ id, text, completed, priority }`, serialized as a JSON object with the
//! id as a plain number. Decoding is total for the optional parts: a task
//! written by an older build (or edited by hand) without a `priority` or
//! `completed` field still loads, and an unrecognized priority string
//! degrades to [`Priority::Medium`] instead of poisoning the whole list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a task. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

// Custom deserializer so an unknown priority string in stored data degrades
// to the default instead of failing the whole list parse.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Builds a fresh, uncompleted task. The text is trimmed; callers are
    /// expected to have rejected whitespace-only input already.
    pub fn new(id: TaskId, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into().trim().to_string(),
            completed: false,
            priority,
        }
    }
}

/// The currently selected view subset. Transient: never persisted, every
/// session starts back at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Active => write!(f, "active"),
            Filter::Completed => write!(f, "completed"),
        }
    }
}

/// Allocates task ids for a session.
///
/// Seeded with the highest id already in the list, so freshly added tasks
/// can never collide with existing ones—regardless of how fast they are
/// created. Ids are never derived from wall-clock time.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn seeded_from(tasks: &[Task]) -> Self {
        let max = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}
