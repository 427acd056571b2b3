//! # Storage Layer
//!
//! This module defines the storage abstraction for taskmaster. The
//! [`StorageBackend`] trait is a synchronous, string-keyed get/set port; the
//! typed [`TaskStore`] on top of it knows about the actual entries.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`InMemoryStore`] (no filesystem needed)
//! - Allow **future backends** (database, browser storage, etc.) without
//!   changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based storage. One JSON file
//!   per key in the data directory, written atomically.
//! - [`mem_backend::MemBackend`]: In-memory storage for testing, with a
//!   write-error simulation switch for error-path tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── todos.json      # The full task list, newest first
//! ├── theme.json      # Dark-mode preference (JSON boolean)
//! └── config.json     # App configuration
//! ```
//!
//! The task list is always written whole: every mutation re-serializes the
//! entire list. Reads are total—missing or malformed entries degrade to
//! defaults instead of failing startup.

use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod task_store;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use task_store::{TaskStore, TASKS_KEY, THEME_KEY};

/// Production store: [`TaskStore`] over the filesystem backend.
pub type FileStore = TaskStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        TaskStore::with_backend(FsBackend::new(data_dir))
    }
}

/// Test store: [`TaskStore`] over the in-memory backend.
pub type InMemoryStore = TaskStore<MemBackend>;

impl InMemoryStore {
    pub fn new() -> Self {
        TaskStore::with_backend(MemBackend::new())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
