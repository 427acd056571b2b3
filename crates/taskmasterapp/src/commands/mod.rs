//! # Command Layer
//!
//! This module contains the **core business logic** of taskmaster. Each
//! command lives in its own submodule and wires the pure functions in
//! [`crate::list`] to the store: load the full list, apply the mutation,
//! persist the result, report what happened.
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. This struct carries:
//! - `affected_tasks`: Tasks that were modified (with their display index)
//! - `listed_tasks`: Tasks to display
//! - `progress`: The derived completed/total/percentage summary
//! - `theme`: The dark-mode preference, when a command touched it
//! - `config`: Configuration data (for the `config` command)
//! - `messages`: Structured messages with levels (info, success, warning, error)
//!
//! The UI layer (CLI, web, etc.) then decides how to render this data.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` to avoid filesystem dependencies, exercise all logic
//! branches, and verify `CmdResult` contents.

use crate::config::AppConfig;
use crate::index::DisplayTask;
use crate::list::Progress;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod status;
pub mod theme;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<DisplayTask>,
    pub listed_tasks: Vec<DisplayTask>,
    pub progress: Option<Progress>,
    pub theme: Option<bool>,
    pub config: Option<AppConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<DisplayTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_theme(mut self, dark: bool) -> Self {
        self.theme = Some(dark);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }
}
