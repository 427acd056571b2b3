//! # Taskmaster CLI Architecture
//!
//! Taskmaster ships with a fully fledged CLI client, but the binary is
//! intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination. The CLI itself is
//! organized to keep the UI-specific concerns **entirely separate** from the
//! application logic.
//!
//! ## Workspace Structure
//!
//! Taskmaster is organized as a Cargo workspace with two crates:
//! - `crates/taskmasterapp/` — Core library with UI-agnostic business logic
//! - `crates/taskmaster/` — This CLI tool, depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/taskmaster/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + context wiring (commands.rs)         │
//! │  - Terminal rendering (print.rs, watch.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/taskmasterapp/src/api.rs)                │
//! │  - Normalizes user-facing indexes and selectors             │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/taskmasterapp/src/commands/*)        │
//! │  - Pure business logic + data access                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic: functions take normal
//! Rust values, return normal Rust types, and never assume terminal I/O.
//! The CLI layer is therefore responsible for **all** user-facing concerns:
//! argument parsing, context initialization, dispatch, error handling, and
//! rendering.
//!
//! ## Testing Approach
//!
//! - **Commands layer**: heavy unit testing of the business logic against
//!   the in-memory store.
//! - **CLI layer**: `assert_cmd` integration tests in `tests/` drive the
//!   built binary against an isolated `--data-dir`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
