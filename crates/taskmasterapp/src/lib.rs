//! # Taskmaster Architecture
//!
//! Taskmaster is a **UI-agnostic task-list library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/taskmaster)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (index strings → display indexes)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## The List Core
//!
//! The actual task-list semantics live in [`list`] as pure functions: input
//! list + arguments → output list. Mutations never partially apply, lookup
//! misses are no-ops, and every command persists the resulting list in full.
//! Commands are thin wrappers that load from the store, call the pure
//! function, and save.
//!
//! ## Testing Strategy
//!
//! 1. **List core + model** (`list.rs`, `model.rs`): exhaustive unit tests
//!    of the pure semantics. This is where the lion's share of testing lives.
//! 2. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 3. **Storage** (`store/`): `MemBackend` unit tests plus filesystem
//!    round-trips in `tests/` with temp dirs.
//! 4. **API** (`api.rs`): selector parsing and dispatch tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Task`, `Priority`, `Filter`)
//! - [`list`]: Pure list operations and derived views
//! - [`index`]: Display indexing (1-based, newest first)
//! - [`clock`]: Cancellable ticker for the live dashboard
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod list;
pub mod model;
pub mod store;
