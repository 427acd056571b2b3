//! # CLI Behavior
//!
//! This is **one possible UI client** for taskmaster—not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! ## Naked Execution (`taskmaster`)
//!
//! Running `taskmaster` with no arguments defaults to `taskmaster list`.
//! The "read" operation is most of the usage—it should be the path of least
//! resistance.
//!
//! ## Batch Selectors
//!
//! `toggle` and `delete` accept several indexes and inclusive ranges in one
//! invocation: `taskmaster done 1 3` or `taskmaster rm 2-4`. Indexes are
//! 1-based positions in the newest-first list, exactly as `list` prints
//! them.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `print`: Output formatting (task lines, progress bar, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants for the dashboard
//! - `watch`: Live dashboard with the once-per-second clock

mod commands;
mod print;
pub mod setup;
mod styles;
mod watch;

pub use commands::run;
