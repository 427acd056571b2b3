use clap::{Parser, Subcommand, ValueEnum};
use taskmasterapp::model::{Filter, Priority};

#[derive(Parser, Debug)]
#[command(
    name = "taskmaster",
    bin_name = "taskmaster",
    version,
    about = "Organize your day: a persisted task list with priorities",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (defaults to the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Priority for the new task (defaults to the configured default)
        #[arg(short, long, value_enum)]
        priority: Option<PriorityArg>,

        /// Task text (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List tasks
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Show only a subset of tasks
        #[arg(short, long, value_enum, default_value = "all")]
        filter: FilterArg,
    },

    /// Replace the text of a task
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Index of the task (e.g. 2)
        index: String,

        /// New task text (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Toggle completion of one or more tasks
    #[command(alias = "done", display_order = 4)]
    Toggle {
        /// Indexes of the tasks (e.g. 1 3 or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more tasks
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Indexes of the tasks (e.g. 1 3 or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show completion progress
    #[command(display_order = 6)]
    Status,

    /// Show or change the color theme
    #[command(display_order = 7)]
    Theme {
        /// Omit to show the current theme
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (e.g. default-priority)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Live dashboard with a clock, progress and the task list
    #[command(alias = "w", display_order = 9)]
    Watch,
}
