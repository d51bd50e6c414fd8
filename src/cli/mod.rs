//! Command-line interface for tasklist.
//!
//! One-shot subcommands for scripting, plus the interactive numbered menu
//! that runs when no subcommand is given.

mod menu;
mod run;


pub use menu::run_menu;
pub use run::{format_task, run, run_command, CliOutput};

use crate::tasks::Status;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tasklist - a small task list kept in a JSON file.
///
/// Run without a command to open the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backing JSON file (default: `tasks_file` from .tasklist.yaml, else ./tasks.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task.
    ///
    /// Words are joined with spaces, so quoting is optional.
    Add {
        /// What needs doing
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// List tasks in the order they were added.
    List {
        /// Only show tasks with this status: pending, done
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Mark a task as done.
    Complete {
        /// Task ID
        id: String,
    },

    /// Delete a task. Other tasks keep their IDs.
    Delete {
        /// Task ID
        id: String,
    },

    /// Change a task's description.
    Edit {
        /// Task ID
        id: String,

        /// New description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Open the interactive menu (the default).
    Menu,

    /// Show version information.
    Version,
}

impl Command {
    /// Returns true if this command reads from and writes to the terminal.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Menu)
    }

    /// Returns true if this command needs the task file.
    #[must_use]
    pub const fn needs_store(&self) -> bool {
        !matches!(self, Self::Version)
    }
}
