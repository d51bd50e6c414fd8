//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output.

use crate::cli::{menu, Cli, Command};
use crate::config::Config;
use crate::error::Error;
use crate::tasks::{JsonTaskStore, Status, Task, TaskStore};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

impl CliOutput {
    fn success(stdout: Vec<String>) -> Self {
        Self { exit_code: ExitCode::SUCCESS, stdout, stderr: vec![] }
    }

    fn failure(message: String) -> Self {
        Self { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![message] }
    }
}

/// Run the parsed command line.
///
/// Resolves the backing file from `--file`, the config, or `base_dir`, opens
/// the store, and runs the command. The interactive menu reads `input` and
/// writes `output` directly; other commands return their messages.
pub fn run(
    cli: Cli,
    config: &Config,
    base_dir: &Path,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> CliOutput {
    let command = cli.command.unwrap_or(Command::Menu);
    if !command.needs_store() {
        return run_version();
    }

    let path = config.tasks_path(base_dir, cli.file.as_deref());
    let mut store = match JsonTaskStore::open(&path) {
        Ok(store) => store,
        Err(e) => return CliOutput::failure(format!("Error: cannot open {}: {e}", path.display())),
    };

    run_command(command, &mut store, input, output)
}

/// Run a single command against an open store.
pub fn run_command(
    command: Command,
    store: &mut dyn TaskStore,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> CliOutput {
    match command {
        Command::Add { description } => run_add(store, &description.join(" ")),
        Command::List { status } => run_list(store, status),
        Command::Complete { id } => {
            report(store.complete(&id).map(|()| format!("Task {id} marked as done.")))
        }
        Command::Delete { id } => report(store.delete(&id).map(|()| format!("Task {id} deleted."))),
        Command::Edit { id, description } => report(
            store.edit(&id, &description.join(" ")).map(|()| format!("Task {id} updated.")),
        ),
        Command::Menu => match menu::run_menu(store, input, output) {
            Ok(()) => CliOutput::success(vec![]),
            Err(e) => CliOutput::failure(format!("Error: {e}")),
        },
        Command::Version => run_version(),
    }
}

fn run_version() -> CliOutput {
    CliOutput::success(vec![format!("tasklist v{}", crate::VERSION)])
}

fn run_add(store: &mut dyn TaskStore, description: &str) -> CliOutput {
    report(store.add(description).map(|task| format!("Task {} added.", task.id)))
}

fn run_list(store: &dyn TaskStore, status: Option<Status>) -> CliOutput {
    let tasks = store.list(status);
    if tasks.is_empty() {
        return CliOutput::success(vec!["No tasks.".to_string()]);
    }
    let show_status = status.is_none();
    CliOutput::success(tasks.iter().map(|task| format_task(task, show_status)).collect())
}

fn report(result: Result<String, Error>) -> CliOutput {
    match result {
        Ok(message) => CliOutput::success(vec![message]),
        Err(e) => CliOutput::failure(format!("Error: {e}")),
    }
}

/// Render one task as a listing line.
///
/// Full listings include the status (`1. [pending] Buy milk`); filtered
/// listings leave it out since every line would carry the same one.
#[must_use]
pub fn format_task(task: &Task, show_status: bool) -> String {
    if show_status {
        format!("{}. [{}] {}", task.id, task.status, task.description)
    } else {
        format!("{}. {}", task.id, task.description)
    }
}
