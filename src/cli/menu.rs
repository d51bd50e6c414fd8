//! Interactive numbered menu.

use crate::cli::format_task;
use crate::error::Result;
use crate::tasks::{Status, TaskStore};
use std::io::{BufRead, Write};

const MENU: &str = "
=== Task List ===
1. Add a task
2. List all tasks
3. List pending tasks
4. List done tasks
5. Mark a task as done
6. Delete a task
7. Edit a task
8. Quit";

/// Run the menu loop until the user quits or input ends.
///
/// Invalid input and unknown IDs are reported and the loop continues.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written, or if the
/// task file cannot be saved.
pub fn run_menu(
    store: &mut dyn TaskStore,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "\nChoose an option (1-8): ")? else {
            break;
        };

        let outcome = match choice.trim() {
            "1" => {
                let Some(description) = prompt(input, output, "Task description: ")? else {
                    break;
                };
                store.add(&description).map(|_| "Task added.")
            }
            "2" => {
                print_tasks(store, output, "All Tasks", None)?;
                continue;
            }
            "3" => {
                print_tasks(store, output, "Pending Tasks", Some(Status::Pending))?;
                continue;
            }
            "4" => {
                print_tasks(store, output, "Done Tasks", Some(Status::Done))?;
                continue;
            }
            "5" => {
                let Some(id) = prompt(input, output, "ID of the task to mark as done: ")? else {
                    break;
                };
                store.complete(id.trim()).map(|()| "Task marked as done!")
            }
            "6" => {
                let Some(id) = prompt(input, output, "ID of the task to delete: ")? else {
                    break;
                };
                store.delete(id.trim()).map(|()| "Task deleted.")
            }
            "7" => {
                let Some(id) = prompt(input, output, "ID of the task to edit: ")? else {
                    break;
                };
                let Some(description) = prompt(input, output, "New description: ")? else {
                    break;
                };
                store.edit(id.trim(), &description).map(|()| "Task updated.")
            }
            "8" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid option. Please choose a number between 1 and 8.")?;
                continue;
            }
        };

        match outcome {
            Ok(message) => writeln!(output, "{message}")?,
            Err(e) if e.is_user_error() => writeln!(output, "Error: {e}")?,
            Err(e) => return Err(e),
        }
    }

    writeln!(output)?;
    Ok(())
}

/// Print `label` and read one line. Returns `None` at end of input.
fn prompt(input: &mut dyn BufRead, output: &mut dyn Write, label: &str) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_tasks(
    store: &dyn TaskStore,
    output: &mut dyn Write,
    title: &str,
    status: Option<Status>,
) -> Result<()> {
    writeln!(output, "\n=== {title} ===")?;
    for task in store.list(status) {
        writeln!(output, "{}", format_task(&task, status.is_none()))?;
    }
    Ok(())
}
