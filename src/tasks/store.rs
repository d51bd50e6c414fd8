//! Task store trait and JSON file implementation.

use crate::error::Result;
use crate::tasks::id::next_task_id;
use crate::tasks::models::{Status, Task};
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Trait for task storage operations.
///
/// Mutating methods either apply fully and persist, or fail and leave the
/// store untouched.
#[allow(clippy::missing_errors_doc)]
pub trait TaskStore {
    /// Add a pending task with the given (trimmed) description.
    fn add(&mut self, description: &str) -> Result<Task>;

    /// List tasks in insertion order, optionally only those with `status`.
    fn list(&self, status: Option<Status>) -> Vec<Task>;

    /// Get a task by ID.
    fn get(&self, id: &str) -> Option<Task>;

    /// Mark a task as done. Completing a done task succeeds.
    fn complete(&mut self, id: &str) -> Result<()>;

    /// Delete a task by ID. Other tasks keep their IDs.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Replace a task's description with the (trimmed) new one.
    fn edit(&mut self, id: &str, description: &str) -> Result<()>;
}

/// Error when a referenced task is not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNotFound(pub String);

impl std::fmt::Display for TaskNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task not found: {}", self.0)
    }
}

impl std::error::Error for TaskNotFound {}

/// Error when a description is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDescription;

impl std::fmt::Display for EmptyDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "description cannot be empty")
    }
}

impl std::error::Error for EmptyDescription {}

/// Trim a description, rejecting it if nothing is left.
///
/// # Errors
///
/// Returns [`EmptyDescription`] if the description is empty or whitespace.
pub fn validate_description(description: &str) -> std::result::Result<&str, EmptyDescription> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(EmptyDescription);
    }
    Ok(trimmed)
}

/// What [`JsonTaskStore::load`] found at the backing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file yet; the store is empty.
    Missing,
    /// The file was read; holds the number of tasks loaded.
    Loaded(usize),
    /// The file could not be parsed; the store was reset to empty.
    Corrupt,
}

/// Task store backed by a single JSON file.
///
/// The whole list is kept in memory and the file is rewritten after every
/// mutation.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl JsonTaskStore {
    /// Open the store at `path`, loading any tasks already saved there.
    ///
    /// A missing or unparseable file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self { path: path.as_ref().to_path_buf(), tasks: Vec::new() };
        store.load()?;
        Ok(store)
    }

    /// Get the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replace the in-memory list with the contents of the backing file.
    ///
    /// Unparseable content is not an error: the store starts over empty and
    /// the next save overwrites the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No task file, starting empty");
                self.tasks = Vec::new();
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Task>>(&bytes) {
            Ok(tasks) => {
                tracing::debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
                let count = tasks.len();
                self.tasks = tasks;
                Ok(LoadOutcome::Loaded(count))
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Task file is corrupt, starting with an empty list"
                );
                self.tasks = Vec::new();
                Ok(LoadOutcome::Corrupt)
            }
        }
    }

    /// Write the whole list to the backing file.
    ///
    /// The JSON is written to a temporary file next to the target and renamed
    /// over it, so a crash mid-write leaves the previous file intact. A
    /// symlinked path is written through to the file it points at, and an
    /// existing file keeps its permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        self.tasks.serialize(&mut serializer)?;
        content.push(b'\n');

        let target = self.write_target();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&content)?;
        if let Ok(metadata) = std::fs::metadata(&target) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }
        tmp.persist(&target).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "Saved tasks");
        Ok(())
    }

    /// The file a save replaces: the symlink target if the path is a link.
    fn write_target(&self) -> PathBuf {
        std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Persist after a mutation, restoring `previous` if the write fails.
    fn commit(&mut self, previous: Vec<Task>) -> Result<()> {
        if let Err(e) = self.save() {
            self.tasks = previous;
            return Err(e);
        }
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TaskNotFound(id.to_string()).into())
    }
}

impl TaskStore for JsonTaskStore {
    fn add(&mut self, description: &str) -> Result<Task> {
        let description = validate_description(description)?;
        let task = Task::new(next_task_id(&self.tasks), description);

        let previous = self.tasks.clone();
        self.tasks.push(task.clone());
        self.commit(previous)?;

        tracing::debug!(id = %task.id, "Added task");
        Ok(task)
    }

    fn list(&self, status: Option<Status>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| status.map_or(true, |s| task.status == s))
            .cloned()
            .collect()
    }

    fn get(&self, id: &str) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn complete(&mut self, id: &str) -> Result<()> {
        let index = self.position(id)?;
        if self.tasks[index].is_done() {
            tracing::debug!(id, "Task already done");
        }

        let previous = self.tasks.clone();
        self.tasks[index].status = Status::Done;
        self.commit(previous)?;

        tracing::debug!(id, "Completed task");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let previous = self.tasks.clone();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == previous.len() {
            return Err(TaskNotFound(id.to_string()).into());
        }
        self.commit(previous)?;

        tracing::debug!(id, "Deleted task");
        Ok(())
    }

    fn edit(&mut self, id: &str, description: &str) -> Result<()> {
        let index = self.position(id)?;
        let description = validate_description(description)?;

        let previous = self.tasks.clone();
        self.tasks[index].description = description.to_string();
        self.commit(previous)?;

        tracing::debug!(id, "Edited task");
        Ok(())
    }
}
