//! Task list management.
//!
//! This module provides the task list itself:
//! - Tasks with an ID, a description, and a pending/done status
//! - A [`TaskStore`] trait describing the operations on the list
//! - [`JsonTaskStore`], which keeps the list in a JSON file rewritten on every change
//!
//! # Example
//!
//! ```no_run
//! use tasklist::tasks::{JsonTaskStore, Status, TaskStore};
//!
//! let mut store = JsonTaskStore::open("/tmp/tasks.json").unwrap();
//!
//! let task = store.add("Buy milk").unwrap();
//! store.complete(&task.id).unwrap();
//!
//! for task in store.list(Some(Status::Done)) {
//!     println!("{}. {}", task.id, task.description);
//! }
//! ```

pub mod id;
pub mod models;
pub mod store;

pub use models::{InvalidStatus, Status, Task};
pub use store::{
    validate_description, EmptyDescription, JsonTaskStore, LoadOutcome, TaskNotFound, TaskStore,
};
