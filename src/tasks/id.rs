//! Task ID allocation.
//!
//! IDs are 1-based decimal strings. A new ID is `count + 1`, bumped past the
//! highest numeric ID still in the list so that a delete followed by an add
//! can never hand out an ID that a surviving task already holds.

use crate::tasks::models::Task;
use std::collections::HashSet;

/// Allocate the ID for the next task appended to `tasks`.
///
/// IDs that are not decimal numbers (hand-edited files) are ignored when
/// looking for the maximum, but still count toward the list length. An ID at
/// `u64::MAX` has no successor; if the candidate is already taken, the
/// smallest free ID from 1 upward is used instead.
#[must_use]
pub fn next_task_id(tasks: &[Task]) -> String {
    let by_count = u64::try_from(tasks.len()).unwrap_or(u64::MAX).saturating_add(1);
    let by_max = tasks
        .iter()
        .filter_map(|task| task.id.parse::<u64>().ok())
        .filter_map(|id| id.checked_add(1))
        .max()
        .unwrap_or(0);
    let candidate = by_count.max(by_max).to_string();

    let taken: HashSet<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
    if !taken.contains(candidate.as_str()) {
        return candidate;
    }
    // At most `len` IDs are taken, so one of 1..=len+1 is free.
    (1..=by_count)
        .map(|n| n.to_string())
        .find(|id| !taken.contains(id.as_str()))
        .unwrap_or(candidate)
}
