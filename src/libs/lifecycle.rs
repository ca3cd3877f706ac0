//! Create, edit, update and delete over task collection snapshots.
//!
//! Every operation takes the current collection by reference and returns a
//! fresh `Vec<Task>`; nothing is mutated in place. Lookups that miss are
//! silent no-ops so a late update to a deleted task simply disappears.

use super::recurrence::apply_status_change;
use super::task::{required_text, Priority, Recurrence, Status, Task, TaskDraft, TaskError};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Creates a task from `draft` and prepends it to the collection.
///
/// Returns the new task together with the new collection. Fails only when the
/// draft has an empty title or category.
pub fn create(tasks: &[Task], draft: TaskDraft, now: DateTime<Utc>) -> Result<(Task, Vec<Task>), TaskError> {
    let draft = draft.validated()?;
    let task = draft.into_task(Uuid::new_v4().to_string(), now);

    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.push(task.clone());
    next.extend_from_slice(tasks);

    Ok((task, next))
}

/// Field edits for an existing task; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    /// Assigned as-is, recurring tasks are not rolled forward.
    pub status: Option<Status>,
}

/// Applies `changes` to a copy of `task`, with the same title and category
/// rules as [`create`].
pub fn edit(task: &Task, changes: TaskChanges) -> Result<Task, TaskError> {
    let mut edited = task.clone();

    if let Some(title) = changes.title {
        edited.title = required_text("title", &title)?;
    }
    if let Some(category) = changes.category {
        edited.category = required_text("category", &category)?;
    }
    if let Some(description) = changes.description {
        edited.description = description;
    }
    if let Some(due_date) = changes.due_date {
        edited.due_date = due_date;
    }
    if let Some(recurrence) = changes.recurrence {
        edited.recurrence = recurrence;
    }
    if let Some(priority) = changes.priority {
        edited.priority = priority;
    }
    if let Some(status) = changes.status {
        edited.status = status;
    }

    Ok(edited)
}

/// Replaces the task with the same id.
pub fn update(tasks: &[Task], task: &Task) -> Vec<Task> {
    tasks.iter().map(|t| if t.id == task.id { task.clone() } else { t.clone() }).collect()
}

pub fn delete(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Moves the task with `id` to `status`, rolling it forward if it recurs.
pub fn set_status(tasks: &[Task], id: &str, status: Status, now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| if t.id == id { apply_status_change(t, status, now) } else { t.clone() })
        .collect()
}

/// Advances the task with `id` to the next status in the cycle.
pub fn cycle_status(tasks: &[Task], id: &str, now: DateTime<Utc>) -> Vec<Task> {
    match tasks.iter().find(|t| t.id == id) {
        Some(task) => set_status(tasks, id, task.status.cycle(), now),
        None => tasks.to_vec(),
    }
}

/// Resolves a full id or a unique id prefix to a task.
pub fn find<'a>(tasks: &'a [Task], id: &str) -> Result<&'a Task, TaskError> {
    if let Some(task) = tasks.iter().find(|t| t.id == id) {
        return Ok(task);
    }

    let mut matches = tasks.iter().filter(|t| !id.is_empty() && t.id.starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task),
        (Some(_), Some(_)) => Err(TaskError::Ambiguous(id.to_string())),
        _ => Err(TaskError::NotFound(id.to_string())),
    }
}
