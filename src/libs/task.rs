//! Task entity and its closed value sets.
//!
//! A [`Task`] is the only entity the tracker knows about. Its enumerated
//! fields ([`Recurrence`], [`Status`], [`Priority`]) serialise to the exact
//! string literals of the stored JSON format, so collections written by older
//! versions of the tracker load unchanged.
//!
//! ## Stored Format
//!
//! ```json
//! {
//!   "id": "0b6f3c1e-7a2d-4a53-9a3e-2f8e9b1c4d55",
//!   "title": "Pay rent",
//!   "description": "",
//!   "dueDate": "2024-01-31",
//!   "recurrence": "monthly",
//!   "status": "todo",
//!   "priority": "high",
//!   "category": "Bills",
//!   "createdAt": "2024-01-02T09:15:00Z"
//! }
//! ```

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category assigned to tasks created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Errors raised by task lifecycle operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid task: {0}")]
    Validation(String),
    #[error("No task matches id '{0}'")]
    NotFound(String),
    #[error("Id prefix '{0}' matches more than one task")]
    Ambiguous(String),
}

/// How a task repeats once completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Recurrence {
    /// One-time task, finished for good when done.
    #[default]
    #[serde(rename = "one-time")]
    #[value(name = "one-time", alias = "none")]
    None,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "yearly")]
    Yearly,
}

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Status {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    #[serde(rename = "low")]
    Low,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "one-time",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::None)
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// Next status in the todo -> in-progress -> done -> todo cycle.
    pub fn cycle(&self) -> Status {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Todo,
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

macro_rules! display_as_literal {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_literal!(Recurrence, Status, Priority);

/// A single trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    /// Set when a recurring task completes a cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A task before it has been assigned an id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub recurrence: Recurrence,
    pub status: Status,
    pub priority: Priority,
    pub category: String,
    pub last_completed_date: Option<DateTime<Utc>>,
}

/// Trims `value`, rejecting it when nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String, TaskError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TaskError::Validation(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl TaskDraft {
    /// Draft with the form defaults: due today, one-time, todo, medium priority.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            due_date: Local::now().date_naive(),
            recurrence: Recurrence::None,
            status: Status::Todo,
            priority: Priority::Medium,
            category: default_category(),
            last_completed_date: None,
        }
    }

    /// Checks the draft and normalises surrounding whitespace.
    pub fn validated(mut self) -> Result<Self, TaskError> {
        self.title = required_text("title", &self.title)?;
        self.category = required_text("category", &self.category)?;
        Ok(self)
    }

    pub(crate) fn into_task(self, id: String, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            recurrence: self.recurrence,
            status: self.status,
            priority: self.priority,
            category: self.category,
            last_completed_date: self.last_completed_date,
            created_at,
        }
    }
}

impl Task {
    /// First eight characters of the id, used in tables and messages.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}
