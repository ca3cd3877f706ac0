//! Query views over a task collection.

use super::task::{Status, Task};

/// Tasks whose title or category contains `query`, ignoring case.
///
/// An empty query returns the whole collection in its original order.
pub fn filter(tasks: &[Task], query: &str) -> Vec<Task> {
    if query.is_empty() {
        return tasks.to_vec();
    }

    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&needle) || t.category.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Query(String),
    Status(Status),
    Recurring,
}

impl TaskFilter {
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        match self {
            TaskFilter::All => tasks.to_vec(),
            TaskFilter::Query(query) => filter(tasks, query),
            TaskFilter::Status(status) => tasks.iter().filter(|t| t.status == *status).cloned().collect(),
            TaskFilter::Recurring => tasks.iter().filter(|t| t.recurrence.is_recurring()).cloned().collect(),
        }
    }
}

/// Dashboard counters for a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub recurring: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            TaskStats {
                total: tasks.len(),
                ..Default::default()
            },
            |mut stats, t| {
                if t.recurrence.is_recurring() {
                    stats.recurring += 1;
                }
                match t.status {
                    Status::InProgress => stats.in_progress += 1,
                    Status::Done => stats.completed += 1,
                    Status::Todo => {}
                }
                stats
            },
        )
    }
}
