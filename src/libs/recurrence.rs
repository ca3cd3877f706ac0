//! Status transitions and the roll-forward of recurring tasks.
//!
//! Moving a recurring task into `done` does not finish it. The task is
//! rolled forward instead: its due date advances by one period, the status is
//! reset to `todo`, and the completion instant is stamped into
//! `last_completed_date`. Every other transition is a plain status assignment.
//!
//! ## Month Overflow
//!
//! Advancing clamps to the last valid day of the target month:
//!
//! ```text
//! 2024-01-31 + 1 month  -> 2024-02-29
//! 2023-01-31 + 1 month  -> 2023-02-28
//! 2024-02-29 + 1 year   -> 2025-02-28
//! 2024-03-31 + 1 month  -> 2024-04-30
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use sheettask::libs::recurrence::apply_status_change;
//! use sheettask::libs::task::{Recurrence, Status, TaskDraft};
//!
//! let mut draft = TaskDraft::new("Pay rent");
//! draft.recurrence = Recurrence::Monthly;
//! draft.due_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let task = sheettask::libs::lifecycle::create(&[], draft, Utc::now()).unwrap().0;
//!
//! let next = apply_status_change(&task, Status::Done, Utc::now());
//! assert_eq!(next.status, Status::Todo);
//! assert_eq!(next.due_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! ```

use super::task::{Recurrence, Status, Task};
use chrono::{DateTime, Months, NaiveDate, Utc};

impl Recurrence {
    /// Returns `date` advanced by one period, or `None` for one-time tasks
    /// and for dates at the edge of the calendar range.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Recurrence::None => None,
            Recurrence::Monthly => date.checked_add_months(Months::new(1)),
            Recurrence::Yearly => date.checked_add_months(Months::new(12)),
        }
    }
}

/// Applies `new_status` to `task`, rolling recurring tasks forward when they
/// arrive at `done`. The input is never modified.
pub fn apply_status_change(task: &Task, new_status: Status, now: DateTime<Utc>) -> Task {
    let completes_cycle = new_status == Status::Done && task.status != Status::Done && task.recurrence.is_recurring();

    if !completes_cycle {
        return Task {
            status: new_status,
            ..task.clone()
        };
    }

    let due_date = match task.recurrence.advance(task.due_date) {
        Some(next) => next,
        None => {
            tracing::warn!(task = %task.id, due = %task.due_date, "due date cannot be advanced, keeping it");
            task.due_date
        }
    };

    tracing::debug!(task = %task.id, from = %task.due_date, to = %due_date, "rolled recurring task forward");

    Task {
        status: Status::Todo,
        due_date,
        last_completed_date: Some(now),
        ..task.clone()
    }
}
