//! Date formatting for table views.
//!
//! ## Examples
//!
//! ```rust
//! use sheettask::libs::formatter::format_days;
//!
//! assert_eq!(format_days(0), "today");
//! assert_eq!(format_days(3), "in 3 days");
//! assert_eq!(format_days(-1), "1 day overdue");
//! ```

use super::task::{Status, Task};
use chrono::NaiveDate;

/// Describes a day offset relative to today.
pub fn format_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("in {} days", d),
    }
}

/// Due date plus its distance from `today`; done tasks show the date alone.
pub fn format_due(task: &Task, today: NaiveDate) -> String {
    let date = task.due_date.format("%Y-%m-%d");
    if task.status == Status::Done {
        return date.to_string();
    }
    let days = (task.due_date - today).num_days();
    format!("{} ({})", date, format_days(days))
}
