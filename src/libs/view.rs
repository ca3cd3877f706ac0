use super::formatter::format_due;
use super::task::Task;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the task table shown by `list`.
    pub fn tasks_table(tasks: &[Task], today: NaiveDate) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "RECURRENCE", "PRIORITY", "CATEGORY", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.short_id(),
                task.title,
                format_due(task, today),
                task.recurrence,
                task.priority,
                task.category,
                task.status
            ]);
        }

        table
    }

    pub fn tasks(tasks: &[Task], today: NaiveDate) {
        Self::tasks_table(tasks, today).printstd();
    }

    /// Prints every field of a single task.
    pub fn task(task: &Task) {
        let mut table = Table::new();
        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Due", task.due_date]);
        table.add_row(row!["Recurrence", task.recurrence]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Category", task.category]);
        if let Some(done) = task.last_completed_date {
            table.add_row(row!["Last completed", done.format("%Y-%m-%d")]);
        }
        table.add_row(row!["Created", task.created_at.format("%Y-%m-%d %H:%M")]);
        table.printstd();
    }
}
