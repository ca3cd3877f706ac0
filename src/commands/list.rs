use super::open_store;
use crate::{
    libs::{filter::TaskFilter, messages::Message, task::Status, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive search over title and category
    query: Option<String>,

    #[arg(short, long, value_enum)]
    status: Option<Status>,

    /// Only tasks that repeat
    #[arg(short, long)]
    recurring: bool,
}

impl ListArgs {
    fn filters(&self) -> Vec<TaskFilter> {
        let mut filters = Vec::new();
        if let Some(query) = &self.query {
            filters.push(TaskFilter::Query(query.clone()));
        }
        if let Some(status) = self.status {
            filters.push(TaskFilter::Status(status));
        }
        if self.recurring {
            filters.push(TaskFilter::Recurring);
        }
        filters
    }
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = open_store()?;
    let stats = store.stats();

    let tasks = args
        .filters()
        .iter()
        .fold(TaskFilter::All.apply(store.tasks()), |tasks, filter| filter.apply(&tasks));

    msg_print!(Message::TasksSummary {
        total: stats.total,
        recurring: stats.recurring,
        in_progress: stats.in_progress,
        completed: stats.completed,
    });

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks, Local::now().date_naive());
    Ok(())
}
