use super::{open_store, parse_date};
use crate::{
    libs::{
        lifecycle::{self, TaskChanges},
        messages::Message,
        task::{Priority, Recurrence, Status},
        view::View,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or unique id prefix
    id: String,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// Due date as YYYY-MM-DD or "today"
    #[arg(long)]
    due: Option<String>,

    #[arg(short, long, value_enum)]
    recurrence: Option<Recurrence>,

    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    #[arg(short, long)]
    category: Option<String>,

    /// Sets the status as-is, without rolling recurring tasks forward
    #[arg(short, long, value_enum)]
    status: Option<Status>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut store = open_store()?;
    let current = store.find(&args.id)?.clone();

    let changes = TaskChanges {
        title: args.title,
        description: args.description,
        due_date: args.due.as_deref().map(parse_date).transpose()?,
        recurrence: args.recurrence,
        priority: args.priority,
        category: args.category,
        status: args.status,
    };
    let task = lifecycle::edit(&current, changes)?;

    if task == current {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    store.update(&task)?;
    msg_success!(Message::TaskUpdated(task.title.clone()));
    View::task(&task);
    Ok(())
}
