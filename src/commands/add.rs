use super::{open_store, parse_date, subtasks::print_subtasks};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        task::{Priority, Recurrence, Status, TaskDraft},
        view::View,
    },
    msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    #[arg(short, long, default_value = "")]
    description: String,

    /// Due date as YYYY-MM-DD or "today"
    #[arg(long, default_value = "today")]
    due: String,

    #[arg(short, long, value_enum, default_value = "one-time")]
    recurrence: Recurrence,

    /// Defaults to the configured task priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Defaults to the configured task category
    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long, value_enum, default_value = "todo")]
    status: Status,

    /// Ask the AI advisor for subtasks after creating the task
    #[arg(long)]
    suggest: bool,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let defaults = config.tasks.clone().unwrap_or_default();

    let draft = TaskDraft {
        description: args.description,
        due_date: parse_date(&args.due)?,
        recurrence: args.recurrence,
        status: args.status,
        priority: args.priority.unwrap_or(defaults.priority),
        category: args.category.unwrap_or(defaults.category),
        ..TaskDraft::new(&args.title)
    };

    let mut store = open_store()?;
    let task = store.create(draft, Utc::now())?;

    msg_success!(Message::TaskCreated(task.title.clone()));
    View::task(&task);

    if args.suggest {
        print_subtasks(&config, &task).await;
    }

    Ok(())
}
