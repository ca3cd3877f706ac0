use super::{advise::advisor, open_store};
use crate::{
    api::Advisor,
    libs::{config::Config, messages::Message, task::Task},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SubtasksArgs {
    /// Task id or unique id prefix
    id: String,
}

/// Asks the advisor for subtasks of `task` and prints them as a list.
pub async fn print_subtasks(config: &Config, task: &Task) {
    let steps = advisor(config).suggest_subtasks(&task.title, &task.description).await;

    if steps.is_empty() {
        msg_info!(Message::NoSubtasks);
        return;
    }

    msg_print!(Message::SubtasksHeader(task.title.clone()));
    for (i, step) in steps.iter().enumerate() {
        msg_print!(format!("  {}. {}", i + 1, step));
    }
}

pub async fn cmd(args: SubtasksArgs) -> Result<()> {
    let config = Config::read()?;
    let store = open_store()?;
    let task = store.find(&args.id)?.clone();

    print_subtasks(&config, &task).await;
    Ok(())
}
