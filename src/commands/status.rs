use super::open_store;
use crate::{
    libs::{
        messages::Message,
        task::{Status, Task},
    },
    msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task id or unique id prefix
    id: String,

    /// New status; cycles todo -> in-progress -> done when omitted
    #[arg(value_enum)]
    status: Option<Status>,
}

/// Describes a status change: a completed cycle when the task was rolled
/// forward, otherwise the status it now has.
pub fn outcome(before: &Task, after: &Task) -> Message {
    if after.last_completed_date != before.last_completed_date {
        Message::TaskRolledForward(after.title.clone(), after.due_date.to_string())
    } else {
        Message::TaskStatusChanged(after.title.clone(), after.status.to_string())
    }
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let mut store = open_store()?;
    let before = store.find(&args.id)?.clone();

    let after = match args.status {
        Some(status) => store.set_status(&before.id, status, Utc::now())?,
        None => store.cycle_status(&before.id, Utc::now())?,
    };

    if let Some(after) = after {
        msg_success!(outcome(&before, &after));
    }

    Ok(())
}
