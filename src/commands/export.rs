//! Sheet export command.

use super::open_store;
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to sheettask_ai_export_<date>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = open_store()?;
    let exporter = Exporter::new(args.format, args.output);

    msg_info!(Message::ExportingTasks(store.tasks().len(), format!("{:?}", exporter.format())));
    exporter.export(store.tasks())?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
