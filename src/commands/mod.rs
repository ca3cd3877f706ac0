//! Command-line interface for sheettask.
//!
//! One module per subcommand; [`Cli::menu`] parses the arguments and
//! dispatches. Commands that touch tasks open the SQLite-backed
//! [`TaskStore`] through [`open_store`].

pub mod add;
pub mod advise;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod status;
pub mod subtasks;

use crate::db::blobs::SqliteBlobStore;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Store the Gemini API key")]
    Login(login::LoginArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Set or cycle the status of a task", arg_required_else_help = true)]
    Status(status::StatusArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "List tasks, optionally filtered by a search query")]
    List(list::ListArgs),
    #[command(about = "Export tasks for spreadsheets")]
    Export(export::ExportArgs),
    #[command(about = "Ask the AI advisor to analyze your tasks")]
    Advise,
    #[command(about = "Ask the AI advisor to break a task into steps", arg_required_else_help = true)]
    Subtasks(subtasks::SubtasksArgs),
    #[command(about = "Remove all stored tasks")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Advise => advise::cmd().await,
            Commands::Subtasks(args) => subtasks::cmd(args).await,
            Commands::Clear(args) => clear::cmd(args),
        }
    }
}

/// Opens the task store kept in the application database.
pub fn open_store() -> Result<TaskStore<SqliteBlobStore>> {
    Ok(TaskStore::open(SqliteBlobStore::new()?))
}

/// Parses `today` or a `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| anyhow::anyhow!("{}", Message::InvalidDate(date_str.to_string())))
}
