//! # SheetTask - personal task tracker
//!
//! A command-line task tracker with recurring tasks, a spreadsheet export
//! view and an AI advisory panel.
//!
//! ## Features
//!
//! - **Recurring Tasks**: monthly and yearly tasks roll forward when completed
//! - **Task Management**: create, edit, delete and search tasks
//! - **Sheet Export**: CSV and JSON export of the whole collection
//! - **AI Advisor**: Gemini-generated insights and subtask suggestions
//! - **Local Storage**: the collection is kept in a local SQLite database
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheettask::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
