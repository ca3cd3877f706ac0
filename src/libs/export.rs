//! Sheet export of the task collection.
//!
//! Writes the collection as a flat table for spreadsheet tools, or as the
//! stored JSON array for backups.
//!
//! ## Features
//!
//! - **CSV**: one row per task, fixed column order, standard quoting
//! - **JSON**: the same format the task store persists, pretty printed
//! - **File Naming**: `sheettask_ai_export_<YYYY-MM-DD>.<ext>` unless a path is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheettask::libs::export::{Exporter, ExportFormat};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::task::Task;
use anyhow::Result;
use chrono::{Local, SecondsFormat};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers of the CSV export, in order.
pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "Title",
    "Description",
    "Due Date",
    "Recurrence",
    "Priority",
    "Status",
    "Category",
    "Created At",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet applications.
    Csv,
    /// The stored JSON array, pretty printed.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

/// Renders the collection as CSV text, header row first.
pub fn to_csv(tasks: &[Task]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADERS)?;

    for task in tasks {
        let due_date = task.due_date.format("%Y-%m-%d").to_string();
        let created_at = task.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        wtr.write_record([
            task.id.as_str(),
            task.title.as_str(),
            task.description.as_str(),
            due_date.as_str(),
            task.recurrence.as_str(),
            task.priority.as_str(),
            task.status.as_str(),
            task.category.as_str(),
            created_at.as_str(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("failed to flush CSV: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders the collection as pretty-printed JSON.
pub fn to_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a dated default file name.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "sheettask_ai_export_{}.{}",
                Local::now().format("%Y-%m-%d"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` to the output file.
    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        let content = match self.format {
            ExportFormat::Csv => to_csv(tasks)?,
            ExportFormat::Json => to_json(tasks)?,
        };

        File::create(&self.output_path)?.write_all(content.as_bytes())?;
        tracing::debug!(path = %self.output_path.display(), count = tasks.len(), "exported tasks");
        Ok(())
    }
}
